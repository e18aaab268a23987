// File: crates/demo/src/main.rs
// Summary: Demo renders a horizontal track plot, a position time series and a
// sky plot to PNGs; optionally loads a CSV track (sow,east,north).

use anyhow::{Context, Result};
use navplot_core::{theme, Color, Graph, HAlign, LabelPos, LineStyle, MarkShape, Point, VAlign, Viewport};
use std::path::{Path, PathBuf};

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 640;

/// One track sample: GPS seconds-of-week plus east/north offsets in meters.
#[derive(Clone, Copy, Debug)]
struct Sample {
    sow: f64,
    east: f64,
    north: f64,
}

fn main() -> Result<()> {
    let samples = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let s = load_track_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} samples from {}", s.len(), path.display());
            s
        }
        None => {
            let s = synth_track();
            println!("No input file given; using a synthetic {}-sample track", s.len());
            s
        }
    };
    if samples.is_empty() {
        anyhow::bail!("no track samples loaded");
    }

    let theme = theme::find("dark");
    let out_dir = PathBuf::from("target/out");

    render_track(&samples, &theme, &out_dir.join("track.png"))?;
    render_series(&samples, &theme, &out_dir.join("east_series.png"))?;
    render_sky(&theme, &out_dir.join("skyplot.png"))?;

    Ok(())
}

/// Horizontal track: range rings about the origin, the track polyline,
/// per-sample marks shaded by age, and a 2-sigma error ellipse at the
/// last position.
fn render_track(samples: &[Sample], theme: &theme::Theme, out: &Path) -> Result<()> {
    let mut graph = Graph::new(Viewport::new(72, 24, WIDTH - 96, HEIGHT - 80));
    graph.apply_theme(theme);
    graph.title = "Ground Track".to_string();
    graph.x_label = "East (m)".to_string();
    graph.y_label = "North (m)".to_string();

    let (el, nl) = bounds(samples);
    graph.view.set_limits(el, nl);
    // keep meters square on screen
    let (xs, ys) = graph.view.scale();
    let s = xs.max(ys);
    graph.view.set_scale(s, s);

    let xs_data: Vec<f64> = samples.iter().map(|s| s.east).collect();
    let ys_data: Vec<f64> = samples.iter().map(|s| s.north).collect();
    let colors: Vec<Color> = (0..samples.len())
        .map(|i| {
            let t = i as f64 / samples.len().max(1) as f64;
            Color::rgb(60 + (140.0 * t) as u8, 160, 255 - (120.0 * t) as u8)
        })
        .collect();

    let last = samples[samples.len() - 1];
    navplot_render_skia::render_to_png(
        WIDTH,
        HEIGHT,
        theme.background,
        |p| {
            graph.draw_circles(p, true);
            graph.draw_poly(p, &xs_data, &ys_data, theme.series, LineStyle::Solid);
            graph.draw_marks(p, &xs_data, &ys_data, &colors, MarkShape::Dot, 4, 0.0);
            graph.draw_circle(p, last.east, last.north, Color::rgb(220, 80, 80), 2.0, 1.5, LineStyle::Dash);
            graph.draw_text_hemmed(
                p,
                last.east,
                last.north,
                "last",
                theme.label,
                theme.background,
                HAlign::Left,
                VAlign::Bottom,
                0.0,
            );
        },
        out,
    )?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// East offset against time, with calendar labels on the x axis.
fn render_series(samples: &[Sample], theme: &theme::Theme, out: &Path) -> Result<()> {
    let mut graph = Graph::new(Viewport::new(72, 24, WIDTH - 96, HEIGHT - 80));
    graph.apply_theme(theme);
    graph.title = "East Offset".to_string();
    graph.y_label = "East (m)".to_string();
    graph.x_label_pos = LabelPos::Time;
    graph.week = 2200;

    let t0 = samples[0].sow;
    let t1 = samples[samples.len() - 1].sow;
    let (el, _) = bounds(samples);
    graph.view.set_limits([t0, t1.max(t0 + 1.0)], el);

    let ts: Vec<f64> = samples.iter().map(|s| s.sow).collect();
    let es: Vec<f64> = samples.iter().map(|s| s.east).collect();

    navplot_render_skia::render_to_png(
        WIDTH,
        HEIGHT,
        theme.background,
        |p| {
            graph.draw_axis(p, true, true);
            graph.draw_poly(p, &ts, &es, theme.series, LineStyle::Solid);
        },
        out,
    )?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Sky plot with a handful of satellites placed by azimuth/elevation.
fn render_sky(theme: &theme::Theme, out: &Path) -> Result<()> {
    let graph = {
        let mut g = Graph::new(Viewport::new(192, 20, HEIGHT - 40, HEIGHT - 40));
        g.apply_theme(theme);
        g
    };
    let center = Point::new(192 + (HEIGHT - 40) / 2, 20 + (HEIGHT - 40) / 2);
    let radius = (HEIGHT - 60) / 2;

    // (prn, azimuth deg, elevation deg)
    let sats = [
        ("G05", 45.0, 70.0),
        ("G12", 130.0, 35.0),
        ("G17", 210.0, 18.0),
        ("G24", 275.0, 52.0),
        ("R09", 330.0, 10.0),
    ];

    navplot_render_skia::render_to_png(
        WIDTH,
        HEIGHT,
        theme.background,
        |p| {
            graph.draw_sky_plot_hemmed_at(p, center, theme.grid, theme.label, theme.background, 2 * radius);
            for (prn, az, el) in sats {
                let azr = f64::to_radians(az);
                let r = f64::from(radius) * (90.0 - el) / 90.0;
                let sp = Point::new(
                    center.x + (r * azr.sin()).round() as i32,
                    center.y - (r * azr.cos()).round() as i32,
                );
                graph.draw_mark_hemmed_at(p, sp, MarkShape::Circle, theme.series, theme.background, 10, 0.0);
                let lp = Point::new(sp.x, sp.y - 8);
                graph.draw_text_hemmed_at(
                    p,
                    lp,
                    prn,
                    theme.label,
                    theme.background,
                    HAlign::Center,
                    VAlign::Bottom,
                    0.0,
                );
            }
            let footer = Point::new(center.x, center.y + radius + 24);
            graph.draw_text_sized_at(
                p,
                footer,
                "azimuth / elevation",
                theme.grid,
                HAlign::Center,
                VAlign::Top,
                0.0,
                10.0,
            );
        },
        out,
    )?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Visible bounds of the track with a 5% margin per axis.
fn bounds(samples: &[Sample]) -> ([f64; 2], [f64; 2]) {
    let mut e = [f64::INFINITY, f64::NEG_INFINITY];
    let mut n = [f64::INFINITY, f64::NEG_INFINITY];
    for s in samples {
        e[0] = e[0].min(s.east);
        e[1] = e[1].max(s.east);
        n[0] = n[0].min(s.north);
        n[1] = n[1].max(s.north);
    }
    let me = ((e[1] - e[0]) * 0.05).max(0.5);
    let mn = ((n[1] - n[0]) * 0.05).max(0.5);
    ([e[0] - me, e[1] + me], [n[0] - mn, n[1] + mn])
}

/// Load a `sow,east,north` CSV (header names are matched case-insensitively).
fn load_track_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_sow = idx(&["sow", "time", "t", "seconds"]);
    let i_east = idx(&["east", "e", "x"]);
    let i_north = idx(&["north", "n", "y"]);

    let (i_east, i_north) = match (i_east, i_north) {
        (Some(e), Some(n)) => (e, n),
        _ => anyhow::bail!("CSV needs east/north columns"),
    };

    let mut out = Vec::new();
    let mut row = 0.0f64;
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let sow = i_sow.and_then(field).unwrap_or_else(|| {
            let v = row;
            row += 1.0;
            v
        });
        if let (Some(east), Some(north)) = (field(i_east), field(i_north)) {
            out.push(Sample { sow, east, north });
        }
    }
    Ok(out)
}

/// Synthetic wandering track, one sample per second for ten minutes.
fn synth_track() -> Vec<Sample> {
    let mut out = Vec::with_capacity(600);
    for i in 0..600 {
        let t = f64::from(i);
        let sow = 120_000.0 + t;
        let east = (t * 0.021).sin() * 6.0 + t * 0.002;
        let north = (t * 0.017).cos() * 4.5 - t * 0.001;
        out.push(Sample { sow, east, north });
    }
    out
}
