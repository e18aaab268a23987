// File: crates/navplot-core/src/theme.rs
// Summary: Light/Dark theming for the plot canvas color slots.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub label: Color,
    pub series: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(70, 70, 78),
            label: Color::rgb(210, 210, 220),
            series: Color::rgb(64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(250, 250, 252),
            grid: Color::rgb(200, 200, 205),
            label: Color::rgb(20, 20, 30),
            series: Color::rgb(32, 120, 200),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::BLACK,
            grid: Color::rgb(0x44, 0x44, 0x44),
            label: Color::WHITE,
            series: Color::rgb(0x00, 0xff, 0xff),
        }
    }
}

/// Built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
