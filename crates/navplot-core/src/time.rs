// File: crates/navplot-core/src/time.rs
// Summary: GPS week/seconds-of-week to calendar labels for time axes.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// GPS time epoch: 1980-01-06 00:00:00.
fn gps_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1980, 1, 6, 0, 0, 0).unwrap()
}

/// Convert GPS week + seconds-of-week to a calendar time. Leap seconds are
/// not applied; labels show GPS time as-is.
pub fn gpst_to_utc(week: i32, sow: f64) -> DateTime<Utc> {
    let total = f64::from(week) * 604800.0 + sow;
    gps_epoch() + Duration::milliseconds((total * 1000.0).round() as i64)
}

/// Calendar label for a time-axis tick at `sow` within `week`. The field
/// layout follows the tick span so neighboring labels stay distinct:
/// sub-second ticks show tenths, sub-minute ticks show seconds, sub-day
/// ticks show hours:minutes, sub-month ticks show month/day, anything
/// coarser shows year/month.
pub fn time_label(week: i32, sow: f64, tick: f64) -> String {
    const DAY: f64 = 86400.0;
    let t = gpst_to_utc(week, sow);
    if tick < 1.0 {
        let tenths = (f64::from(t.timestamp_subsec_millis()) / 100.0).round() as u32;
        format!("{}.{}", t.format("%H:%M:%S"), tenths.min(9))
    } else if tick < 60.0 {
        t.format("%H:%M:%S").to_string()
    } else if tick < DAY {
        t.format("%H:%M").to_string()
    } else if tick < DAY * 30.0 {
        t.format("%m/%d").to_string()
    } else {
        t.format("%y/%m").to_string()
    }
}

/// Numeric label with precision derived from the tick interval: coarser
/// ticks get fewer decimals.
pub fn num_label(v: f64, tick: f64) -> String {
    let n = (0.9 - tick.log10()).floor() as i32;
    format!("{:.*}", n.max(0) as usize, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_epoch_is_week_zero() {
        let t = gpst_to_utc(0, 0.0);
        assert_eq!(t.format("%Y/%m/%d %H:%M:%S").to_string(), "1980/01/06 00:00:00");
    }

    #[test]
    fn label_layout_follows_tick() {
        // week 2200 starts 2022-03-06 00:00:00 GPS time
        assert_eq!(time_label(2200, 3723.5, 0.5), "01:02:03.5");
        assert_eq!(time_label(2200, 3723.0, 30.0), "01:02:03");
        assert_eq!(time_label(2200, 3720.0, 3600.0), "01:02");
        assert_eq!(time_label(2200, 0.0, 86400.0 * 2.0), "03/06");
        assert_eq!(time_label(2200, 0.0, 86400.0 * 70.0), "22/03");
    }

    #[test]
    fn num_label_precision_tracks_tick() {
        assert_eq!(num_label(1.5, 0.5), "1.5");
        assert_eq!(num_label(1.25, 0.05), "1.25");
        assert_eq!(num_label(100.0, 50.0), "100");
        assert_eq!(num_label(-0.2, 0.1), "-0.2");
    }
}
