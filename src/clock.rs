//! Clock formatting for the dashboard chrome
//!
//! The dashboard renders a ticking clock and a panel of world clocks in the
//! timezones of [`WORLD_CLOCK_ZONES`]. This module formats and owns the zone
//! list; the 1-second tick belongs to the renderer.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::models::ClockFormat;

/// Format an hour of day (0-23) according to the clock preference,
/// e.g. "13:00" or "1 PM".
#[must_use]
pub fn format_hour(hour: u8, format: ClockFormat) -> String {
    match format {
        ClockFormat::TwentyFourHour => format!("{hour:02}:00"),
        ClockFormat::TwelveHour => {
            let (h, suffix) = to_twelve_hour(hour);
            format!("{h} {suffix}")
        }
    }
}

/// Format a full time of day, e.g. "13:05:09" or "1:05:09 PM"
#[must_use]
pub fn format_time<Tz2: TimeZone>(time: &DateTime<Tz2>, format: ClockFormat) -> String
where
    Tz2::Offset: std::fmt::Display,
{
    match format {
        ClockFormat::TwentyFourHour => time.format("%H:%M:%S").to_string(),
        ClockFormat::TwelveHour => {
            let (h, suffix) = to_twelve_hour(time.hour() as u8);
            format!("{}:{:02}:{:02} {}", h, time.minute(), time.second(), suffix)
        }
    }
}

/// Timezones shown on the world clocks panel
pub const WORLD_CLOCK_ZONES: [(&str, Tz); 5] = [
    ("New York", chrono_tz::America::New_York),
    ("London", chrono_tz::Europe::London),
    ("Berlin", chrono_tz::Europe::Berlin),
    ("Tokyo", chrono_tz::Asia::Tokyo),
    ("Sydney", chrono_tz::Australia::Sydney),
];

/// Current wall-clock time in a named timezone
#[must_use]
pub fn world_clock(timezone: Tz, format: ClockFormat) -> String {
    world_clock_at(Utc::now(), timezone, format)
}

/// Wall-clock time of a given instant in a named timezone
#[must_use]
pub fn world_clock_at(now: DateTime<Utc>, timezone: Tz, format: ClockFormat) -> String {
    format_time(&now.with_timezone(&timezone), format)
}

fn to_twelve_hour(hour: u8) -> (u8, &'static str) {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    (h, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "00:00", "12 AM")]
    #[case(9, "09:00", "9 AM")]
    #[case(12, "12:00", "12 PM")]
    #[case(13, "13:00", "1 PM")]
    #[case(23, "23:00", "11 PM")]
    fn test_format_hour(#[case] hour: u8, #[case] h24: &str, #[case] h12: &str) {
        assert_eq!(format_hour(hour, ClockFormat::TwentyFourHour), h24);
        assert_eq!(format_hour(hour, ClockFormat::TwelveHour), h12);
    }

    #[test]
    fn test_format_time() {
        let time = Utc.with_ymd_and_hms(2024, 5, 2, 13, 5, 9).unwrap();
        assert_eq!(format_time(&time, ClockFormat::TwentyFourHour), "13:05:09");
        assert_eq!(format_time(&time, ClockFormat::TwelveHour), "1:05:09 PM");
    }

    #[test]
    fn test_format_time_in_timezone() {
        let utc = Utc.with_ymd_and_hms(2024, 5, 2, 13, 0, 0).unwrap();
        let berlin = utc.with_timezone(&chrono_tz::Europe::Berlin);
        // CEST is UTC+2 in May
        assert_eq!(format_time(&berlin, ClockFormat::TwentyFourHour), "15:00:00");
    }

    #[test]
    fn test_world_clock_at_instant() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        // JST is UTC+9 year-round
        assert_eq!(
            world_clock_at(utc, chrono_tz::Asia::Tokyo, ClockFormat::TwentyFourHour),
            "21:00:00"
        );
        assert_eq!(
            world_clock_at(utc, chrono_tz::Asia::Tokyo, ClockFormat::TwelveHour),
            "9:00:00 PM"
        );
    }

    #[test]
    fn test_world_clock_panel_zones_are_distinct() {
        for (label, timezone) in WORLD_CLOCK_ZONES {
            assert!(!label.is_empty());
            // every panel entry renders to a plausible 24h time
            let rendered = world_clock(timezone, ClockFormat::TwentyFourHour);
            assert_eq!(rendered.len(), 8);
            assert_eq!(rendered.as_bytes()[2], b':');
        }
        let names: Vec<&str> = WORLD_CLOCK_ZONES.iter().map(|(_, tz)| tz.name()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
    }
}
