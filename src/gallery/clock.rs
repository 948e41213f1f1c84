// SPDX-License-Identifier: MPL-2.0
//! Wall clock label refreshed by the application every second.

use chrono::{DateTime, Local, TimeZone, Timelike};

/// Formats `time` as `HH:MM:SS`.
#[must_use]
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

/// Current local time as `HH:MM:SS`.
#[must_use]
pub fn now_label() -> String {
    format_time(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn pads_each_field() {
        let time = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(format_time(&time), "07:05:03");
    }

    #[test]
    fn uses_24_hour_clock() {
        let time = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        assert_eq!(format_time(&time), "23:59:59");
    }

    #[test]
    fn now_label_has_clock_shape() {
        let label = now_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.as_bytes()[2], b':');
        assert_eq!(label.as_bytes()[5], b':');
    }
}
