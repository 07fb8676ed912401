//! Timestamp helpers. Visit times are stored as German-formatted wall-clock
//! time in Europe/Berlin, whatever zone the host runs in.

use chrono::{DateTime, TimeZone, Utc};

/// Zone every visit timestamp is rendered in.
pub const VISIT_TZ: chrono_tz::Tz = chrono_tz::Europe::Berlin;

/// `DD.MM.YYYY, HH:MM:SS`. Day and month are zero-padded so stored values
/// keep a fixed width.
pub const VISIT_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

pub fn format_localized<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(VISIT_FORMAT).to_string()
}

/// `utc` as Berlin wall-clock time in the visit format.
pub fn localize(utc: DateTime<Utc>) -> String {
    format_localized(&utc.with_timezone(&VISIT_TZ))
}

/// Current Berlin time in the visit format.
pub fn now_localized() -> String {
    localize(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn formats_like_de_locale() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let dt = tz.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(format_localized(&dt), "01.01.2024, 10:00:00");
    }

    #[test]
    fn localize_uses_berlin_winter_and_summer_offsets() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(localize(winter), "01.01.2024, 10:00:00");

        let summer = Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap();
        assert_eq!(localize(summer), "01.07.2024, 10:00:00");
    }

    #[test]
    fn now_is_berlin_time_not_host_time() {
        let before = Utc::now();
        let stamp = now_localized();
        let after = Utc::now();

        let expected = [localize(before), localize(after)];
        assert!(expected.contains(&stamp), "{stamp} not in {expected:?}");
    }
}
