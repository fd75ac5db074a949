//! Date disambiguation and timestamp construction.
//!
//! Export date tokens come as `p0/p1/p2` with no declared ordering. The
//! third part is always the year; between the first two, whichever exceeds
//! 12 must be the day, and the ambiguous case (both ≤ 12) defaults to
//! day-first. That default is a best-effort guess, not a guarantee — an
//! accepted limitation, since changing it would rewrite historical
//! statistics for saved analyses.

use chrono::{NaiveDate, NaiveDateTime};

/// Resolves a `p0/p1/p2` date token into a calendar date.
///
/// Two-digit years map to `2000 + year`. Returns `None` when the token is
/// not three numeric parts or the resolved fields are not a real calendar
/// date (e.g. `31/2/24`).
pub(crate) fn resolve_date(date_text: &str) -> Option<NaiveDate> {
    let mut parts = date_text.split('/');
    let p0: u32 = parts.next()?.parse().ok()?;
    let p1: u32 = parts.next()?.parse().ok()?;
    let p2: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let (day, month) = if p0 > 12 {
        (p0, p1)
    } else if p1 > 12 {
        (p1, p0)
    } else {
        // ambiguous, assume day-first
        (p0, p1)
    };

    let year = if p2 < 100 { 2000 + p2 } else { p2 };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Builds the timestamp for a message from its raw date and time tokens.
///
/// Hour and minute are taken literally from the time text; seconds and
/// AM/PM markers are ignored. Returns `None` when the fields do not form a
/// valid date-time, in which case the caller treats the line as a
/// continuation.
pub(crate) fn build_timestamp(date_text: &str, time_text: &str) -> Option<NaiveDateTime> {
    let date = resolve_date(date_text)?;
    let (hour, minute) = clock_fields(time_text)?;
    date.and_hms_opt(hour, minute, 0)
}

/// Extracts the hour and minute from a time token such as `10:30`,
/// `10:30:45` or `9:05 PM`.
fn clock_fields(time_text: &str) -> Option<(u32, u32)> {
    let (hour_text, rest) = time_text.split_once(':')?;
    let hour: u32 = hour_text.parse().ok()?;
    let minute: u32 = rest.get(..2)?.parse().ok()?;
    Some((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_when_first_part_exceeds_twelve() {
        let date = resolve_date("13/2/24").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 13).unwrap());
    }

    #[test]
    fn test_month_first_when_second_part_exceeds_twelve() {
        let date = resolve_date("2/13/24").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 13).unwrap());
    }

    #[test]
    fn test_ambiguous_defaults_to_day_first() {
        let date = resolve_date("3/4/24").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
    }

    #[test]
    fn test_two_digit_year_maps_to_2000s() {
        assert_eq!(
            resolve_date("1/1/05").unwrap(),
            NaiveDate::from_ymd_opt(2005, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_four_digit_year_kept() {
        assert_eq!(
            resolve_date("1/1/1999").unwrap(),
            NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_impossible_date_rejected() {
        assert!(resolve_date("31/2/24").is_none());
        assert!(resolve_date("0/1/24").is_none());
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert!(resolve_date("1/2").is_none());
        assert!(resolve_date("1/2/3/4").is_none());
        assert!(resolve_date("a/b/c").is_none());
    }

    #[test]
    fn test_timestamp_ignores_seconds_and_meridiem() {
        let ts = build_timestamp("12/1/24", "10:30:45 PM").unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2024, 1, 12)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_timestamp_invalid_hour_rejected() {
        assert!(build_timestamp("12/1/24", "25:00").is_none());
        assert!(build_timestamp("12/1/24", "10:75").is_none());
    }
}
