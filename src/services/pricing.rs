//! Rental pricing
//!
//! Duration is billed in whole days: any started day counts.

use chrono::{DateTime, Utc};

const MS_PER_DAY: i64 = 86_400_000;

/// Number of billable days between two instants, or `None` unless `end > start`.
pub fn rental_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<i64> {
    let ms = (end - start).num_milliseconds();
    if ms <= 0 {
        return None;
    }
    Some((ms + MS_PER_DAY - 1) / MS_PER_DAY)
}

/// Duration and total for one cart line, or `None` when either date is
/// absent or the range is not positive.
pub fn quote(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    daily_rate: f64,
) -> Option<(i64, f64)> {
    let duration = rental_duration(start?, end?)?;
    Some((duration, duration as f64 * daily_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rental::parse_date;

    fn date(s: &str) -> DateTime<Utc> {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_three_full_days() {
        let (duration, total) =
            quote(Some(date("2024-01-01")), Some(date("2024-01-04")), 50.0).unwrap();
        assert_eq!(duration, 3);
        assert_eq!(total, 150.0);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let duration =
            rental_duration(date("2024-01-01T00:00:00Z"), date("2024-01-04T06:00:00Z")).unwrap();
        assert_eq!(duration, 4);
    }

    #[test]
    fn test_single_millisecond_is_one_day() {
        let start = date("2024-01-01T00:00:00Z");
        let end = start + chrono::Duration::milliseconds(1);
        assert_eq!(rental_duration(start, end), Some(1));
    }

    #[test]
    fn test_end_not_after_start_yields_nothing() {
        let day = date("2024-01-01");
        assert_eq!(rental_duration(day, day), None);
        assert_eq!(rental_duration(date("2024-01-04"), date("2024-01-01")), None);
        assert_eq!(quote(Some(date("2024-01-04")), Some(date("2024-01-01")), 25.0), None);
    }

    #[test]
    fn test_missing_date_yields_nothing() {
        assert_eq!(quote(None, Some(date("2024-01-04")), 25.0), None);
        assert_eq!(quote(Some(date("2024-01-01")), None, 25.0), None);
    }
}
