//! Weekday anchor resolution for recurring events.
//!
//! A recurring event is entered with a weekday token ("friday", "fri") and a
//! time range. The token resolves to the next calendar date falling on that
//! weekday and the task stores that single concrete occurrence; series
//! expansion is out of scope.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::ParseError;

/// Resolve a weekday anchor to the next matching calendar date.
///
/// `from` itself counts when its weekday already matches, so an anchor of
/// "wednesday" entered on a Wednesday resolves to the same day.
pub fn next_weekday_occurrence(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = from.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    let ahead = (target - current).rem_euclid(7);
    from + Duration::days(ahead)
}

/// Parse a weekday token as entered on the command line.
///
/// Accepts the case-insensitive names and three-letter abbreviations that
/// chrono understands ("monday", "Mon", "SUN").
pub fn parse_weekday(token: &str) -> Result<Weekday, ParseError> {
    token
        .parse::<Weekday>()
        .map_err(|_| ParseError::InvalidWeekday(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_weekday_resolves_to_today() {
        // 2024-05-01 is a Wednesday.
        let wed = date(2024, 5, 1);
        assert_eq!(next_weekday_occurrence(wed, Weekday::Wed), wed);
    }

    #[test]
    fn test_later_weekday_same_week() {
        let wed = date(2024, 5, 1);
        assert_eq!(next_weekday_occurrence(wed, Weekday::Sat), date(2024, 5, 4));
    }

    #[test]
    fn test_earlier_weekday_wraps_to_next_week() {
        let wed = date(2024, 5, 1);
        assert_eq!(next_weekday_occurrence(wed, Weekday::Mon), date(2024, 5, 6));
    }

    #[test]
    fn test_parse_weekday_tokens() {
        assert_eq!(parse_weekday("friday").unwrap(), Weekday::Fri);
        assert_eq!(parse_weekday("FRI").unwrap(), Weekday::Fri);
        assert!(parse_weekday("someday").is_err());
    }
}
