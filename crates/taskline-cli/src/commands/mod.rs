//! CLI command implementations.

pub mod config;
pub mod export;
pub mod schedule;
pub mod task;
pub mod view;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use taskline_core::error::ParseError;

/// Input layout for date-times: `dd/MM/yyyy HHmm`.
pub const INPUT_DATETIME_FORMAT: &str = "%d/%m/%Y %H%M";
/// Input layout for dates: `dd/MM/yyyy`.
pub const INPUT_DATE_FORMAT: &str = "%d/%m/%Y";
/// Input layout for times: `HHmm`.
pub const INPUT_TIME_FORMAT: &str = "%H%M";

/// Parse a date-time argument like `02/05/2024 1430`.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(input, INPUT_DATETIME_FORMAT).map_err(|_| {
        ParseError::InvalidDateTime {
            input: input.to_string(),
            expected: "dd/MM/yyyy HHmm".to_string(),
        }
    })
}

/// Parse a date argument like `02/05/2024`.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT).map_err(|_| ParseError::InvalidDateTime {
        input: input.to_string(),
        expected: "dd/MM/yyyy".to_string(),
    })
}

/// Parse a time argument like `1430`.
pub fn parse_time(input: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(input, INPUT_TIME_FORMAT).map_err(|_| ParseError::InvalidDateTime {
        input: input.to_string(),
        expected: "HHmm".to_string(),
    })
}
