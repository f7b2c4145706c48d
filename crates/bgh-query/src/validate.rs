//! Input validation for date and month filters.
//!
//! Validation is strict: the text must have exactly the expected shape
//! (`YYYY-MM-DD` or `YYYY-MM`, ASCII digits, `-` separators, nothing else)
//! and must name a real calendar date or month. Shape-alike input such as
//! `2024-5-1`, `2024/05/01` or `2024-02-30` is rejected.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;
use crate::types::YearMonth;

const DATE_SHAPE: &str = "DDDD-DD-DD";
const MONTH_SHAPE: &str = "DDDD-DD";

/// Validate an exact date filter.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] if `input` is not a real date in
/// `YYYY-MM-DD` form.
pub fn validate_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(input.to_string());

    if !matches_shape(input, DATE_SHAPE) {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())?;
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(date)
}

/// Validate a month filter.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMonth`] if `input` is not a real month
/// in `YYYY-MM` form.
pub fn validate_month(input: &str) -> Result<YearMonth, ValidationError> {
    let invalid = || ValidationError::InvalidMonth(input.to_string());

    if !matches_shape(input, MONTH_SHAPE) {
        return Err(invalid());
    }

    let year: i32 = input[..4].parse().map_err(|_| invalid())?;
    let month: u32 = input[5..].parse().map_err(|_| invalid())?;

    // Day 1 exists in every valid month, so this checks year and month only
    if year < 1 || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(invalid());
    }
    Ok(YearMonth::new(year, month))
}

/// Check `input` against a shape where `D` stands for one ASCII digit and
/// every other byte must match literally.
fn matches_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input
            .bytes()
            .zip(shape.bytes())
            .all(|(c, expected)| match expected {
                b'D' => c.is_ascii_digit(),
                literal => c == literal,
            })
}
