//! Filter requests, one variant per lookup mode.
//!
//! A lookup runs in exactly one mode at a time. Each variant carries the raw
//! user input for that mode; [`FilterRequest::into_query`] validates it and
//! produces the [`DecisionQuery`] to execute.

use crate::error::ValidationError;
use crate::query::DecisionQuery;
use crate::types::SenateCategory;
use crate::validate::{validate_date, validate_month};

/// A single lookup as chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRequest {
    /// No filter; every decision
    All,
    /// Civil or criminal chambers
    Category(SenateCategory),
    /// Chambers whose label contains this text, e.g. "IV. Zivilsenat"
    Senate(String),
    /// Decisions from one day, `YYYY-MM-DD`
    Date(String),
    /// Decisions from one month, `YYYY-MM`
    Month(String),
}

impl FilterRequest {
    /// Validate the input and build the query for this mode.
    ///
    /// Returns `Ok(None)` for a `Senate` request with empty text: there is
    /// nothing to look up and the caller should report zero results.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a date or month is malformed.
    pub fn into_query(self) -> Result<Option<DecisionQuery>, ValidationError> {
        let query = match self {
            Self::All => DecisionQuery::new(),
            Self::Category(category) => DecisionQuery::new().with_senate(category.as_str()),
            Self::Senate(label) => {
                if label.is_empty() {
                    return Ok(None);
                }
                DecisionQuery::new().with_senate(label)
            }
            Self::Date(date) => {
                let date = validate_date(&date)?;
                DecisionQuery::new().with_date(date.format("%Y-%m-%d").to_string())
            }
            Self::Month(month) => {
                let month = validate_month(&month)?;
                DecisionQuery::new().with_date(month.to_string())
            }
        };
        Ok(Some(query))
    }

    /// Short human-readable description of the filter.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::All => "all decisions".to_string(),
            Self::Category(category) => format!("category {category}"),
            Self::Senate(label) => format!("senate \"{label}\""),
            Self::Date(date) => format!("date {date}"),
            Self::Month(month) => format!("month {month}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(request: FilterRequest) -> Option<DecisionQuery> {
        request.into_query().expect("request should validate")
    }

    #[test]
    fn all_has_no_filters() {
        assert_eq!(build(FilterRequest::All), Some(DecisionQuery::new()));
    }

    #[test]
    fn category_filters_on_label() {
        let query = build(FilterRequest::Category(SenateCategory::Criminal)).expect("query");
        assert_eq!(query.senate_filter(), Some("Strafsenat"));
        assert_eq!(query.date_filter(), None);
    }

    #[test]
    fn senate_keeps_text_verbatim() {
        let query = build(FilterRequest::Senate("IV. Zivilsenat".to_string())).expect("query");
        assert_eq!(query.senate_filter(), Some("IV. Zivilsenat"));
    }

    #[test]
    fn empty_senate_yields_no_query() {
        assert_eq!(build(FilterRequest::Senate(String::new())), None);
    }

    #[test]
    fn whitespace_senate_is_still_a_substring() {
        let query = build(FilterRequest::Senate(" ".to_string())).expect("query");
        assert_eq!(query.senate_filter(), Some(" "));
    }

    #[test]
    fn date_and_month_become_date_filters() {
        let query = build(FilterRequest::Date("2024-05-10".to_string())).expect("query");
        assert_eq!(query.date_filter(), Some("2024-05-10"));

        let query = build(FilterRequest::Month("2024-05".to_string())).expect("query");
        assert_eq!(query.date_filter(), Some("2024-05"));
    }

    #[test]
    fn invalid_date_is_rejected() {
        let err = FilterRequest::Date("2024-13-01".to_string())
            .into_query()
            .expect_err("month 13 is invalid");
        assert_eq!(err, ValidationError::InvalidDate("2024-13-01".to_string()));
    }

    #[test]
    fn invalid_month_is_rejected() {
        let err = FilterRequest::Month("2024-13".to_string())
            .into_query()
            .expect_err("month 13 is invalid");
        assert_eq!(err, ValidationError::InvalidMonth("2024-13".to_string()));
    }

    #[test]
    fn full_date_in_month_mode_is_rejected() {
        assert!(FilterRequest::Month("2024-05-10".to_string())
            .into_query()
            .is_err());
    }

    #[test]
    fn describe_names_the_mode() {
        assert_eq!(FilterRequest::All.describe(), "all decisions");
        assert_eq!(
            FilterRequest::Category(SenateCategory::Civil).describe(),
            "category Zivilsenat"
        );
        assert_eq!(
            FilterRequest::Month("2024-05".to_string()).describe(),
            "month 2024-05"
        );
    }
}
