//! Parameterized query construction for the `decisions` table.
//!
//! A [`DecisionQuery`] holds at most one senate filter and one date filter.
//! [`DecisionQuery::build`] turns it into SQL text plus an ordered list of
//! bound values. Filter values only ever travel as bound parameters; the SQL
//! text is assembled from fixed fragments.

/// Length of a `YYYY-MM` month filter.
const MONTH_FILTER_LEN: usize = 7;

/// Filters for a single lookup. Both are optional and combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionQuery {
    senate_filter: Option<String>,
    date_filter: Option<String>,
}

/// SQL text and the values to bind to its `?N` placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    /// Statement text with numbered placeholders
    pub sql: String,
    /// Values bound to `?1`, `?2`, ...
    pub params: Vec<String>,
}

impl DecisionQuery {
    /// A query with no filters, matching every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to rows whose `senat` contains `senate`.
    #[must_use]
    pub fn with_senate(mut self, senate: impl Into<String>) -> Self {
        self.senate_filter = Some(senate.into());
        self
    }

    /// Restrict by date.
    ///
    /// A 7-character value is a `YYYY-MM` month and matches every date in
    /// that month; anything else must equal the stored date exactly. The
    /// value should already be validated.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date_filter = Some(date.into());
        self
    }

    /// The senate substring, if set and non-empty.
    #[must_use]
    pub fn senate_filter(&self) -> Option<&str> {
        self.senate_filter.as_deref().filter(|s| !s.is_empty())
    }

    /// The date or month value, if set and non-empty.
    #[must_use]
    pub fn date_filter(&self) -> Option<&str> {
        self.date_filter.as_deref().filter(|s| !s.is_empty())
    }

    /// Compose the `SELECT` statement and its parameters.
    #[must_use]
    pub fn build(&self) -> BuiltQuery {
        let mut sql = String::from("SELECT * FROM decisions WHERE 1=1");
        let mut params = Vec::new();

        if let Some(senate) = self.senate_filter() {
            params.push(format!("%{senate}%"));
            sql.push_str(&format!(" AND senat LIKE ?{}", params.len()));
        }

        if let Some(date) = self.date_filter() {
            params.push(date.to_string());
            if date.chars().count() == MONTH_FILTER_LEN {
                sql.push_str(&format!(" AND substr(datum, 1, 7) = ?{}", params.len()));
            } else {
                sql.push_str(&format!(" AND datum = ?{}", params.len()));
            }
        }

        sql.push_str(" ORDER BY datum DESC");

        BuiltQuery { sql, params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn no_filters_selects_everything_newest_first() {
        let built = DecisionQuery::new().build();

        assert_eq!(
            built.sql,
            "SELECT * FROM decisions WHERE 1=1 ORDER BY datum DESC"
        );
        assert!(built.params.is_empty());
    }

    #[test]
    fn senate_filter_is_wrapped_in_wildcards() {
        let built = DecisionQuery::new().with_senate("Zivilsenat").build();

        assert_eq!(
            built.sql,
            "SELECT * FROM decisions WHERE 1=1 AND senat LIKE ?1 ORDER BY datum DESC"
        );
        assert_eq!(built.params, vec!["%Zivilsenat%"]);
    }

    #[rstest]
    #[case::month("2024-05", "substr(datum, 1, 7) = ?1")]
    #[case::exact_date("2024-05-10", "datum = ?1")]
    #[case::odd_length_is_exact("2024", "datum = ?1")]
    fn date_filter_dispatches_on_length(#[case] date: &str, #[case] clause: &str) {
        let built = DecisionQuery::new().with_date(date).build();

        assert!(
            built.sql.contains(clause),
            "expected `{clause}` in `{}`",
            built.sql
        );
        assert_eq!(built.params, vec![date]);
    }

    #[test]
    fn both_filters_are_anded_in_order() {
        let built = DecisionQuery::new()
            .with_senate("Strafsenat")
            .with_date("2024-05")
            .build();

        assert_eq!(
            built.sql,
            "SELECT * FROM decisions WHERE 1=1 AND senat LIKE ?1 \
             AND substr(datum, 1, 7) = ?2 ORDER BY datum DESC"
        );
        assert_eq!(built.params, vec!["%Strafsenat%", "2024-05"]);
    }

    #[test]
    fn empty_filters_are_treated_as_absent() {
        let query = DecisionQuery::new().with_senate("").with_date("");

        assert_eq!(query.senate_filter(), None);
        assert_eq!(query.date_filter(), None);
        assert_eq!(query.build(), DecisionQuery::new().build());
    }

    #[test]
    fn hostile_input_never_reaches_sql_text() {
        let hostile = "'); DROP TABLE decisions; --";
        let built = DecisionQuery::new()
            .with_senate(hostile)
            .with_date(hostile)
            .build();

        assert!(!built.sql.contains("DROP"));
        assert!(!built.sql.contains('\''));
        assert_eq!(built.params[0], format!("%{hostile}%"));
        assert_eq!(built.params[1], hostile);
    }

    #[test]
    fn month_dispatch_counts_characters_not_bytes() {
        // 7 characters, 9 bytes
        let built = DecisionQuery::new().with_date("2024-ä5").build();
        assert!(built.sql.contains("substr(datum, 1, 7)"));
    }
}
