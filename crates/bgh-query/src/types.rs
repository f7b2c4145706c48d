//! Core domain types.

use std::fmt;

use serde::Serialize;

/// One court decision as stored in the `decisions` table.
///
/// The store only reads rows; it never normalizes them. `date` is kept as the
/// stored `YYYY-MM-DD` text so ordering and prefix matching behave exactly as
/// they do in SQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Decision date, `YYYY-MM-DD` (column `datum`)
    pub date: String,
    /// Deciding chamber, free text such as "IV. Zivilsenat" (column `senat`)
    pub senate: String,
    /// Docket reference (column `aktenzeichen`)
    pub case_number: String,
    /// Short description (column `titel`)
    pub title: String,
    /// Link to the published decision (column `url`)
    pub url: String,
}

/// High-level grouping of chambers.
///
/// Matched against `senat` as a substring, so `Zivilsenat` covers
/// "I. Zivilsenat" through "XIII. Zivilsenat".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SenateCategory {
    /// Civil chambers
    Civil,
    /// Criminal chambers
    Criminal,
}

impl SenateCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 2] = [Self::Civil, Self::Criminal];

    /// The label matched against the `senat` column.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Civil => "Zivilsenat",
            Self::Criminal => "Strafsenat",
        }
    }

    /// Parse a category from user input (case-insensitive).
    ///
    /// Accepts the German label, its short form and the English name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "zivilsenat" | "zivil" | "civil" => Some(Self::Civil),
            "strafsenat" | "straf" | "criminal" => Some(Self::Criminal),
            _ => None,
        }
    }
}

impl fmt::Display for SenateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated calendar month.
///
/// Only constructed by [`crate::validate_month`], so `month` is always 1..=12
/// and `year` has four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub(crate) fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, starting at 1.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Overview of what the decisions table holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    /// Number of rows in `decisions`
    pub decision_count: usize,
    /// Earliest stored date, `None` when the table is empty
    pub earliest: Option<String>,
    /// Latest stored date, `None` when the table is empty
    pub latest: Option<String>,
}
