//! # bgh-query: Filtered Lookup over BGH Decisions
//!
//! Looks up court decisions in a `SQLite` table by chamber, exact date or
//! month and returns them newest first. The database is produced elsewhere;
//! this crate opens it read-only.
//!
//! ## Design
//!
//! - **One mode per lookup** - [`FilterRequest`] names the mode and carries raw input
//! - **Validate before querying** - malformed dates and months never reach `SQLite`
//! - **Bound parameters only** - filter values are never spliced into SQL text
//! - **Explicit connection lifetime** - [`DecisionStore`] owns the connection
//!
//! ## Quick Start
//!
//! ```no_run
//! use bgh_query::{DecisionStore, FilterRequest, SenateCategory};
//! use std::path::Path;
//!
//! let store = DecisionStore::open(Path::new("bgh_decisions.db"))?;
//!
//! let civil = store.search(FilterRequest::Category(SenateCategory::Civil))?;
//! println!("{} civil decisions", civil.len());
//!
//! let may = store.search(FilterRequest::Month("2024-05".to_string()))?;
//! for decision in &may {
//!     println!("{} {} {}", decision.date, decision.senate, decision.case_number);
//! }
//!
//! store.close()?;
//! # Ok::<(), bgh_query::Error>(())
//! ```

pub mod config;
mod db;
mod error;
mod query;
mod request;
mod types;
mod validate;

pub use db::SCHEMA;
pub use error::{Error, Result, ValidationError};
pub use query::{BuiltQuery, DecisionQuery};
pub use request::FilterRequest;
pub use types::{Decision, SenateCategory, StoreSummary, YearMonth};
pub use validate::{validate_date, validate_month};

use std::path::Path;

use db::Database;
use tracing::{debug, info};

/// Read-only lookup interface over a decisions database.
///
/// Holds one connection for its whole lifetime. Lookups are synchronous and
/// run one at a time; the store is `Send` but not `Sync`, so a multi-threaded
/// caller should open one store per thread.
pub struct DecisionStore {
    db: Database,
}

#[allow(clippy::missing_errors_doc)]
impl DecisionStore {
    /// Open the decisions database at `path`.
    ///
    /// Fails with [`Error::Database`] if the file is missing or unreadable and
    /// with [`Error::MissingTable`] if it has no `decisions` table.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Database::open(path)?;
        info!(path = %path.display(), "Opened decisions database");
        Ok(Self { db })
    }

    /// Path of the open database.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.db.path()
    }

    /// Run a lookup from already-validated filter values.
    ///
    /// Returns matching decisions ordered by date, newest first. No match is
    /// an empty vector, not an error.
    pub fn query(&self, query: &DecisionQuery) -> Result<Vec<Decision>> {
        self.db.find_decisions(query)
    }

    /// Validate a user request and run it.
    ///
    /// A malformed date or month fails with [`Error::Validation`] before any
    /// SQL runs. An empty senate label returns no decisions.
    pub fn search(&self, request: FilterRequest) -> Result<Vec<Decision>> {
        debug!(filter = %request.describe(), "Searching decisions");

        match request.into_query()? {
            Some(query) => self.query(&query),
            None => {
                debug!("Empty senate label, skipping query");
                Ok(Vec::new())
            }
        }
    }

    /// Row count and covered date range.
    pub fn summary(&self) -> Result<StoreSummary> {
        self.db.summary()
    }

    /// Release the connection.
    ///
    /// Dropping the store also releases it; `close` additionally reports
    /// errors raised while finalizing.
    pub fn close(self) -> Result<()> {
        let path = self.db.path().to_path_buf();
        self.db.close()?;
        info!(path = %path.display(), "Closed decisions database");
        Ok(())
    }
}
