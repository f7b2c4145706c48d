//! Lookups against the `decisions` table.

use rusqlite::params_from_iter;
use tracing::{debug, trace};

use super::{Database, row_to_decision};
use crate::error::Result;
use crate::query::DecisionQuery;
use crate::types::{Decision, StoreSummary};

impl Database {
    /// Execute a filtered lookup, newest decisions first.
    pub fn find_decisions(&self, query: &DecisionQuery) -> Result<Vec<Decision>> {
        let built = query.build();
        debug!(sql = %built.sql, params = built.params.len(), "Running decision query");

        let mut stmt = self.connection().prepare(&built.sql)?;
        let decisions = stmt
            .query_map(params_from_iter(built.params.iter()), row_to_decision)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        trace!(rows = decisions.len(), "Decision query finished");
        Ok(decisions)
    }

    /// Count rows and find the covered date range.
    pub fn summary(&self) -> Result<StoreSummary> {
        let (count, earliest, latest): (i64, Option<String>, Option<String>) =
            self.connection().query_row(
                "SELECT COUNT(*), MIN(datum), MAX(datum) FROM decisions",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )?;

        Ok(StoreSummary {
            decision_count: usize::try_from(count).unwrap_or_default(),
            earliest,
            latest,
        })
    }
}
