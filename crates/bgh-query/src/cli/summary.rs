//! `bgh-query summary` command implementation.

use std::path::Path;

use bgh_query::DecisionStore;
use bgh_query::config::OutputFormat;

use super::display;

/// Run the summary command.
pub fn run(database: &Path, format: OutputFormat) -> Result<(), bgh_query::Error> {
    let store = DecisionStore::open(database)?;
    let summary = store.summary()?;
    store.close()?;

    let database = database.display().to_string();
    match format {
        OutputFormat::Text => print!("{}", display::render_summary(&database, &summary)),
        OutputFormat::Json => println!("{}", display::summary_json(&database, &summary)?),
    }

    if summary.decision_count == 0 {
        tracing::warn!(database = %database, "Decisions table is empty");
    }

    Ok(())
}
