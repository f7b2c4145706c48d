//! Lookup subcommands (`all`, `category`, `senate`, `date`, `month`).

use std::path::Path;

use bgh_query::config::OutputFormat;
use bgh_query::{DecisionStore, FilterRequest};

use super::display;

/// Run one lookup and print the results.
///
/// Input is validated before the database is opened, so a typo in a date
/// is reported even when the database is unavailable.
pub fn run(
    database: &Path,
    request: FilterRequest,
    format: OutputFormat,
) -> Result<(), bgh_query::Error> {
    let description = request.describe();
    let query = request.into_query()?;

    let store = DecisionStore::open(database)?;
    let decisions = match &query {
        Some(query) => store.query(query)?,
        None => Vec::new(),
    };
    tracing::info!(filter = %description, results = decisions.len(), "Lookup finished");
    store.close()?;

    match format {
        OutputFormat::Text => {
            let width = display::terminal_width();
            print!("{}", display::render_decisions(&decisions, width));
        }
        OutputFormat::Json => println!("{}", display::decisions_json(&decisions)?),
    }

    Ok(())
}
