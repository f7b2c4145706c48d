//! Row conversion from the `decisions` table.

use rusqlite::Row;

use crate::types::Decision;

/// Convert a `SELECT *` row into a [`Decision`].
///
/// Columns are looked up by name so the physical column order of the table
/// does not matter. NULLs in the free-text columns are read as empty strings.
pub(crate) fn row_to_decision(row: &Row<'_>) -> rusqlite::Result<Decision> {
    Ok(Decision {
        date: text_column(row, "datum")?,
        senate: text_column(row, "senat")?,
        case_number: text_column(row, "aktenzeichen")?,
        title: text_column(row, "titel")?,
        url: text_column(row, "url")?,
    })
}

fn text_column(row: &Row<'_>, name: &str) -> rusqlite::Result<String> {
    let value: Option<String> = row.get(name)?;
    Ok(value.unwrap_or_default())
}
