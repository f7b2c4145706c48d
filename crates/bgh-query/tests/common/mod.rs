//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rusqlite::{Connection, params};
use tempfile::TempDir;

/// A decision row as inserted into the fixture: (datum, senat, aktenzeichen).
pub type Row<'a> = (&'a str, &'a str, &'a str);

/// Decisions spread over chambers and months, deliberately inserted out of order.
pub const SAMPLE_ROWS: &[Row<'static>] = &[
    ("2024-04-30", "II. Zivilsenat", "II ZR 30/24"),
    ("2024-05-10", "I. Zivilsenat", "I ZR 10/24"),
    ("2023-12-01", "IV. Zivilsenat", "IV ZR 1/23"),
    ("2024-05-03", "6. Strafsenat", "6 StR 3/24"),
    ("2024-05-10", "1. Strafsenat", "1 StR 10/24"),
    ("2019-01-15", "Kartellsenat", "KZR 15/19"),
    ("2024-06-01", "Senat für Anwaltssachen", "AnwZ 1/24"),
];

/// Create a decisions database in a fresh temporary directory.
pub fn database_with_rows(rows: &[Row<'_>]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("bgh_decisions.db");
    write_rows(&path, rows);
    (dir, path)
}

/// Create the `decisions` table at `path` and insert `rows`.
pub fn write_rows(path: &Path, rows: &[Row<'_>]) {
    let conn = Connection::open(path).expect("should create database");
    conn.execute_batch(bgh_query::SCHEMA)
        .expect("should apply schema");
    for (datum, senat, aktenzeichen) in rows {
        conn.execute(
            "INSERT INTO decisions (datum, senat, aktenzeichen, titel, url) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                datum,
                senat,
                aktenzeichen,
                format!("Entscheidung {aktenzeichen}"),
                format!("https://juris.bundesgerichtshof.de/{aktenzeichen}")
            ],
        )
        .expect("should insert row");
    }
}

/// Count rows in the fixture through an independent connection.
pub fn row_count(path: &Path) -> usize {
    let conn = Connection::open(path).expect("should open database");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM decisions", [], |row| row.get(0))
        .expect("should count rows");
    usize::try_from(count).expect("count fits in usize")
}

/// Run the bgh-query binary in `dir` with the given arguments and colors off.
pub fn run_bgh_query_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bgh-query"))
        .arg("--no-color")
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("should execute bgh-query binary")
}
