//! Layout of the decisions table.

/// DDL for the `decisions` table.
///
/// The lookup tool never creates or alters tables. This statement documents
/// the layout it reads and is what ingestion tools and test fixtures use.
pub const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS decisions (
    datum TEXT NOT NULL,        -- YYYY-MM-DD
    senat TEXT NOT NULL,        -- e.g. IV. Zivilsenat
    aktenzeichen TEXT NOT NULL, -- case number
    titel TEXT NOT NULL,
    url TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_decisions_datum ON decisions(datum);
";

/// Name of the only table the lookup reads.
pub(crate) const DECISIONS_TABLE: &str = "decisions";
