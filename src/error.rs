//! Error types for the workforce pipeline and the financial ledger
//!
//! Fatal load-time conditions are typed so the CLI can tell a missing
//! input apart from a malformed one. Everything else travels as
//! `anyhow::Error` with context attached at the call site.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, validating, or persisting tables.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A required input table does not exist on disk.
    #[error("Required input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A required column (usually the join key) is absent from a table.
    #[error("Column '{column}' not found in {table} table ({}). Available columns: {available:?}", path.display())]
    SchemaMismatch {
        table: &'static str,
        column: &'static str,
        path: PathBuf,
        available: Vec<String>,
    },

    /// The join key on some row is empty or not an integer.
    #[error("Invalid employee identifier {value:?} in {table} table at row {row}")]
    InvalidKey {
        table: &'static str,
        row: usize,
        value: String,
    },

    /// An existing ledger file carries a header that differs from the ledger layout.
    #[error("Ledger {} has an unexpected header: expected {expected:?}, found {found:?}", path.display())]
    LedgerSchemaMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },
}
