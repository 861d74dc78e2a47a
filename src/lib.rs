//! Metrica: workforce data cleaning and financial metrics
//!
//! Two independent pipelines share this crate. The workforce pipeline merges
//! employee, training, and performance tables, fills and normalizes them, and
//! reports department means and correlations. The finance pipeline derives
//! profitability metrics from one set of business figures and keeps an
//! append-only CSV ledger of every run.

pub mod cli;
pub mod error;
pub mod finance;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use error::AnalysisError;
