//! Financial pipeline - input record, metric engine, ledger

pub mod input;
pub mod ledger;
pub mod metrics;

pub use input::*;
pub use ledger::*;
pub use metrics::*;
