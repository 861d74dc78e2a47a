//! Report module - console tables, charts, and exports

pub mod chart;
pub mod export;
pub mod financial;
pub mod summary;

pub use chart::*;
pub use export::*;
pub use financial::*;
pub use summary::*;
