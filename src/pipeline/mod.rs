//! Workforce pipeline - load, merge, clean, aggregate, save

pub mod aggregate;
pub mod clean;
pub mod correlation;
pub mod loader;
pub mod merge;
pub mod missing;
pub mod sample;
pub mod schema;
pub mod writer;

pub use aggregate::*;
pub use clean::*;
pub use correlation::*;
pub use loader::*;
pub use merge::*;
pub use missing::*;
pub use sample::*;
pub use schema::*;
pub use writer::*;
