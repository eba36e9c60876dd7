//! Materialize typed batches from MongoDB-style document cursors.
//!
//! Documents are dynamically typed. Each column in the output is statically
//! typed according to a sample schema, and values are converted (or
//! defaulted) as they're read. See `reader::MongoBatchReader`.
pub mod convert;
pub mod cursor;
pub mod description;
pub mod document;
pub mod errors;
pub mod memory;
pub mod options;
pub mod reader;

pub use reader::MongoBatchReader;
