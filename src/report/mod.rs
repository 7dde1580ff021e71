//! Report module - summarizing and exporting batch results

pub mod batch_export;
pub mod summary;

pub use batch_export::*;
pub use summary::*;
