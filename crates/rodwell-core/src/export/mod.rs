//! Result presentation for display and export.

mod report;

pub use report::*;
