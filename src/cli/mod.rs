//! Command-line interface for lensocr.

mod commands;

pub use commands::{is_verbose, run};
