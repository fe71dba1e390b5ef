//! Terminal output.
//!
//! - [`display`]: usage text and error diagnostics

pub mod display;

pub use display::{show_error, show_usage};
