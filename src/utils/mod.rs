//! Utility functions

pub mod number;

pub use number::{coerce_number, format_number, format_result};
