//! Error handling module
//!
//! Defines the conversion error kinds and their exit codes

pub mod types;

pub use types::*;
