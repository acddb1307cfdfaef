//! Operations module
//!
//! Single conversions through the dispatcher, two-quantity comparisons, and
//! the fixed-precision rounding both share.

pub mod compare;
pub mod convert;
pub mod rounding;

pub use compare::*;
pub use convert::*;
pub use rounding::*;
