//! tally-domain
//!
//! Pure domain models for income tracking (IncomeTally plus money helpers).
//! No I/O, no logging, no storage. Only data types and arithmetic.

pub mod income;
pub mod money;

pub use income::*;
pub use money::*;
