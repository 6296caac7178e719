//! tally-core
//!
//! Business logic and services for income tallies.
//! Depends on tally-domain. No CLI, no terminal I/O, no direct storage
//! interactions beyond what tally-config provides.

pub mod error;
pub mod income_service;
pub mod utils;

pub use error::{CoreError, CoreResult};
pub use income_service::IncomeService;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally tracing initialized.");
    });
}

#[cfg(test)]
mod tests;
