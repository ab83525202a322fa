#![doc(test(attr(deny(warnings))))]

//! PesoGrow Core projects savings earnings across Philippine digital banks:
//! quarterly-compounded interest, final withholding tax, and a ranked
//! comparison for display.

pub mod banks;
pub mod calculator;
pub mod config;
pub mod currency;
pub mod errors;
pub mod provider;
pub mod report;
pub mod services;
pub mod utils;

pub use errors::{PesoGrowError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("PesoGrow Core tracing initialized.");
    });
}
