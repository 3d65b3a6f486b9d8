#![doc(test(attr(deny(warnings))))]

//! Invoice Core offers the ledger, numbering, rendering, and retrieval
//! primitives behind a small client-invoicing workflow.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod open;
pub mod render;
pub mod service;
pub mod storage;
pub mod time;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Invoice Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("invoice_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
