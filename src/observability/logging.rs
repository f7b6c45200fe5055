//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the host process
//! - Log level configurable via RUST_LOG, falling back to a default filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is not set,
/// e.g. `"size_gate=debug"`. Call once at startup.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
