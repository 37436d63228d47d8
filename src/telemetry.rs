//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! embedding application's call. [`init`] wires up the stack used during
//! development: an env-filtered fmt layer plus span-trace capture for error
//! reports.

use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` when set and falls back to warnings plus this
/// crate's info events. Calling this more than once panics (the global
/// subscriber can only be set once), so applications should call it exactly
/// once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn,adcollect=info"))
        .expect("static filter directive parses");

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(ErrorLayer::default())
        .init();
}
