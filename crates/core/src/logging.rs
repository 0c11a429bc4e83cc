//! Native tracing setup for tests and tooling
//!
//! The browser app installs its own console layer; this covers everything
//! that runs outside wasm.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_level`. Fails if a global subscriber is already set.
pub fn init_tracing(
    default_level: &str,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(env_filter)
        .try_init()
}
