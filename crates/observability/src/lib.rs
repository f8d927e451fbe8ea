//! Process-wide tracing/logging setup.
//!
//! The billing crates themselves stay (almost) log-free; callers that want
//! the aggregator's debug events wire this up once at startup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Safe to call from
/// multiple tests or entry points; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_reentrant() {
        super::init();
        super::init();
        tracing::debug!("still alive after double init");
    }
}
