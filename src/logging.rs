//! Purpose: Tracing-subscriber bootstrap for test harness setup code.
//! Exports: `init`.
//! Role: One call wires structured logging; safe to invoke more than once.
//! Invariants: `RUST_LOG` overrides the default `info` filter.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
