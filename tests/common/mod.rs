//! Shared helpers for the integration tests.

use std::sync::Arc;

use envsetting::{EnvSetting, InMemoryEnv};

/// Install a test subscriber honouring `RUST_LOG` (e.g. `RUST_LOG=envsetting=trace`). Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// A fresh context over an in-memory store seeded with `pairs`. The store handle is returned for mutation.
pub fn settings(pairs: &[(&str, &str)]) -> (Arc<InMemoryEnv>, EnvSetting) {
    init_tracing();
    let env = Arc::new(InMemoryEnv::from_pairs(pairs.iter().copied()));
    let settings = EnvSetting::with_shared_store(env.clone());
    (env, settings)
}
