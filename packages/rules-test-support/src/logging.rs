//! Unified test logging initialization
//!
//! One subscriber per test binary, installed lazily and never twice.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Default filter when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Resolve the filter directive: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn filter_directive() -> String {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe; calling it from several `ctor` hooks or tests is
/// fine. Engine transitions log at `debug`, so `TEST_LOG=texas42_rules=debug`
/// shows every bid and trick as it is evaluated.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_new(filter_directive())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo/nextest capture
            .without_time()
            .with_target(true)
            .try_init()
            .ok();
    });
}
