//! Log subscriber for integration test binaries.
//!
//! Same precedence as the backend's unit-test setup: `TEST_LOG`, then
//! `RUST_LOG`, then `warn`. Set `TEST_LOG_JSON=1` to get the production
//! JSON layout instead of the compact one.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Idempotent and race-safe; never panics if a subscriber already exists.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let json = std::env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1");
        let builder = fmt()
            .with_env_filter(filter())
            .with_test_writer()
            .without_time();

        let _ = if json {
            builder.json().try_init()
        } else {
            builder.compact().try_init()
        };
    });
}
