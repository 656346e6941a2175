//! Idempotent tracing setup for tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter directive for test runs: `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn test_filter() -> String {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string())
}

/// Install a test-writer subscriber once per test binary.
///
/// `TEST_LOG_JSON=1` switches to JSON lines, matching the binaries' `--json-logs`.
/// Safe to call from every test and from `ctor` hooks; a subscriber installed
/// elsewhere first is left in place.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::new(test_filter());
        let json = std::env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1" || v == "true");

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false);
        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
        tracing::debug!("test logging ready");
    });
}
