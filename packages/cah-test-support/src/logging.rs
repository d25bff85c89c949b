//! Shared test logging for unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Default filter: quiet, except for the setup flow's own warnings.
const DEFAULT_FILTER: &str = "warn";

/// Install a test-writer subscriber once per process.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then `warn`. Safe to call
/// from every test and from `ctor` hooks; a subscriber installed elsewhere
/// first wins silently.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = filter_from(|key| std::env::var(key).ok());

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init()
            .ok();
    });
}

fn filter_from(lookup: impl Fn(&str) -> Option<String>) -> EnvFilter {
    let directives = lookup("TEST_LOG")
        .or_else(|| lookup("RUST_LOG"))
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
