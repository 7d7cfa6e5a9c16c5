//! Logging for test binaries, both the backend's unit tests and its
//! integration tests. Each binary installs it from a `ctor` hook.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when neither `TEST_LOG` nor `RUST_LOG` is set: passing runs stay
/// quiet, while game-flow warnings still show up next to a failing test.
pub const DEFAULT_TEST_FILTER: &str = "warn";

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Picks the filter directives: `TEST_LOG` wins over `RUST_LOG`, blank values
/// count as unset.
pub fn filter_directives(test_log: Option<String>, rust_log: Option<String>) -> String {
    [test_log, rust_log]
        .into_iter()
        .flatten()
        .map(|d| d.trim().to_string())
        .find(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_TEST_FILTER.to_string())
}

/// Installs a test-writer subscriber once per binary. Later calls, or a
/// subscriber installed by someone else, are left alone.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let directives = filter_directives(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let filter = EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        let installed = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(%directives, "test logging installed");
        }
    });
}
