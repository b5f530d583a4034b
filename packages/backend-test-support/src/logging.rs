//! Process-wide tracing setup for tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test-friendly subscriber once per process.
///
/// Filter precedence is `TEST_LOG`, then `RUST_LOG`, then `"warn"`. Output goes
/// through the test writer so the harness captures it per test, and timestamps
/// are left out so failures diff cleanly. Safe to call from every test binary
/// and from `#[ctor]` hooks.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed by a unit test module.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
