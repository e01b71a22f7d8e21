//! Installs a `tracing-subscriber` fmt subscriber filtered by `RNLINT_LOG`.

use std::sync::Once;

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `rnlint_analysis=debug`.
pub const LOG_ENV_VAR: &str = "RNLINT_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

static INIT: Once = Once::new();

/// Initialize global tracing. Safe to call more than once; only the first call
/// installs a subscriber, and an already-installed subscriber is left alone.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let installed = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
        if installed.is_err() {
            ::tracing::debug!("tracing subscriber already installed; keeping it");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
