//! Plain `tracing` output for library users and tests.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when neither `RUST_LOG` nor a directive is given.
pub(crate) const DEFAULT_DIRECTIVE: &str = "queenstep=info,queenstep_solver=info";

/// Builds the filter: `RUST_LOG` wins, then `directive`, then the default.
pub(crate) fn env_filter(directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive.unwrap_or(DEFAULT_DIRECTIVE)))
}

/// Installs a formatting subscriber for queenstep events.
///
/// Safe to call multiple times - only the first call has effect, and a
/// subscriber installed elsewhere is left in place.
pub fn init_logging(directive: Option<&str>) {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(env_filter(directive))
            .with(fmt::layer().with_target(false))
            .try_init();
    });
}
