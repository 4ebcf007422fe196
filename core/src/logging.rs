use std::sync::Once;

static TRACING_INIT: Once = Once::new();

pub const LOG_ENV: &str = "DESCARGA_LOG";

/// Initializes the global tracing subscriber, writing to stderr.
///
/// The filter comes from `DESCARGA_LOG` (e.g. `descarga_core=debug`) and
/// defaults to warnings only.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("descarga_core=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
