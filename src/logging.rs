//! Log setup. `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Our own events at info, everything else (iced, wgpu) only when it warns.
const DEFAULT_FILTER: &str = "warn,player_mockup=info";

pub(crate) fn init() -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
