use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the default log filter.
pub const LOG_ENV: &str = "SHAREDSTREETS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. `--log` wins over `SHAREDSTREETS_LOG`.
pub fn init(flag: Option<&str>) -> Result<()> {
    let filter = match flag {
        Some(f) => EnvFilter::try_new(f).map_err(|e| anyhow!("invalid log filter {f:?}: {e}"))?,
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}
