//! stderr logging for the plugin process

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to stderr.
///
/// stdout is reserved for the response, so nothing may log there.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {filter:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install tracing subscriber")
}
