//! Log output setup.
//!
//! Standard output carries protocol lines and nothing else, so every log
//! record goes to standard error. A stray log line on stdout would be read
//! by the server as a malformed message.

use tracing_subscriber::EnvFilter;

use crate::BotConfig;

/// Installs a `tracing` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// [`BotConfig::log_filter`]. Calling this more than once is harmless;
/// only the first call installs a subscriber.
pub fn init(config: &BotConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = %config.log_filter, "logging initialised");
    }
}
