//! Bot configuration.

use starbot_transport::DEFAULT_MAX_LINE_BYTES;

/// Settings for a [`Bot`](crate::Bot).
///
/// There are no CLI flags or config files: the process is driven purely
/// by its stdin/stdout. Start from `BotConfig::default()` and override the
/// fields you care about.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    ///
    /// Default: `"info"`.
    pub log_filter: String,

    /// Largest inbound line accepted, terminator included.
    ///
    /// Default: 16 MiB.
    pub max_line_bytes: usize,

    /// Log every raw inbound and outbound line at `trace` level.
    ///
    /// Default: `false`. Lines can be large; enable only while debugging.
    pub log_raw_lines: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            log_raw_lines: false,
        }
    }
}
