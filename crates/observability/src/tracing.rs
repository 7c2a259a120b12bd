//! Tracing/logging initialization.
//!
//! Configured from two environment variables:
//! - `RUST_LOG`: an `EnvFilter` directive (default `info`)
//! - `LOG_FORMAT`: `json` (default) or `pretty`
//!
//! Unknown or unparsable values fall back to the defaults instead of failing.

use tracing_subscriber::EnvFilter;

pub const FILTER_VAR: &str = "RUST_LOG";
pub const FORMAT_VAR: &str = "LOG_FORMAT";
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Case-insensitive; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "text" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(FILTER_VAR).ok().as_deref(),
            std::env::var(FORMAT_VAR).ok().as_deref(),
        )
    }

    /// Build from raw variable values (`None` = unset).
    pub fn from_vars(filter: Option<&str>, format: Option<&str>) -> Self {
        let filter = filter
            .map(str::trim)
            .filter(|f| !f.is_empty() && EnvFilter::try_new(f).is_ok())
            .unwrap_or(DEFAULT_FILTER)
            .to_string();
        let format = format.and_then(LogFormat::parse).unwrap_or_default();
        Self { filter, format }
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(&TracingConfig::from_env());
}

/// Initialize tracing/logging with an explicit config.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &TracingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_timer(tracing_subscriber::fmt::time::SystemTime);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_target(true).try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
    };

    if installed {
        ::tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    }
    installed
}
