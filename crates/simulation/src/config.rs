//! Environment-driven configuration for the demonstration binary.

use std::path::PathBuf;

use confereai_observability::LogFormat;

/// Path to a JSON seed catalog; the built-in catalog is used when unset.
pub const CATALOG_ENV: &str = "CONFEREAI_CATALOG";
/// `json` (default) or `pretty`.
pub const LOG_FORMAT_ENV: &str = "CONFEREAI_LOG_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationConfig {
    pub catalog_path: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Why `CONFEREAI_LOG_FORMAT` was ignored, if it was. Logging is not up yet
    /// while the config is read, so the caller reports this after `init_with`.
    pub log_format_error: Option<String>,
}

impl SimulationConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (the environment, a map in tests).
    ///
    /// Unusable values fall back to defaults; see [`Self::log_format_error`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let (log_format, log_format_error) = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => match raw.parse::<LogFormat>() {
                Ok(format) => (format, None),
                Err(err) => (LogFormat::default(), Some(err)),
            },
            None => (LogFormat::default(), None),
        };

        Self {
            catalog_path,
            log_format,
            log_format_error,
        }
    }

    /// Emit warnings for ignored settings. Call once the subscriber is installed.
    pub fn report_ignored(&self) {
        if let Some(err) = &self.log_format_error {
            tracing::warn!(%err, "{LOG_FORMAT_ENV} not understood; using json");
        }
    }
}
