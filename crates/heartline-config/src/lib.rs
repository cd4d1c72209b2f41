//! Configuration for the Heartline exporter.
//!
//! Settings come from an optional TOML file and `HEARTLINE__*` environment
//! variables, later sources overriding earlier ones:
//!
//! ```toml
//! [export]
//! language = "de"
//! kccq_questionnaire_url = "http://example.org/fhir/Questionnaire/kccq"
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! `HEARTLINE__EXPORT__LANGUAGE=en-GB` overrides `export.language`.

pub mod loader;

use heartline_export::ExportSettings;
use serde::{Deserialize, Serialize};

pub use loader::{DEFAULT_CONFIG_FILE, ENV_PREFIX, load_config};

/// Error types for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config source error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.export.language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "export.language must not be empty".into(),
            ));
        }
        if self.export.kccq_questionnaire_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "export.kccq_questionnaire_url must not be empty".into(),
            ));
        }
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {valid_levels:?}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
