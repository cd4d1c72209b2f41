use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};

use crate::{AppConfig, ConfigError};

/// File read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "heartline.toml";

/// Prefix of environment overrides, e.g. `HEARTLINE__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "HEARTLINE";

/// Loads and validates the configuration.
///
/// An explicit `path` must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_environment(path, None)
}

/// Like [`load_config`], reading environment overrides from `environment`
/// instead of the process environment when given.
pub fn load_with_environment(
    path: Option<&Path>,
    environment: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();
    match path {
        Some(p) => {
            builder = builder.add_source(File::from(p.to_path_buf()).required(true));
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                builder = builder.add_source(File::from(default_path));
            }
        }
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .separator("__")
            .source(environment),
    );

    let merged: AppConfig = builder.build()?.try_deserialize()?;
    merged.validate()?;

    tracing::debug!(
        language = %merged.export.language,
        log_level = %merged.logging.level,
        "Configuration loaded"
    );
    Ok(merged)
}
