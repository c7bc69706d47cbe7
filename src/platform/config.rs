// ElementExplorer - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::DisplayMode;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ElementExplorer configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory
    /// (e.g. ~/.config/elementexplorer/ or %APPDATA%\ElementExplorer\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[dataset]` section.
    pub dataset: DatasetSection,
    /// `[display]` section.
    pub display: DisplaySection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[dataset]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DatasetSection {
    /// Element dataset JSON file. Relative paths are resolved against the
    /// directory holding config.toml. Unset = built-in table.
    pub path: Option<String>,
}

/// `[display]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// "dim" or "hide".
    pub mode: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Dataset file to load instead of the built-in table.
    pub dataset_path: Option<PathBuf>,
    /// Presentation of non-matching elements.
    pub display_mode: DisplayMode,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load and validate `config.toml` from the given config directory.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    load_config_file(&config_dir.join(constants::CONFIG_FILE_NAME))
}

/// Load a config file the user named explicitly (e.g. `--config`).
///
/// Unlike the platform default, a missing file is an error. Invalid
/// contents still degrade to warnings.
pub fn load_explicit_config(config_path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    if !config_path.is_file() {
        return Err(ConfigError::Io {
            path: config_path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
        });
    }
    Ok(load_config_file(config_path))
}

/// Load and validate a specific config file.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts but the user is informed.
pub fn load_config_file(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::debug!(path = %config_path.display(), "Parsed config.toml");

    let base_dir = config_path.parent().unwrap_or(Path::new("."));
    let config = validate(raw, base_dir, &mut warnings);
    (config, warnings)
}

/// Validate each field, accumulating all warnings.
fn validate(raw: RawConfig, base_dir: &Path, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Dataset: path --
    if let Some(path) = raw.dataset.path.filter(|p| !p.trim().is_empty()) {
        let path = PathBuf::from(path.trim());
        config.dataset_path = Some(if path.is_absolute() {
            path
        } else {
            base_dir.join(path)
        });
    }

    // -- Display: mode --
    if let Some(mode) = raw.display.mode {
        match mode.parse::<DisplayMode>() {
            Ok(m) => config.display_mode = m,
            Err(_) => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[display] mode".to_string(),
                    value: mode,
                    expected: "\"dim\" or \"hide\"; using default (dim)".to_string(),
                }
                .to_string(),
            ),
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[logging] level".to_string(),
                    value: level,
                    expected: format!(
                        "one of {}; using default ({})",
                        constants::VALID_LOG_LEVELS.join(", "),
                        constants::DEFAULT_LOG_LEVEL
                    ),
                }
                .to_string(),
            );
        }
    }

    config
}
