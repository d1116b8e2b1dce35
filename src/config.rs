// Configuration for the kiosk
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/stmovens/config.toml)
// 3. Built-in defaults (lowest priority)
//
// The `theme` key doubles as the durable theme preference: it is read once at
// startup and written back on every theme toggle.

use crate::theme::ThemeKind;
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How often the rotating log file rolls over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn parse(value: &str) -> Self {
        match value {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation schedule for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "stmovens".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Display theme: "classic" or "modern" (the persisted preference)
    pub theme: ThemeKind,

    /// Seconds between carousel advances
    pub carousel_secs: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file structure (everything optional so partial files parse)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    carousel_secs: Option<u64>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/stmovens/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("stmovens").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# stmovens configuration
# Uncomment and modify options as needed

# Display theme: classic or modern (also written when toggled with 't')
# theme = "classic"

# Seconds between carousel advances (default: 5)
# carousel_secs = 5

# Logging configuration
# [logging]
# level = "info"           # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false     # Also write logs to rotating files
# file_dir = "./logs"      # Directory for log files
# file_prefix = "stmovens" # Log file name prefix
# file_rotation = "daily"  # hourly, daily, never
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents, &path.display().to_string()),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    fn parse_file_config(contents: &str, origin: &str) -> FileConfig {
        toml::from_str(contents).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse {}: {}", origin, e);
            FileConfig::default()
        })
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# stmovens configuration

# Display theme: classic or modern (also written when toggled with 't')
theme = "{theme}"

# Seconds between carousel advances
carousel_secs = {carousel}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
file_rotation = "{file_rotation}"
"#,
            theme = self.theme.as_config(),
            carousel = self.carousel_secs,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Save current configuration to file (called on every theme toggle)
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::resolve(file)
    }

    /// Merge file values with env overrides and defaults
    fn resolve(file: FileConfig) -> Self {
        // Theme: env > file > default ("classic" when no preference is stored)
        let theme = std::env::var("STMOVENS_THEME")
            .ok()
            .or(file.theme)
            .map(|v| ThemeKind::from_config(&v))
            .unwrap_or_default();

        // Carousel interval: env > file > default
        let carousel_secs = std::env::var("STMOVENS_CAROUSEL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.carousel_secs)
            .filter(|&secs| secs > 0)
            .unwrap_or(5);

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.level),
            file_enabled: file_logging.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_prefix: file_logging.file_prefix.unwrap_or(defaults.file_prefix),
            file_rotation: file_logging
                .file_rotation
                .map(|v| LogRotation::parse(&v))
                .unwrap_or(defaults.file_rotation),
        };

        Self {
            theme,
            carousel_secs,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            carousel_secs: 5,
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let file = Config::parse_file_config("", "test");
        assert!(file.theme.is_none());
        assert!(file.carousel_secs.is_none());
        assert!(file.logging.is_none());
    }

    #[test]
    fn missing_theme_resolves_to_classic() {
        // First run: no stored preference, theme defaults to classic
        let file = Config::parse_file_config("carousel_secs = 7", "test");
        assert!(file.theme.is_none());
        assert_eq!(
            file.theme.map(|v| ThemeKind::from_config(&v)).unwrap_or_default(),
            ThemeKind::Classic
        );
    }

    #[test]
    fn partial_file_parses() {
        let file = Config::parse_file_config(
            r#"
theme = "modern"

[logging]
level = "debug"
"#,
            "test",
        );
        assert_eq!(file.theme.as_deref(), Some("modern"));
        assert_eq!(file.logging.unwrap().level.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_file_degrades_to_defaults() {
        let file = Config::parse_file_config("theme = [not toml", "test");
        assert!(file.theme.is_none());
    }

    #[test]
    fn to_toml_round_trips_the_theme() {
        let mut config = Config::default();
        config.theme = ThemeKind::Modern;
        config.carousel_secs = 9;

        let file = Config::parse_file_config(&config.to_toml(), "test");
        assert_eq!(file.theme.as_deref(), Some("modern"));
        assert_eq!(file.carousel_secs, Some(9));
        let logging = file.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.file_rotation.as_deref(), Some("daily"));
    }

    #[test]
    fn rotation_parse_defaults_to_daily() {
        assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
        assert_eq!(LogRotation::parse("never"), LogRotation::Never);
        assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    }
}
