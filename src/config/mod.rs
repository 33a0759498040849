use crate::core::calculator::reconcile::DuplicateClockInPolicy;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys written by `init`; `config --check` reports the ones missing from the file.
pub const KNOWN_KEYS: [&str; 4] = ["database", "duplicate_clock_in", "date_format", "time_format"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub duplicate_clock_in: DuplicateClockInPolicy,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_date_format() -> String {
    "%a %b %e".to_string()
}
fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}

/// chrono panics while rendering an unknown specifier, so reject it up front.
fn check_format(key: &str, fmt: &str) -> AppResult<()> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::Config(format!("invalid {key} pattern '{fmt}'")));
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            duplicate_clock_in: DuplicateClockInPolicy::default(),
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// `~/.config/timecard`
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("timecard")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timecard.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timesheet.db")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content).map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse a YAML document and validate the strftime patterns it carries.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Self =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        check_format("date_format", &cfg.date_format)?;
        check_format("time_format", &cfg.time_format)?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Known keys that are absent from a YAML document.
    pub fn missing_keys(content: &str) -> Vec<&'static str> {
        let value: serde_yaml::Value = serde_yaml::from_str(content).unwrap_or_default();
        let map = value.as_mapping();

        KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.is_some_and(|m| m.contains_key(*k)))
            .collect()
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB path: user provided or default
        let db_path = match custom_db {
            Some(path) => expand_tilde(path),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file =
                fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
