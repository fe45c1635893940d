use crate::error::{NotezError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for the notez binary, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotezConfig {
    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for NotezConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color: default_color(),
        }
    }
}

impl NotezConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotezConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Set the log level, accepting only tracing's level names (any case)
    pub fn set_log_level(&mut self, level: &str) -> Result<()> {
        let normalized = level.trim().to_lowercase();
        if !LOG_LEVELS.contains(&normalized.as_str()) {
            return Err(NotezError::InvalidArgument(format!(
                "Unknown log level `{}` (expected one of: {})",
                level,
                LOG_LEVELS.join(", ")
            )));
        }
        self.log_level = normalized;
        Ok(())
    }

    /// Set color from a user-supplied string ("true"/"false", "on"/"off")
    pub fn set_color(&mut self, value: &str) -> Result<()> {
        self.color = match value.trim().to_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => true,
            "false" | "off" | "no" | "0" => false,
            _ => {
                return Err(NotezError::InvalidArgument(format!(
                    "Expected a boolean for color, got `{}`",
                    value
                )))
            }
        };
        Ok(())
    }
}
