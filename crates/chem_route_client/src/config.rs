use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use chem_route::{ProgressTimeline, DEFAULT_STAGE_DURATION_MS};

pub const ENV_STAGE_DURATION_MS: &str = "CHEM_ROUTE_STAGE_DURATION_MS";
pub const ENV_SHOW_PROGRESS: &str = "CHEM_ROUTE_SHOW_PROGRESS";
pub const ENV_MAP_HEIGHT: &str = "CHEM_ROUTE_MAP_HEIGHT";

pub const DEFAULT_CONFIG_FILE_NAME: &str = "chem_route.toml";
pub const DEFAULT_MAP_HEIGHT: f32 = 500.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub stage_duration_ms: u64,
    pub show_progress: bool,
    pub map_height: f32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stage_duration_ms: DEFAULT_STAGE_DURATION_MS,
            show_progress: true,
            map_height: DEFAULT_MAP_HEIGHT,
        }
    }
}

impl ClientConfig {
    pub fn from_default_sources() -> Result<Self, ClientConfigError> {
        let config_path = Path::new(DEFAULT_CONFIG_FILE_NAME);
        if config_path.exists() {
            return Self::from_config_file(config_path);
        }
        Self::from_env()
    }

    /// Reads `path` as a flat TOML table; keys missing from the file fall
    /// back to the environment.
    pub fn from_config_file(path: &Path) -> Result<Self, ClientConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ClientConfigError::ReadConfigFile {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let value: toml::Value =
            toml::from_str(&content).map_err(|err| ClientConfigError::ParseConfigFile {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        let table = value
            .as_table()
            .ok_or_else(|| ClientConfigError::ParseConfigFile {
                path: path.display().to_string(),
                message: "root is not a TOML table".to_string(),
            })?;

        Self::from_env_with(|key| {
            table
                .get(key)
                .and_then(toml_value_to_string)
                .or_else(|| std::env::var(key).ok())
        })
    }

    pub fn from_env() -> Result<Self, ClientConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    fn from_env_with<F>(mut getter: F) -> Result<Self, ClientConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_empty(getter(ENV_STAGE_DURATION_MS)) {
            config.stage_duration_ms = value
                .parse::<u64>()
                .map_err(|_| ClientConfigError::InvalidStageDuration { value })?;
        }
        if let Some(value) = non_empty(getter(ENV_SHOW_PROGRESS)) {
            config.show_progress =
                parse_bool(&value).ok_or(ClientConfigError::InvalidBool {
                    key: ENV_SHOW_PROGRESS,
                    value,
                })?;
        }
        if let Some(value) = non_empty(getter(ENV_MAP_HEIGHT)) {
            config.map_height = value
                .parse::<f32>()
                .ok()
                .filter(|height| height.is_finite() && *height > 0.0)
                .ok_or(ClientConfigError::InvalidMapHeight { value })?;
        }

        Ok(config)
    }

    pub fn progress_timeline(&self) -> ProgressTimeline {
        ProgressTimeline::new(Duration::from_millis(self.stage_duration_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientConfigError {
    InvalidStageDuration { value: String },
    InvalidBool { key: &'static str, value: String },
    InvalidMapHeight { value: String },
    ReadConfigFile { path: String, message: String },
    ParseConfigFile { path: String, message: String },
}

impl fmt::Display for ClientConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientConfigError::InvalidStageDuration { value } => {
                write!(f, "invalid stage duration ms: {value}")
            }
            ClientConfigError::InvalidBool { key, value } => {
                write!(f, "invalid boolean for {key}: {value}")
            }
            ClientConfigError::InvalidMapHeight { value } => {
                write!(f, "invalid map height: {value}")
            }
            ClientConfigError::ReadConfigFile { path, message } => {
                write!(f, "read config file failed ({path}): {message}")
            }
            ClientConfigError::ParseConfigFile { path, message } => {
                write!(f, "parse config file failed ({path}): {message}")
            }
        }
    }
}

impl Error for ClientConfigError {}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn toml_value_to_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(value) => Some(value.clone()),
        toml::Value::Integer(value) => Some(value.to_string()),
        toml::Value::Float(value) => Some(value.to_string()),
        toml::Value::Boolean(value) => Some(value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ClientConfig, ClientConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ClientConfig::from_env_with(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let config = config_from(&[]).expect("defaults");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.stage_duration_ms, DEFAULT_STAGE_DURATION_MS);
        assert!(config.show_progress);
        assert!((config.map_height - DEFAULT_MAP_HEIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn env_values_override_defaults() {
        let config = config_from(&[
            (ENV_STAGE_DURATION_MS, "250"),
            (ENV_SHOW_PROGRESS, "off"),
            (ENV_MAP_HEIGHT, "320"),
        ])
        .expect("config");
        assert_eq!(config.stage_duration_ms, 250);
        assert!(!config.show_progress);
        assert!((config.map_height - 320.0).abs() < f32::EPSILON);
        assert_eq!(
            config.progress_timeline().stage_duration(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[(ENV_MAP_HEIGHT, "  "), (ENV_STAGE_DURATION_MS, "")])
            .expect("config");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = config_from(&[(ENV_STAGE_DURATION_MS, "fast")]).expect_err("should fail");
        assert_eq!(
            err,
            ClientConfigError::InvalidStageDuration {
                value: "fast".to_string()
            }
        );

        let err = config_from(&[(ENV_SHOW_PROGRESS, "maybe")]).expect_err("should fail");
        assert!(err.to_string().contains(ENV_SHOW_PROGRESS));

        let err = config_from(&[(ENV_MAP_HEIGHT, "-5")]).expect_err("should fail");
        assert!(matches!(err, ClientConfigError::InvalidMapHeight { .. }));
    }

    #[test]
    fn config_file_values_are_read() {
        let dir = std::env::temp_dir().join(format!(
            "chem-route-config-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join(DEFAULT_CONFIG_FILE_NAME);
        fs::write(
            &path,
            "CHEM_ROUTE_STAGE_DURATION_MS = 40\nCHEM_ROUTE_SHOW_PROGRESS = false\n",
        )
        .expect("write config");

        let config = ClientConfig::from_config_file(&path).expect("config");
        assert_eq!(config.stage_duration_ms, 40);
        assert!(!config.show_progress);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn malformed_config_file_reports_path() {
        let dir = std::env::temp_dir().join(format!(
            "chem-route-config-bad-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join(DEFAULT_CONFIG_FILE_NAME);
        fs::write(&path, "not = [valid").expect("write config");

        let err = ClientConfig::from_config_file(&path).expect_err("should fail");
        assert!(matches!(err, ClientConfigError::ParseConfigFile { .. }));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE_NAME));

        let _ = fs::remove_dir_all(dir);
    }
}
