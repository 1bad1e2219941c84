use anyhow::{Context, Result};
use prefer::{ConfigValue, FromValue};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::DEFAULT_TIMEOUT;

const CONFIG_FILE_NAME: &str = "wolweb-cli.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Base URL of the wolweb server, e.g. `http://192.168.1.10:8089`
    pub server: String,
    /// Per-request timeout in seconds (default: 5)
    pub timeout_secs: u64,
}

impl Config {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }

    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let yaml_value: serde_yaml::Value = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        let config_value = yaml_to_config_value(yaml_value);
        Config::from_value(&config_value)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// `~/.config/wolweb-cli.yaml` on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_FILE_NAME)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl FromValue for Config {
    fn from_value(value: &ConfigValue) -> prefer::Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| prefer::Error::ConversionError {
                key: String::new(),
                type_name: "Config".into(),
                source: "expected object".into(),
            })?;

        let server = obj
            .get("server")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| prefer::Error::ConversionError {
                key: "server".into(),
                type_name: "String".into(),
                source: "missing server URL".into(),
            })?;

        Ok(Self {
            server: server.to_string(),
            timeout_secs: obj
                .get("timeout_secs")
                .and_then(|v| v.as_u64())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_TIMEOUT.as_secs()),
        })
    }
}

/// Convert serde_yaml::Value to prefer::ConfigValue
fn yaml_to_config_value(value: serde_yaml::Value) -> ConfigValue {
    match value {
        serde_yaml::Value::Null => ConfigValue::Null,
        serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(i) => ConfigValue::Integer(i),
            None => ConfigValue::Float(n.as_f64().unwrap_or_default()),
        },
        serde_yaml::Value::String(s) => ConfigValue::String(s),
        serde_yaml::Value::Sequence(seq) => {
            ConfigValue::Array(seq.into_iter().map(yaml_to_config_value).collect())
        }
        serde_yaml::Value::Mapping(map) => ConfigValue::Object(
            map.into_iter()
                .filter_map(|(k, v)| yaml_key(k).map(|k| (k, yaml_to_config_value(v))))
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => yaml_to_config_value(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
