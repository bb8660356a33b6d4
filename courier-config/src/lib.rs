// Settings loading for Courier webhook clients

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::{DEFAULT_PREFIX, EnvLoader};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{DEFAULT_TIMEOUT_SECS, WebhookSettings};
pub use validation::{ConfigValidator, Validate};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Dotenv(Option<PathBuf>),
    Env,
    Value(String, Value),
}

/// Layered settings loader.
///
/// Sources are applied in the order they were added; a key set by a later
/// source replaces the same key from an earlier one.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    prefix: Option<String>,
    sources: Vec<Source>,
}

impl SettingsLoader {
    /// Create a loader using the default `COURIER` prefix
    pub fn new() -> Self {
        Self {
            prefix: Some(DEFAULT_PREFIX.to_string()),
            sources: Vec::new(),
        }
    }

    /// Set environment variable prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Add a settings file; the format is taken from its extension
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::File(path.into()));
        self
    }

    /// Add a .env file (`None` searches the current directory and parents).
    /// A missing default .env is not an error.
    pub fn dotenv(mut self, path: Option<PathBuf>) -> Self {
        self.sources.push(Source::Dotenv(path));
        self
    }

    /// Add the process environment
    pub fn env(mut self) -> Self {
        self.sources.push(Source::Env);
        self
    }

    /// Set a single value directly
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.sources.push(Source::Value(key.into(), value.into()));
        self
    }

    /// Merge every source into one JSON object
    pub fn load_value(&self) -> Result<Map<String, Value>> {
        let mut merged = Map::new();
        let env_loader = EnvLoader::new(self.prefix.clone());

        for source in &self.sources {
            match source {
                Source::File(path) => {
                    debug!(path = %path.display(), "Loading settings file");
                    let loader = ConfigLoader::auto(path)?;
                    // .env settings files carry prefixed keys, same as the environment
                    if loader.format() == FileFormat::Env {
                        let vars = read_dotenv(Some(path.as_path()))?;
                        merged.extend(string_values(env_loader.collect(vars.into_iter())));
                    } else if let Value::Object(map) = loader.load_file(path)? {
                        merged.extend(map);
                    }
                }
                Source::Dotenv(path) => {
                    let vars = read_dotenv(path.as_deref())?;
                    merged.extend(string_values(env_loader.collect(vars.into_iter())));
                }
                Source::Env => {
                    merged.extend(string_values(env_loader.load()));
                }
                Source::Value(key, value) => {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(merged)
    }

    /// Load and deserialize into any settings type
    pub fn load_as<T: DeserializeOwned>(&self) -> Result<T> {
        let merged = self.load_value()?;
        serde_json::from_value(Value::Object(merged))
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))
    }

    /// Load and validate webhook settings
    pub fn load(&self) -> Result<WebhookSettings> {
        let settings: WebhookSettings = self.load_as()?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn string_values(vars: HashMap<String, String>) -> impl Iterator<Item = (String, Value)> {
    vars.into_iter().map(|(k, v)| (k, Value::String(v)))
}

fn read_dotenv(path: Option<&Path>) -> Result<Vec<(String, String)>> {
    let iter = match path {
        Some(path) => {
            dotenvy::from_path_iter(path).map_err(|e| ConfigError::LoadError(e.to_string()))?
        }
        None => match dotenvy::dotenv_iter() {
            Ok(iter) => iter,
            Err(e) if e.not_found() => return Ok(Vec::new()),
            Err(e) => return Err(ConfigError::LoadError(e.to_string())),
        },
    };

    iter.map(|item| item.map_err(|e| ConfigError::ParseError(e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_sources_win() {
        let merged = SettingsLoader::new()
            .set("timeout_secs", 10)
            .set("timeout_secs", 20)
            .load_value()
            .unwrap();

        assert_eq!(merged["timeout_secs"], 20);
    }

    #[test]
    fn test_load_requires_url() {
        let result = SettingsLoader::new().set("timeout_secs", 10).load();
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_with_values() {
        let settings = SettingsLoader::new()
            .set("webhook_url", "https://hooks.test/1")
            .set("attach_on_error", true)
            .load()
            .unwrap();

        assert_eq!(settings.url(), Some("https://hooks.test/1"));
        assert!(settings.attach_on_error);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
