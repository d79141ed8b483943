//! Engine configuration documents.
//!
//! The host hands the igniter a JSON document listing each engine, its
//! ignition budget and any previously persisted usage.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ENGINE_ACTIONS;
use crate::error::ConfigError;

/// Configuration for one engine part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub name: String,
    /// Display title; falls back to `name`.
    #[serde(default)]
    pub title: Option<String>,
    /// Maximum ignitions. Zero or negative means unlimited.
    #[serde(default)]
    pub ignitions_permitted: i32,
    /// Ignitions already used in a previous session.
    #[serde(default)]
    pub ignitions_used: u32,
    #[serde(default = "default_actions")]
    pub actions: Vec<String>,
}

fn default_actions() -> Vec<String> {
    DEFAULT_ENGINE_ACTIONS.iter().map(|a| a.to_string()).collect()
}

impl EngineConfig {
    pub fn new(name: impl Into<String>, ignitions_permitted: i32) -> Self {
        Self {
            name: name.into(),
            title: None,
            ignitions_permitted,
            ignitions_used: 0,
            actions: default_actions(),
        }
    }

    pub fn with_used(mut self, ignitions_used: u32) -> Self {
        self.ignitions_used = ignitions_used;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// Top-level igniter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgniterConfig {
    #[serde(default)]
    pub engines: Vec<EngineConfig>,
}

impl IgniterConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: IgniterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Engine names must be non-empty and unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for engine in &self.engines {
            if engine.name.trim().is_empty() {
                return Err(ConfigError::EmptyEngineName);
            }
            if !seen.insert(engine.name.as_str()) {
                return Err(ConfigError::DuplicateEngine {
                    name: engine.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn engine(&self, name: &str) -> Option<&EngineConfig> {
        self.engines.iter().find(|e| e.name == name)
    }
}
