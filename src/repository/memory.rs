//! In-memory configuration storage
//!
//! Backing store is a single field scoped to the instance; nothing persists
//! across instances. Used for isolated tests and the standalone preview.

use super::ConfigRepository;
use crate::error::ConfigError;
use crate::model::ClockConfig;

/// Volatile store holding the current document in memory
#[derive(Debug)]
pub struct InMemoryConfigRepository {
    config: ClockConfig,
}

impl InMemoryConfigRepository {
    /// Fresh store holding the default document
    pub fn new() -> Self {
        Self {
            config: ClockConfig::default(),
        }
    }
}

impl Default for InMemoryConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRepository for InMemoryConfigRepository {
    fn load(&self) -> Result<ClockConfig, ConfigError> {
        Ok(self.config.clone())
    }

    fn save(&mut self, config: &ClockConfig) -> Result<(), ConfigError> {
        self.config = config.clone();
        Ok(())
    }

    fn save_if_unchanged(
        &mut self,
        config: &ClockConfig,
        expected_last_updated: i64,
    ) -> Result<(), ConfigError> {
        if self.config.last_updated != expected_last_updated {
            return Err(ConfigError::Conflict {
                expected: expected_last_updated,
                found: self.config.last_updated,
            });
        }
        self.save(config)
    }

    fn export_json(&self) -> Result<String, ConfigError> {
        self.config.to_json()
    }

    fn import_json(&mut self, json: &str) -> Result<ClockConfig, ConfigError> {
        self.config = ClockConfig::from_json(json)?;
        Ok(self.config.clone())
    }
}
