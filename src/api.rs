//! Client-facing facade over the configuration store
//!
//! Every mutation flows through here: the facade reads the current
//! document, applies one change, stamps `lastUpdated`, and writes back with
//! an optimistic check against concurrent writers. Display code never calls
//! the repository's mutation operations directly.

use tracing::warn;

use crate::constants::sync::MAX_SAVE_ATTEMPTS;
use crate::error::ConfigError;
use crate::model::{ClockConfig, TimeFormat, now_millis};
use crate::repository::ConfigRepository;
use crate::theme::Theme;

/// Main API for clock configuration, shared by all display platforms
pub struct GradientClockApi<R: ConfigRepository> {
    repository: R,
}

impl<R: ConfigRepository> GradientClockApi<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Current configuration document
    pub fn get_config(&self) -> Result<ClockConfig, ConfigError> {
        self.repository.load()
    }

    /// Switch the time format, leaving everything else untouched
    pub fn set_time_format(&mut self, format: TimeFormat) -> Result<(), ConfigError> {
        self.commit(|config| ClockConfig {
            time_format: format,
            ..config
        })?;
        Ok(())
    }

    /// Switch the theme, leaving everything else untouched
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), ConfigError> {
        self.commit(move |config| ClockConfig {
            theme: theme.clone(),
            ..config
        })?;
        Ok(())
    }

    /// Switch to a built-in theme by catalog name
    pub fn set_theme_by_name(&mut self, name: &str) -> Result<(), ConfigError> {
        let theme = Theme::find_by_name(name)
            .ok_or_else(|| ConfigError::UnknownTheme(name.to_string()))?;
        self.set_theme(theme.clone())
    }

    /// Replace the whole document. The caller-supplied `lastUpdated` is
    /// ignored; the stored document is stamped with the time of this call.
    pub fn update_config(&mut self, config: ClockConfig) -> Result<(), ConfigError> {
        self.commit(move |_| config.clone())?;
        Ok(())
    }

    /// JSON text of the current document, for sharing between devices
    pub fn export_config_json(&self) -> Result<String, ConfigError> {
        self.repository.export_json()
    }

    /// Import a document exported elsewhere. Unlike the setters, the
    /// imported `lastUpdated` is stored verbatim.
    pub fn import_config_json(&mut self, json: &str) -> Result<ClockConfig, ConfigError> {
        self.repository.import_json(json)
    }

    /// Overwrite the store with the default document
    pub fn reset_to_default(&mut self) -> Result<(), ConfigError> {
        self.repository.save(&ClockConfig::default())
    }

    /// The built-in theme catalog, in gallery order
    pub fn available_themes(&self) -> &'static [Theme] {
        Theme::all()
    }

    /// Read-modify-write with stamping and bounded conflict retry.
    ///
    /// The stamp is `now.max(previous + 1)`: strictly increasing through
    /// this facade even when two mutations land in the same millisecond.
    fn commit<F>(&mut self, apply: F) -> Result<ClockConfig, ConfigError>
    where
        F: Fn(ClockConfig) -> ClockConfig,
    {
        let mut attempt = 0;
        loop {
            let current = self.repository.load()?;
            let expected = current.last_updated;
            let mut updated = apply(current);
            updated.last_updated = now_millis().max(expected + 1);

            match self.repository.save_if_unchanged(&updated, expected) {
                Ok(()) => return Ok(updated),
                Err(ConfigError::Conflict { expected, found })
                    if attempt + 1 < MAX_SAVE_ATTEMPTS =>
                {
                    attempt += 1;
                    warn!(attempt, expected, found, "Concurrent config update, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
