//! File-backed configuration storage
//!
//! One JSON document at a caller-supplied path, shared by every display
//! process pointed at it. Writes go through a sibling temp file and a
//! rename so a concurrent reader never observes a half-written document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::ConfigRepository;
use crate::constants;
use crate::error::ConfigError;
use crate::model::ClockConfig;

/// What `load` does with a present-but-unparsable document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPolicy {
    /// Surface the parse error to the caller
    #[default]
    Strict,
    /// Log a warning and fall back to the default document
    FallbackToDefault,
}

/// Durable store backed by a single JSON file
#[derive(Debug)]
pub struct FileConfigRepository {
    path: PathBuf,
    policy: RecoveryPolicy,
}

impl FileConfigRepository {
    /// Repository at `path` with the strict recovery policy
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_policy(path, RecoveryPolicy::Strict)
    }

    pub fn with_policy(path: impl Into<PathBuf>, policy: RecoveryPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    /// Conventional deployment path: `~/.gradientclock/clock_config.json`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file. `None` means the store is absent, or its
    /// content is unusable and the policy allows recovering from that.
    fn read_document(&self) -> Result<Option<ClockConfig>, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match ClockConfig::from_json(&contents) {
                Ok(config) => Ok(Some(config)),
                Err(e) => match self.policy {
                    RecoveryPolicy::Strict => Err(e),
                    RecoveryPolicy::FallbackToDefault => {
                        warn!(path = %self.path.display(), error = %e, "Unparsable config file, falling back to defaults");
                        Ok(None)
                    }
                },
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Serialize and atomically replace the target file
    fn write_document(&self, config: &ClockConfig) -> Result<(), ConfigError> {
        let contents = config.to_json()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // Write to a sibling path, then rename over the target, so another
        // process reading mid-save sees either the old or the new document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|source| ConfigError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl ConfigRepository for FileConfigRepository {
    fn load(&self) -> Result<ClockConfig, ConfigError> {
        match self.read_document()? {
            Some(config) => Ok(config),
            None => {
                info!(path = %self.path.display(), "No config file, using defaults");
                Ok(ClockConfig::default())
            }
        }
    }

    fn save(&mut self, config: &ClockConfig) -> Result<(), ConfigError> {
        self.write_document(config)
    }

    fn save_if_unchanged(
        &mut self,
        config: &ClockConfig,
        expected_last_updated: i64,
    ) -> Result<(), ConfigError> {
        if let Some(on_disk) = self.read_document()? {
            if on_disk.last_updated != expected_last_updated {
                return Err(ConfigError::Conflict {
                    expected: expected_last_updated,
                    found: on_disk.last_updated,
                });
            }
        }
        self.write_document(config)
    }

    fn export_json(&self) -> Result<String, ConfigError> {
        self.load()?.to_json()
    }

    fn import_json(&mut self, json: &str) -> Result<ClockConfig, ConfigError> {
        let config = ClockConfig::from_json(json)?;
        self.write_document(&config)?;
        info!(path = %self.path.display(), last_updated = config.last_updated, "Imported config document");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeFormat;
    use crate::theme::Theme;
    use tempfile::{TempDir, tempdir};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn repo_in(dir: &TempDir) -> FileConfigRepository {
        FileConfigRepository::new(dir.path().join("clock_config.json"))
    }

    fn sample_config(last_updated: i64) -> ClockConfig {
        ClockConfig {
            time_format: TimeFormat::Hours12,
            theme: Theme::find_by_name("Sunset Orange").unwrap().clone(),
            last_updated,
        }
    }

    #[test]
    fn test_load_absent_file_returns_default() {
        init_tracing();
        let dir = tempdir().unwrap();
        let repo = repo_in(&dir);

        let config = repo.load().unwrap();
        assert_eq!(config.time_format, TimeFormat::Hours24);
        assert_eq!(config.theme.name, "Purple Dream");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut repo = repo_in(&dir);

        let config = sample_config(123_456);
        repo.save(&config).unwrap();
        assert_eq!(repo.load().unwrap(), config);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let mut repo =
            FileConfigRepository::new(dir.path().join("nested").join("clock_config.json"));

        repo.save(&ClockConfig::default()).unwrap();
        assert!(repo.path().exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let mut repo = repo_in(&dir);

        repo.save(&ClockConfig::default()).unwrap();

        let entries: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, ["clock_config.json"]);
    }

    #[test]
    fn test_corrupt_file_strict_surfaces_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clock_config.json");
        fs::write(&path, "{not json").unwrap();

        let repo = FileConfigRepository::new(&path);
        assert!(matches!(repo.load(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_corrupt_file_fallback_recovers_default() {
        init_tracing();
        let dir = tempdir().unwrap();
        let path = dir.path().join("clock_config.json");
        fs::write(&path, "{not json").unwrap();

        let repo = FileConfigRepository::with_policy(&path, RecoveryPolicy::FallbackToDefault);
        let config = repo.load().unwrap();
        assert_eq!(config.theme.name, "Purple Dream");
    }

    #[test]
    fn test_import_then_export_is_equivalent() {
        let dir = tempdir().unwrap();
        let mut repo = repo_in(&dir);
        let json = r##"{"timeFormat":"HOURS_12","theme":{"name":"Rose Pink","startColor":"#F857A6","endColor":"#FF5858"},"lastUpdated":987654321}"##;

        repo.import_json(json).unwrap();
        let exported = repo.export_json().unwrap();

        let imported: serde_json::Value = serde_json::from_str(json).unwrap();
        let round_tripped: serde_json::Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(imported, round_tripped);
    }

    #[test]
    fn test_import_keeps_foreign_stamp() {
        let dir = tempdir().unwrap();
        let mut repo = repo_in(&dir);
        let json = r##"{"timeFormat":"HOURS_24","theme":{"name":"Forest Green","startColor":"#134E5E","endColor":"#71B280"},"lastUpdated":42}"##;

        let config = repo.import_json(json).unwrap();
        assert_eq!(config.last_updated, 42);
        assert_eq!(repo.load().unwrap().last_updated, 42);
    }

    #[test]
    fn test_import_malformed_text_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let mut repo = repo_in(&dir);

        assert!(matches!(
            repo.import_json("{not json"),
            Err(ConfigError::Parse { .. })
        ));
        // nothing was persisted
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_export_of_absent_store_is_default_document() {
        let dir = tempdir().unwrap();
        let repo = repo_in(&dir);

        let exported = repo.export_json().unwrap();
        let config = ClockConfig::from_json(&exported).unwrap();
        assert_eq!(config.theme.name, "Purple Dream");
    }

    #[test]
    fn test_save_if_unchanged_against_absent_file() {
        let dir = tempdir().unwrap();
        let mut repo = repo_in(&dir);

        repo.save_if_unchanged(&sample_config(10), 999).unwrap();
        assert_eq!(repo.load().unwrap().last_updated, 10);
    }

    #[test]
    fn test_save_if_unchanged_with_current_stamp() {
        let dir = tempdir().unwrap();
        let mut repo = repo_in(&dir);

        repo.save(&sample_config(100)).unwrap();
        repo.save_if_unchanged(&sample_config(200), 100).unwrap();
        assert_eq!(repo.load().unwrap().last_updated, 200);
    }

    #[test]
    fn test_save_if_unchanged_with_stale_stamp_conflicts() {
        let dir = tempdir().unwrap();
        let mut repo = repo_in(&dir);

        repo.save(&sample_config(100)).unwrap();
        let err = repo.save_if_unchanged(&sample_config(200), 50).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Conflict {
                expected: 50,
                found: 100
            }
        ));
        // the conflicting write must not have landed
        assert_eq!(repo.load().unwrap().last_updated, 100);
    }
}
