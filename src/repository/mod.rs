//! Storage backends for the configuration document
//!
//! Two realizations of the same capability set:
//! - **file**: durable single-file store shared between display processes
//! - **memory**: volatile per-instance store for isolated tests and previews

mod file;
mod memory;

pub use file::{FileConfigRepository, RecoveryPolicy};
pub use memory::InMemoryConfigRepository;

use crate::error::ConfigError;
use crate::model::ClockConfig;

/// A backing store holding the single configuration document.
///
/// The variant is chosen at construction; callers hold a concrete repository
/// (or stay generic over this trait) rather than inspecting types at runtime.
pub trait ConfigRepository {
    /// Read the current document. An absent store yields the default
    /// document; see the implementations for how corrupt stores behave.
    fn load(&self) -> Result<ClockConfig, ConfigError>;

    /// Persist a document, superseding whatever the store held.
    fn save(&mut self, config: &ClockConfig) -> Result<(), ConfigError>;

    /// Persist a document only if the store still carries
    /// `expected_last_updated`. An absent store never conflicts.
    fn save_if_unchanged(
        &mut self,
        config: &ClockConfig,
        expected_last_updated: i64,
    ) -> Result<(), ConfigError>;

    /// JSON text of the current document (equivalent to serializing `load`)
    fn export_json(&self) -> Result<String, ConfigError>;

    /// Replace the stored document with `json`, persisting immediately.
    ///
    /// The imported `lastUpdated` stamp is kept as-is: import transplants a
    /// document from another device wholesale, provenance included.
    fn import_json(&mut self, json: &str) -> Result<ClockConfig, ConfigError>;
}
