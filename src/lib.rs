#![forbid(unsafe_code)]

//! Shared configuration core for the GradientClock displays
//!
//! The phone, watch, and widget processes all point at one persisted JSON
//! document describing the clock's time format and gradient theme. This
//! crate owns that document end to end:
//!
//! - [`model`]: the document schema and its canonical JSON codec
//! - [`theme`]: the fixed catalog of built-in gradient themes
//! - [`repository`]: durable (file) and volatile (in-memory) stores
//! - [`api`]: the facade display code talks to; stamps `lastUpdated` on
//!   every mutation and guards against concurrent writers

pub mod api;
pub mod constants;
pub mod error;
pub mod model;
pub mod repository;
pub mod theme;

pub use api::GradientClockApi;
pub use error::ConfigError;
pub use model::{ClockConfig, TimeFormat};
pub use repository::{
    ConfigRepository, FileConfigRepository, InMemoryConfigRepository, RecoveryPolicy,
};
pub use theme::Theme;
