//! Application-wide constants
//!
//! Single source of truth for the storage location convention shared by all
//! display processes and for concurrent-writer retry handling.

/// Storage location defaults
pub mod config {
    /// Dotfile directory under the user's home directory
    pub const APP_DIR: &str = ".gradientclock";

    /// Document file name inside [`APP_DIR`]
    pub const FILENAME: &str = "clock_config.json";
}

/// Concurrent-writer handling
pub mod sync {
    /// Read-modify-write attempts before a conflict is surfaced to the caller
    pub const MAX_SAVE_ATTEMPTS: u32 = 3;
}
