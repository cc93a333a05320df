//! Scalaforge Core Library
//!
//! Provides the domain logic for per-project Scala compiler settings
//! in mixed-language builds, with support for multiple configuration
//! scopes.

pub mod config;
pub mod settings;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{ConfigStore, ForgeConfig, ProjectOverride, ScalaEntry, merge_configs};

    // Settings contract
    pub use crate::settings::{
        CompilerLibrary, CompilerLibraryHolder, LibraryLevel, ProjectSettings,
        ProjectSettingsData,
    };

    // Scopes
    pub use crate::types::ConfigScope;
}
