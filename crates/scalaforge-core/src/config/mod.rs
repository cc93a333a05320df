//! Configuration management for different scopes
//!
//! Supports three configuration scopes:
//! - Global: System-wide configuration
//! - PerProjectLocal: Project-specific, not shared
//! - PerProjectShared: Project-specific, shared across team

pub mod merge;
pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use merge::merge_configs;
pub use parser::{parse_forge_toml, parse_forge_toml_str, to_toml};
pub use paths::config_path_for_scope;
pub use schema::{ForgeConfig, ProjectOverride, ScalaEntry};
pub use store::ConfigStore;
