//! Configuration schema for scalaforge.toml
//!
//! Defines the structure for all three configuration layers:
//! - Global: ~/.config/scalaforge/scalaforge.toml
//! - Project: ./scalaforge.toml
//! - Project-Local: [projects."/path"] in global config

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::settings::{LibraryLevel, ProjectSettingsData};

/// Root configuration structure for scalaforge.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForgeConfig {
    /// Scala compiler settings for the owning scope
    #[serde(default)]
    pub scala: ScalaEntry,

    /// Project-local overrides (ONLY valid in global config)
    #[serde(default)]
    pub projects: HashMap<String, ProjectOverride>,
}

/// Scala settings entry (inline config for TOML)
///
/// Every field is optional so that layers can be merged without a later
/// layer's defaults clobbering an earlier layer's explicit values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScalaEntry {
    /// Compile Scala before other languages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scala_first: Option<bool>,

    /// Registration scope of the compiler library: global, project, module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_level: Option<String>,

    /// Name of the compiler library (e.g. "scala-compiler-2.13")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_name: Option<String>,
}

impl ScalaEntry {
    /// Validate the entry without materializing a settings snapshot.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(level) = &self.library_level {
            level.parse::<LibraryLevel>()?;
        }
        Ok(())
    }

    /// Materialize an immutable settings snapshot, filling unset fields
    /// with defaults (scala_first = false, level = project, name = "").
    pub fn to_settings(&self) -> anyhow::Result<ProjectSettingsData> {
        let level = match &self.library_level {
            Some(level) => level.parse::<LibraryLevel>()?,
            None => LibraryLevel::default(),
        };

        Ok(ProjectSettingsData::new(
            self.scala_first.unwrap_or(false),
            level,
            self.library_name.clone().unwrap_or_default(),
        ))
    }
}

/// Project-specific configuration override
///
/// Key is absolute path to project root
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectOverride {
    /// Path to project (absolute) - inferred from the key
    #[serde(default)]
    pub path: std::path::PathBuf,

    /// Scala settings override for this project
    #[serde(default)]
    pub scala: ScalaEntry,
}

impl ForgeConfig {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.scala
            .validate()
            .context("Invalid [scala] configuration")?;

        for (path, project_override) in &self.projects {
            project_override
                .scala
                .validate()
                .with_context(|| format!("Invalid project override: '{}'", path))?;
        }

        Ok(())
    }

    /// Check if this is a global config (has projects section)
    pub fn is_global(&self) -> bool {
        !self.projects.is_empty()
    }

    /// Get the project override for a given path
    pub fn get_project_override(&self, path: &Path) -> Option<&ProjectOverride> {
        // Try exact match first
        if let Some(override_config) = self.projects.get(&path.to_string_lossy().to_string()) {
            return Some(override_config);
        }

        // Try to find by checking if path starts with any project key
        for (project_path, override_config) in &self.projects {
            if path.starts_with(project_path) {
                return Some(override_config);
            }
        }

        None
    }
}
