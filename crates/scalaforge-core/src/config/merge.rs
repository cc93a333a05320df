//! Configuration layer merging logic
//!
//! Implements the 3-layer merge strategy:
//! Global -> Project -> Project-Local

use std::path::Path;

use super::schema::{ForgeConfig, ScalaEntry};

/// Merge multiple configuration layers
///
/// # Arguments
/// * `global` - Global configuration from ~/.config/scalaforge/scalaforge.toml
/// * `project` - Project configuration from ./scalaforge.toml
/// * `project_path` - Absolute path to the project root
///
/// # Returns
/// Merged configuration with project-local overrides applied
pub fn merge_configs(
    global: Option<ForgeConfig>,
    project: Option<ForgeConfig>,
    project_path: &Path,
) -> anyhow::Result<ForgeConfig> {
    // Start with global config as base
    let mut merged = global.unwrap_or_default();

    // Merge project config
    if let Some(proj) = project {
        merge_scala_entry(&mut merged.scala, proj.scala);

        // Project overrides are only meaningful in the global config
        for (key, override_config) in proj.projects {
            merged.projects.entry(key).or_insert(override_config);
        }
    }

    // Extract and apply project-local override from global
    let override_entry = merged
        .get_project_override(project_path)
        .map(|o| o.scala.clone());
    if let Some(override_entry) = override_entry {
        merge_scala_entry(&mut merged.scala, override_entry);
    }

    // Remove the projects section after applying overrides
    // (it doesn't belong in the merged config)
    merged.projects.clear();

    Ok(merged)
}

/// Merge Scala settings entries
///
/// Set fields in the overlay win; unset fields keep the base value, so a
/// layer that omits a field can never clobber an earlier explicit choice.
fn merge_scala_entry(base: &mut ScalaEntry, overlay: ScalaEntry) {
    if overlay.scala_first.is_some() {
        base.scala_first = overlay.scala_first;
    }
    if overlay.library_level.is_some() {
        base.library_level = overlay.library_level;
    }
    if overlay.library_name.is_some() {
        base.library_name = overlay.library_name;
    }
}
