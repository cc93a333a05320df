//! Project-level Scala compiler settings.
//!
//! The contract the host build orchestrator queries when deciding how to
//! order compilation and which compiler library to hand to the Scala
//! compiler. Settings are immutable snapshots: the traits expose only
//! accessors, and a snapshot stays valid for the lifetime of the project
//! configuration it was derived from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scope at which a named compiler library is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LibraryLevel {
    /// Registered system-wide, visible to every project.
    Global,
    /// Registered in the project's own library table.
    #[default]
    Project,
    /// Registered on a single module within the project.
    Module,
}

impl LibraryLevel {
    pub const ALL: [LibraryLevel; 3] =
        [LibraryLevel::Global, LibraryLevel::Project, LibraryLevel::Module];

    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryLevel::Global => "global",
            LibraryLevel::Project => "project",
            LibraryLevel::Module => "module",
        }
    }
}

impl fmt::Display for LibraryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a library level string is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown library level '{0}' (expected one of: global, project, module)")]
pub struct LibraryLevelParseError(pub String);

impl FromStr for LibraryLevel {
    type Err = LibraryLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(LibraryLevel::Global),
            "project" => Ok(LibraryLevel::Project),
            "module" => Ok(LibraryLevel::Module),
            other => Err(LibraryLevelParseError(other.to_string())),
        }
    }
}

/// A compiler library reference: a name registered at some level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerLibrary {
    pub name: String,
    pub level: LibraryLevel,
}

/// Capability for anything that carries a compiler library reference.
pub trait CompilerLibraryHolder {
    /// Scope at which the compiler library is registered.
    fn compiler_library_level(&self) -> LibraryLevel;

    /// Name of the compiler library, empty when none is configured.
    fn compiler_library_name(&self) -> &str;

    /// The library reference as a pair, `None` when no library is
    /// configured (empty name).
    fn compiler_library(&self) -> Option<CompilerLibrary> {
        let name = self.compiler_library_name();
        if name.is_empty() {
            None
        } else {
            Some(CompilerLibrary {
                name: name.to_string(),
                level: self.compiler_library_level(),
            })
        }
    }
}

/// Read-only view of a project's Scala compiler settings.
pub trait ProjectSettings: CompilerLibraryHolder {
    /// Whether Scala compilation runs before other languages in this
    /// project.
    fn is_scala_first(&self) -> bool;
}

/// Concrete settings snapshot produced by the configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectSettingsData {
    scala_first: bool,
    library_level: LibraryLevel,
    library_name: String,
}

impl ProjectSettingsData {
    pub fn new(scala_first: bool, library_level: LibraryLevel, library_name: String) -> Self {
        Self {
            scala_first,
            library_level,
            library_name,
        }
    }
}

impl CompilerLibraryHolder for ProjectSettingsData {
    fn compiler_library_level(&self) -> LibraryLevel {
        self.library_level
    }

    fn compiler_library_name(&self) -> &str {
        &self.library_name
    }
}

impl ProjectSettings for ProjectSettingsData {
    fn is_scala_first(&self) -> bool {
        self.scala_first
    }
}
