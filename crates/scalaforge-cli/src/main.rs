//! Scalaforge - Scala compiler settings for mixed-language builds
//!
//! Usage:
//!   scalaforge show             # Effective settings for the current project
//!   scalaforge set ...          # Write a setting into a scope
//!   scalaforge check            # Validate all configuration layers

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scalaforge_core::config::{ConfigStore, ProjectOverride, merge_configs};
use scalaforge_core::settings::{
    CompilerLibraryHolder, LibraryLevel, ProjectSettings, ProjectSettingsData,
};
use scalaforge_core::types::ConfigScope;

#[derive(Parser)]
#[command(name = "scalaforge")]
#[command(about = "Scala compiler settings manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show Scala compiler settings for the current project
    Show {
        /// Show a single layer unmerged (global, shared, local)
        #[arg(long)]
        scope: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Write a setting into a configuration scope
    Set {
        /// Compile Scala before other languages
        #[arg(long)]
        scala_first: Option<bool>,

        /// Compiler library name (e.g. "scala-compiler-2.13")
        #[arg(long)]
        library_name: Option<String>,

        /// Compiler library level (global, project, module)
        #[arg(long)]
        library_level: Option<String>,

        /// Configuration scope to write to
        ///
        /// - shared (default): ./scalaforge.toml (project-wide, committed to git)
        /// - global: ~/.config/scalaforge/scalaforge.toml
        /// - local: project-local override in ~/.config/scalaforge/scalaforge.toml
        #[arg(long, default_value = "shared")]
        scope: String,
    },

    /// Validate all configuration layers
    Check,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scalaforge=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { scope, format } => run_show(scope, format),
        Commands::Set {
            scala_first,
            library_name,
            library_level,
            scope,
        } => run_set(scala_first, library_name, library_level, &scope),
        Commands::Check => run_check(),
    }
}

fn parse_scope(scope: &str) -> Result<ConfigScope> {
    match scope {
        "global" => Ok(ConfigScope::Global),
        "shared" => Ok(ConfigScope::PerProjectShared),
        "local" => Ok(ConfigScope::PerProjectLocal),
        other => anyhow::bail!("Unknown scope '{}' (expected global, shared, or local)", other),
    }
}

fn run_show(scope: Option<String>, format: OutputFormat) -> Result<()> {
    let settings = match scope.as_deref() {
        Some(scope) => load_layer(parse_scope(scope)?)?,
        None => load_effective()?,
    };

    match format {
        OutputFormat::Table => {
            println!("scala first:    {}", settings.is_scala_first());
            println!("library level:  {}", settings.compiler_library_level());
            match settings.compiler_library() {
                Some(library) => println!("library name:   {}", library.name),
                None => println!("library name:   (not configured)"),
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}

/// Settings from a single layer, unmerged.
fn load_layer(scope: ConfigScope) -> Result<ProjectSettingsData> {
    let store = ConfigStore::from_scope(scope)?;
    let config = store.load()?;

    let entry = match scope {
        ConfigScope::PerProjectLocal => config
            .get_project_override(store.project_root())
            .map(|o| o.scala.clone())
            .unwrap_or_default(),
        _ => config.scala,
    };

    entry.to_settings()
}

/// Effective settings: global and project layers merged, with any
/// project-local override applied.
fn load_effective() -> Result<ProjectSettingsData> {
    let global_store = ConfigStore::from_scope(ConfigScope::Global)?;
    let project_store = ConfigStore::from_scope(ConfigScope::PerProjectShared)?;
    let project_root = project_store.project_root().to_path_buf();

    let merged = merge_configs(
        Some(global_store.load()?),
        Some(project_store.load()?),
        &project_root,
    )?;

    merged.scala.to_settings()
}

fn run_set(
    scala_first: Option<bool>,
    library_name: Option<String>,
    library_level: Option<String>,
    scope: &str,
) -> Result<()> {
    if scala_first.is_none() && library_name.is_none() && library_level.is_none() {
        anyhow::bail!(
            "Nothing to set: pass --scala-first, --library-name, or --library-level"
        );
    }

    // Validate the level before touching any file
    if let Some(level) = &library_level {
        level.parse::<LibraryLevel>()?;
    }

    let scope = parse_scope(scope)?;
    let store = ConfigStore::from_scope(scope)?;
    let mut config = store.load()?;

    let entry = match scope {
        ConfigScope::PerProjectLocal => {
            let key = store.project_root().to_string_lossy().to_string();
            let project_root = store.project_root().to_path_buf();
            &mut config
                .projects
                .entry(key)
                .or_insert_with(|| ProjectOverride {
                    path: project_root,
                    ..Default::default()
                })
                .scala
        }
        _ => &mut config.scala,
    };

    if scala_first.is_some() {
        entry.scala_first = scala_first;
    }
    if library_name.is_some() {
        entry.library_name = library_name;
    }
    if library_level.is_some() {
        entry.library_level = library_level;
    }

    store.save(&config)?;
    tracing::info!(path = %store.config_path().display(), "updated settings");
    println!("Updated {}", store.config_path().display());

    Ok(())
}

fn run_check() -> Result<()> {
    let mut failures = 0;

    for (label, scope) in [
        ("global", ConfigScope::Global),
        ("shared", ConfigScope::PerProjectShared),
    ] {
        let store = ConfigStore::from_scope(scope)?;
        // load() parses and validates the layer
        match store.load() {
            Ok(_) => println!("ok    {} ({})", label, store.config_path().display()),
            Err(err) => {
                failures += 1;
                println!("error {} ({})", label, store.config_path().display());
                eprintln!("{:#}", err);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} configuration layer(s) failed validation", failures);
    }

    Ok(())
}
