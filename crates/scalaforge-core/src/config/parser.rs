//! TOML parser with helpful error messages

use std::path::Path;

use anyhow::{Context, Result};

use super::schema::ForgeConfig;

/// Parse scalaforge.toml with detailed error messages
pub fn parse_forge_toml(path: &Path) -> Result<ForgeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_forge_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse scalaforge.toml content from string
pub fn parse_forge_toml_str(content: &str) -> Result<ForgeConfig> {
    let config: ForgeConfig =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    // Validate configuration
    config.validate()?;

    Ok(config)
}

/// Enhance TOML parsing errors with helpful context
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let error_msg = error.to_string();

    // Try to extract line number from error message
    let line_hint = error_msg
        .lines()
        .find(|line| line.contains("line "))
        .and_then(|line| {
            line.split("line ")
                .nth(1)
                .and_then(|s| s.split_whitespace().next())
                .and_then(|s| s.parse::<usize>().ok())
        });

    if let Some(line_num) = line_hint {
        let context = get_line_context(content, line_num);
        anyhow::anyhow!(
            "TOML parsing error at line {}:\n{}\n\nError: {}",
            line_num,
            context,
            error_msg
        )
    } else {
        anyhow::anyhow!("TOML parsing error: {}", error_msg)
    }
}

/// Get context lines around an error
fn get_line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = line_num.saturating_sub(2);
    let end = (line_num + 2).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize a configuration to TOML string
pub fn to_toml(config: &ForgeConfig) -> Result<String> {
    toml::to_string_pretty(config)
        .with_context(|| "Failed to serialize configuration to TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_valid_config() {
        let toml = r#"
[scala]
scala_first = true
library_level = "project"
library_name = "scala-compiler-2.13"
"#;

        let config = parse_forge_toml_str(toml).unwrap();
        assert_eq!(config.scala.scala_first, Some(true));
        assert_eq!(config.scala.library_level.as_deref(), Some("project"));
        assert_eq!(
            config.scala.library_name.as_deref(),
            Some("scala-compiler-2.13")
        );
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_forge_toml_str("").unwrap();
        assert_eq!(config.scala, crate::config::ScalaEntry::default());
        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let toml = r#"
[scala
scala_first = true
"#; // Missing closing bracket

        let result = parse_forge_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_library_level() {
        let toml = r#"
[scala]
library_level = "application"
library_name = "scala-compiler-2.13"
"#;

        let err = parse_forge_toml_str(toml).unwrap_err().to_string();
        assert!(err.contains("application"));
    }

    #[test]
    fn test_parse_config_with_projects() {
        let toml = r#"
[scala]
scala_first = false

[projects."/Users/test/project".scala]
scala_first = true
library_level = "module"
"#;

        let config = parse_forge_toml_str(toml).unwrap();
        assert!(config.is_global());
        assert_eq!(config.projects.len(), 1);

        let project = &config.projects["/Users/test/project"];
        assert_eq!(project.scala.scala_first, Some(true));
        assert_eq!(project.scala.library_level.as_deref(), Some("module"));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let mut original = ForgeConfig::new();
        original.scala = crate::config::ScalaEntry {
            scala_first: Some(true),
            library_level: Some("global".to_string()),
            library_name: Some("scala-sdk-3".to_string()),
        };

        let toml_str = to_toml(&original).unwrap();
        let parsed = parse_forge_toml_str(&toml_str).unwrap();

        assert_eq!(parsed.scala, original.scala);
    }

    #[test]
    fn test_unset_fields_are_not_serialized() {
        let toml_str = to_toml(&ForgeConfig::new()).unwrap();
        assert!(!toml_str.contains("scala_first"));
        assert!(!toml_str.contains("library_level"));
        assert!(!toml_str.contains("library_name"));
    }

    #[test]
    fn test_parse_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[scala]
library_name = "scala-compiler-2.13"
"#
        )
        .unwrap();

        let config = parse_forge_toml(temp_file.path()).unwrap();
        assert_eq!(
            config.scala.library_name.as_deref(),
            Some("scala-compiler-2.13")
        );
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = parse_forge_toml(Path::new("/nonexistent/path/scalaforge.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }

    #[test]
    fn test_enhance_toml_error() {
        let toml = "invalid = [unclosed";
        let result = parse_forge_toml_str(toml);
        assert!(result.is_err());

        let err = result.unwrap_err().to_string();
        // Error should mention line number
        assert!(err.contains("line ") || err.contains("TOML parsing error"));
    }
}
