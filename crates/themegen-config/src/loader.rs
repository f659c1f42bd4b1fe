//! TOML config loading.

use crate::paths::default_config_path;
use crate::schema::ThemegenConfig;
use crate::validation;
use std::path::Path;
use themegen_common::ConfigError;
use tracing::{debug, info};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Unlike the token document, an
/// invalid config is an error: a bad output path could overwrite the wrong
/// file.
pub fn load_from_path(path: &Path) -> Result<ThemegenConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ThemegenConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `themegen.toml` from the project root, or fall back to defaults
/// when the root has none.
pub fn load_for_root(root: &Path) -> Result<ThemegenConfig, ConfigError> {
    let path = default_config_path(root);
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(ThemegenConfig::default());
    }
    load_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themegen.toml");
        std::fs::write(
            &path,
            r#"
[paths]
qml = "ui/Theme.qml"

[header]
command = "cargo run -p themegen-cli"
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.paths.qml, "ui/Theme.qml");
        assert_eq!(config.header.command, "cargo run -p themegen-cli");
        // Defaults preserved
        assert_eq!(config.paths.tokens, "styles/tokens.json");
        assert_eq!(config.paths.css, "styles/theme.css");
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themegen.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_invalid_values_returns_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themegen.toml");
        std::fs::write(
            &path,
            r#"
[paths]
qml = ""

[header]
command = "themegen */"
"#,
        )
        .unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn root_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_for_root(dir.path()).unwrap();
        assert_eq!(config, ThemegenConfig::default());
    }

    #[test]
    fn root_with_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("themegen.toml"),
            "[paths]\ntokens = \"design/tokens.json\"\n",
        )
        .unwrap();

        let config = load_for_root(dir.path()).unwrap();
        assert_eq!(config.paths.tokens, "design/tokens.json");
    }
}
