//! Config file schema.
//!
//! Every section uses serde defaults so a partial `themegen.toml` (or no
//! file at all) resolves to the conventional project layout.

use serde::Deserialize;

/// Default token document location, relative to the project root.
pub const DEFAULT_TOKENS_PATH: &str = "styles/tokens.json";
/// Default QML singleton location, relative to the project root.
pub const DEFAULT_QML_PATH: &str = "app/qml/Theme.qml";
/// Default stylesheet location, relative to the project root.
pub const DEFAULT_CSS_PATH: &str = "styles/theme.css";
/// Command named in the provenance header of generated files.
pub const DEFAULT_REGENERATE_COMMAND: &str = "themegen";

/// Root of `themegen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemegenConfig {
    pub paths: PathsConfig,
    pub header: HeaderConfig,
}

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Token document (JSON).
    pub tokens: String,
    /// Generated QML singleton.
    pub qml: String,
    /// Generated CSS custom-properties stylesheet.
    pub css: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_TOKENS_PATH.into(),
            qml: DEFAULT_QML_PATH.into(),
            css: DEFAULT_CSS_PATH.into(),
        }
    }
}

/// Provenance header written at the top of each generated file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub command: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_REGENERATE_COMMAND.into(),
        }
    }
}
