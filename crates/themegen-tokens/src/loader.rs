//! Token file loading.

use crate::document::{Section, TokenDocument};
use serde_json::Value;
use std::path::Path;
use themegen_common::TokenError;
use tracing::{debug, info, warn};

/// Parse a token document from JSON text.
///
/// Only structure is checked: the root and each present section must be
/// JSON objects. Token values are not validated.
pub fn parse_tokens(content: &str) -> Result<TokenDocument, serde_json::Error> {
    // Serde also maps a JSON array onto struct fields by position.
    let root: Value = serde_json::from_str(content)?;
    if !root.is_object() {
        return Err(serde::de::Error::custom(format!(
            "token document root must be an object, found {}",
            kind_of(&root)
        )));
    }
    serde_json::from_value(root)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read and parse the token document at `path`.
///
/// An absent section is logged and treated as empty rather than rejected.
pub fn load_tokens(path: &Path) -> Result<TokenDocument, TokenError> {
    let content = std::fs::read_to_string(path).map_err(|source| TokenError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_tokens(&content).map_err(|source| TokenError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for section in document.missing_sections() {
        warn!(
            section = section.key(),
            "token section missing from {}, emitting no constants for it",
            path.display()
        );
    }
    if document.is_empty() {
        warn!("{} contains no tokens, generated files will be empty", path.display());
    }
    for section in Section::ALL {
        debug!(section = section.key(), count = document.len(section), "token section");
    }

    info!("loaded tokens from {}", path.display());
    Ok(document)
}
