//! Config validation.
//!
//! Collects every problem into a single `ConfigError` so one run reports
//! all of them. [`validate`] checks the file as written; collisions between
//! paths are only meaningful once they are resolved against the project
//! root, so [`validate_resolved`] checks those.

use crate::paths::ResolvedPaths;
use crate::schema::ThemegenConfig;
use themegen_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ThemegenConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_paths(&mut errors, config);
    validate_header(&mut errors, config);

    finish(errors)
}

/// Reject resolved paths where one output would clobber another file.
pub fn validate_resolved(paths: &ResolvedPaths) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if paths.qml == paths.css {
        errors.push(format!(
            "paths.qml and paths.css both point to '{}'",
            paths.qml.display()
        ));
    }
    if paths.tokens == paths.qml || paths.tokens == paths.css {
        errors.push(format!(
            "output path would overwrite the token file '{}'",
            paths.tokens.display()
        ));
    }

    finish(errors)
}

fn finish(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_paths(errors: &mut Vec<String>, config: &ThemegenConfig) {
    let paths = &config.paths;
    let entries = [
        ("paths.tokens", &paths.tokens),
        ("paths.qml", &paths.qml),
        ("paths.css", &paths.css),
    ];

    for (name, value) in entries {
        if value.trim().is_empty() {
            errors.push(format!("{name} is empty"));
        }
    }

    // The token path is named in the header of both outputs.
    validate_comment_text(errors, "paths.tokens", &paths.tokens);
}

fn validate_header(errors: &mut Vec<String>, config: &ThemegenConfig) {
    let command = &config.header.command;
    if command.trim().is_empty() {
        errors.push("header.command is empty".into());
    }
    validate_comment_text(errors, "header.command", command);
}

/// Text embedded in a single-line `//` or `/* */` header comment.
fn validate_comment_text(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.contains('\n') || value.contains('\r') || value.contains("*/") {
        errors.push(format!("{name} {value:?} cannot be embedded in a comment"));
    }
}
