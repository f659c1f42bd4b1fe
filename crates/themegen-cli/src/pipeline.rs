//! Load → generate → write.

use std::path::Path;
use themegen_codegen::{generate_css, generate_qml, write_artifact, Provenance};
use themegen_common::ThemeGenError;
use themegen_config::{
    load_for_root, load_from_path, resolve_paths, validate_resolved, ResolvedPaths,
};
use themegen_tokens::load_tokens;

/// Run one generation pass for the project at `root`.
///
/// Both artifacts are rendered from a single parse before anything is
/// written, so a bad token file leaves existing outputs untouched. The
/// writes themselves are independent: if the second fails, the first stays.
pub fn run(root: &Path, config_path: Option<&Path>) -> Result<ResolvedPaths, ThemeGenError> {
    let config = match config_path {
        Some(path) => load_from_path(path)?,
        None => load_for_root(root)?,
    };
    let paths = resolve_paths(root, &config.paths);
    validate_resolved(&paths)?;

    println!("Reading tokens from: {}", paths.tokens.display());
    let document = load_tokens(&paths.tokens)?;

    let provenance = Provenance::new(config.paths.tokens.as_str(), config.header.command.as_str());
    let qml = generate_qml(&document, &provenance);
    let css = generate_css(&document, &provenance);

    write_artifact(&paths.qml, &qml)?;
    println!("Generated: {}", paths.qml.display());

    write_artifact(&paths.css, &css)?;
    println!("Generated: {}", paths.css.display());

    println!("Done!");
    Ok(paths)
}
