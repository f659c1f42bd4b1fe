//! Writing generated files to disk.

use crate::artifact::Artifact;
use std::path::Path;
use themegen_common::ThemeGenError;
use tracing::info;

/// Overwrite `path` with the rendered artifact.
///
/// The parent directory must already exist; it is never created.
pub fn write_artifact(path: &Path, artifact: &Artifact) -> Result<(), ThemeGenError> {
    let content = artifact.render();

    std::fs::write(path, &content).map_err(|source| ThemeGenError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        kind = %artifact.kind(),
        bytes = content.len(),
        "wrote {}",
        path.display()
    );
    Ok(())
}
