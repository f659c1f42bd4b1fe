//! Generated file model.

use std::fmt;

/// Which encoding an artifact holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// QML singleton object.
    Qml,
    /// CSS custom-properties stylesheet.
    Css,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Qml => f.write_str("qml"),
            ArtifactKind::Css => f.write_str("css"),
        }
    }
}

/// Where a generated file came from, for its "do not edit" header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Token file as the user refers to it (e.g. `styles/tokens.json`).
    pub source: String,
    /// Command that regenerates the file.
    pub command: String,
}

impl Provenance {
    pub fn new(source: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            command: command.into(),
        }
    }
}

/// A complete generated file, as an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    kind: ArtifactKind,
    lines: Vec<String>,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// File contents: lines joined with `\n`, plus a trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_with_trailing_newline() {
        let artifact = Artifact::new(ArtifactKind::Css, vec![":root {".into(), "}".into()]);
        assert_eq!(artifact.render(), ":root {\n}\n");
    }

    #[test]
    fn render_keeps_blank_lines() {
        let artifact = Artifact::new(
            ArtifactKind::Qml,
            vec!["a".into(), String::new(), "b".into()],
        );
        assert_eq!(artifact.render(), "a\n\nb\n");
        assert_eq!(artifact.lines().len(), 3);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ArtifactKind::Qml.to_string(), "qml");
        assert_eq!(ArtifactKind::Css.to_string(), "css");
    }
}
