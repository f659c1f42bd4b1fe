//! CSS custom-properties generation.
//!
//! Mirrors the QML layout inside a `:root` block. Names are converted to
//! kebab-case and prefixed per section; em-based sizes get a literal `em`
//! unit since the token holds a unitless multiplier.

use crate::artifact::{Artifact, ArtifactKind, Provenance};
use crate::lint::check_css_value;
use themegen_tokens::{camel_to_kebab, render_value, Section, SizeKind, TokenDocument};

const INDENT: &str = "    ";

// =============================================================================
// GENERATION
// =============================================================================

/// Generate the `:root` stylesheet for a token document.
pub fn generate_css(document: &TokenDocument, provenance: &Provenance) -> Artifact {
    let mut lines = vec![
        format!(
            "/* Auto-generated from {} - do not edit directly */",
            provenance.source
        ),
        format!("/* Run: {} */", provenance.command),
        String::new(),
        ":root {".to_string(),
        format!("{INDENT}/* Colors */"),
    ];

    for (name, value) in document.entries(Section::Colors) {
        let name = format!("--color-{}", camel_to_kebab(name));
        lines.push(declaration(&name, &render_value(value)));
    }

    lines.push(String::new());
    lines.push(format!("{INDENT}/* Sizes (em-based) */"));

    for (name, value) in document.entries(Section::Sizing) {
        let value = render_value(value);
        let line = match SizeKind::of(name) {
            SizeKind::Em { base } => {
                declaration(&format!("--{}", camel_to_kebab(base)), &format!("{value}em"))
            }
            SizeKind::Absolute => declaration(&format!("--{}", camel_to_kebab(name)), &value),
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!("{INDENT}/* Fonts */"));

    for (name, value) in document.entries(Section::Fonts) {
        let name = format!("--font-{}", camel_to_kebab(name));
        lines.push(declaration(&name, &render_value(value)));
    }

    lines.push("}".to_string());

    Artifact::new(ArtifactKind::Css, lines)
}

// =============================================================================
// HELPERS
// =============================================================================

fn declaration(name: &str, value: &str) -> String {
    if let Err(e) = check_css_value(value) {
        tracing::warn!(name, value, error = %e, "CSS value may break the stylesheet");
    }
    format!("{INDENT}{name}: {value};")
}

// =============================================================================
// TESTS
// =============================================================================
