//! QML singleton generation.
//!
//! Emits a `pragma Singleton` `QtObject` with one readonly property per
//! token. Em-based sizes are written as `em * <multiplier>` so the QML
//! engine derives pixels from the single `em` base property.

use crate::artifact::{Artifact, ArtifactKind, Provenance};
use themegen_tokens::{render_value, Section, SizeKind, TokenDocument};

/// Pixels per em. 16px is the standard browser default.
pub const EM_BASE_PX: u32 = 16;

const INDENT: &str = "    ";

// =============================================================================
// GENERATION
// =============================================================================

/// Generate the QML theme singleton for a token document.
pub fn generate_qml(document: &TokenDocument, provenance: &Provenance) -> Artifact {
    let mut lines = vec![
        format!(
            "// Auto-generated from {} - do not edit directly",
            provenance.source
        ),
        format!("// Run: {}", provenance.command),
        "pragma Singleton".to_string(),
        "import QtQuick".to_string(),
        String::new(),
        "QtObject {".to_string(),
        format!("{INDENT}id: theme"),
        String::new(),
        format!("{INDENT}// Base unit (1em equivalent) - {EM_BASE_PX}px is standard browser default"),
        format!("{INDENT}readonly property real em: {EM_BASE_PX}"),
        String::new(),
        format!("{INDENT}// Colors"),
    ];

    for (name, value) in document.entries(Section::Colors) {
        lines.push(property("color", name, &quote(&render_value(value))));
    }

    lines.push(String::new());
    lines.push(format!("{INDENT}// Sizes (em-based)"));

    for (name, value) in document.entries(Section::Sizing) {
        let value = render_value(value);
        let line = match SizeKind::of(name) {
            SizeKind::Em { base } => property("real", base, &format!("em * {value}")),
            SizeKind::Absolute => property("real", name, &value),
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!("{INDENT}// Fonts"));

    for (name, value) in document.entries(Section::Fonts) {
        lines.push(property("string", name, &quote(&render_value(value))));
    }

    lines.push("}".to_string());

    Artifact::new(ArtifactKind::Qml, lines)
}

// =============================================================================
// HELPERS
// =============================================================================

fn property(ty: &str, name: &str, value: &str) -> String {
    format!("{INDENT}readonly property {ty} {name}: {value}")
}

/// Quote a value as a QML (JavaScript) string literal.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use themegen_tokens::parse_tokens;

    fn provenance() -> Provenance {
        Provenance::new("styles/tokens.json", "themegen")
    }

    fn generate(json: &str) -> String {
        generate_qml(&parse_tokens(json).unwrap(), &provenance()).render()
    }

    #[test]
    fn full_document_layout() {
        let qml = generate(
            r##"{"colors":{"primaryColor":"#112233"},"sizing":{"spacingEm":0.5,"borderWidth":2},"fonts":{"bodyFont":"Inter"}}"##,
        );
        let expected = r##"// Auto-generated from styles/tokens.json - do not edit directly
// Run: themegen
pragma Singleton
import QtQuick

QtObject {
    id: theme

    // Base unit (1em equivalent) - 16px is standard browser default
    readonly property real em: 16

    // Colors
    readonly property color primaryColor: "#112233"

    // Sizes (em-based)
    readonly property real spacing: em * 0.5
    readonly property real borderWidth: 2

    // Fonts
    readonly property string bodyFont: "Inter"
}
"##;
        assert_eq!(qml, expected);
    }

    #[test]
    fn header_uses_provenance() {
        let artifact = generate_qml(
            &TokenDocument::default(),
            &Provenance::new("design/tokens.json", "cargo run -p themegen-cli"),
        );
        assert_eq!(
            artifact.lines()[0],
            "// Auto-generated from design/tokens.json - do not edit directly"
        );
        assert_eq!(artifact.lines()[1], "// Run: cargo run -p themegen-cli");
        assert_eq!(artifact.kind(), ArtifactKind::Qml);
    }

    #[test]
    fn one_property_per_token() {
        let qml = generate(
            r##"{
  "colors": {"a": "#000", "b": "#111", "c": "#222"},
  "sizing": {"xEm": 1, "y": 3},
  "fonts": {"body": "Inter", "mono": "Menlo"}
}"##,
        );
        assert_eq!(qml.matches("readonly property color ").count(), 3);
        // `em` itself plus the two sizing tokens
        assert_eq!(qml.matches("readonly property real ").count(), 3);
        assert_eq!(qml.matches("readonly property string ").count(), 2);
    }

    #[test]
    fn em_sizes_multiply_base_unit() {
        let qml = generate(r#"{"sizing": {"radiusEm": 0.25, "lineHeightEm": 1.5}}"#);
        assert!(qml.contains("    readonly property real radius: em * 0.25\n"));
        assert!(qml.contains("    readonly property real lineHeight: em * 1.5\n"));
    }

    #[test]
    fn absolute_sizes_are_unchanged() {
        let qml = generate(r#"{"sizing": {"borderWidth": 1.0, "maxWidth": 1200}}"#);
        assert!(qml.contains("readonly property real borderWidth: 1\n"));
        assert!(qml.contains("readonly property real maxWidth: 1200\n"));
        assert!(!qml.contains("em * 1200"));
    }

    #[test]
    fn bare_em_key_is_absolute() {
        let qml = generate(r#"{"sizing": {"Em": 2}}"#);
        assert!(qml.contains("readonly property real Em: 2\n"));
    }

    #[test]
    fn missing_fonts_section_emits_no_fonts() {
        let qml = generate(r##"{"colors": {"primary": "#fff"}, "sizing": {}}"##);
        assert_eq!(qml.matches("property string").count(), 0);
        assert!(qml.contains("    // Fonts\n}\n"));
    }

    #[test]
    fn order_follows_document() {
        let qml = generate(r##"{"colors": {"zeta": "#000", "alpha": "#fff"}}"##);
        let zeta = qml.find("zeta").unwrap();
        let alpha = qml.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn string_values_are_escaped() {
        let qml = generate(r#"{"fonts": {"display": "\"Fira Sans\", sans\\serif"}}"#);
        assert!(qml.contains(r#"readonly property string display: "\"Fira Sans\", sans\\serif""#));
    }

    #[test]
    fn generation_is_deterministic() {
        let json = r##"{"colors":{"a":"#000","b":"#fff"},"sizing":{"gapEm":0.75},"fonts":{"ui":"Inter"}}"##;
        assert_eq!(generate(json), generate(json));
    }

    #[test]
    fn empty_document_still_has_structure() {
        let qml = generate("{}");
        assert!(qml.starts_with("// Auto-generated"));
        assert!(qml.contains("pragma Singleton\n"));
        assert!(qml.contains("readonly property real em: 16\n"));
        assert!(qml.ends_with("}\n"));
    }
}
