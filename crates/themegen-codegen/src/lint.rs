//! Structural checks on CSS values.
//!
//! Token values are emitted verbatim. These checks only flag characters
//! that would end the declaration or the `:root` block early, so the
//! caller can warn about a stylesheet that will not parse as intended.

/// Check a CSS value for characters that escape its declaration.
pub fn check_css_value(value: &str) -> Result<(), String> {
    for ch in [';', '{', '}', '<', '>'] {
        if value.contains(ch) {
            return Err(format!("value contains '{ch}'"));
        }
    }
    if value.trim().is_empty() {
        return Err("value is empty".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_values() {
        assert!(check_css_value("#112233").is_ok());
        assert!(check_css_value("rgba(0, 212, 255, 0.12)").is_ok());
        assert!(check_css_value("'Courier New', monospace").is_ok());
        assert!(check_css_value("0.5").is_ok());
    }

    #[test]
    fn flags_structural_characters() {
        assert!(check_css_value("red; background: url(x)").is_err());
        assert!(check_css_value("#fff } body { color: red").is_err());
        assert!(check_css_value("</style>").is_err());
    }

    #[test]
    fn flags_empty_value() {
        let err = check_css_value("  ").unwrap_err();
        assert_eq!(err, "value is empty");
    }
}
