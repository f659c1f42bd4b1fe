//! Textual rendering of token values.
//!
//! Values are written the way they read in the token file: strings without
//! quotes, integral numbers without a fractional part, floats as JavaScript
//! prints them.

use serde_json::Value;

/// Render a token value as the text that goes into a generated file.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map_or_else(|| n.to_string(), render_float)
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".into(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Format a float the way JavaScript's `Number.prototype.toString` does:
/// positional for magnitudes in `[1e-6, 1e21)`, exponent form (`1e+21`,
/// `1e-7`) outside that window.
fn render_float(f: f64) -> String {
    if f == 0.0 {
        return "0".into();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        // `1.0` in the token file is the number one; `{}` prints it as `1`.
        return format!("{f}");
    }

    // `{:e}` gives `1.5e21` / `1e-7`; JS writes a sign on positive exponents.
    let formatted = format!("{f:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
