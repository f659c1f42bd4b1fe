//! Design token document: model, loading, and naming helpers.
//!
//! The document is a JSON object with `colors`, `sizing` and `fonts`
//! sections. Key order inside each section is preserved and drives the
//! order of everything generated from it.

pub mod document;
pub mod loader;
pub mod naming;
pub mod value;

pub use document::{Section, SizeKind, TokenDocument, TokenSection};
pub use loader::{load_tokens, parse_tokens};
pub use naming::{camel_to_kebab, strip_em_suffix, EM_SUFFIX};
pub use value::render_value;
