//! Code generation from a token document.
//!
//! Generators are pure functions from a [`TokenDocument`] to an
//! [`Artifact`]; only [`write_artifact`] touches the filesystem.
//!
//! [`TokenDocument`]: themegen_tokens::TokenDocument

mod artifact;
mod css;
mod lint;
mod qml;
mod writer;

pub use artifact::{Artifact, ArtifactKind, Provenance};
pub use css::generate_css;
pub use lint::check_css_value;
pub use qml::{generate_qml, EM_BASE_PX};
pub use writer::write_artifact;
