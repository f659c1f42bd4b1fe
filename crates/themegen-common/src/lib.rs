//! Shared types for the theme generator crates.

pub mod errors;

pub use errors::{ConfigError, ThemeGenError, TokenError};
