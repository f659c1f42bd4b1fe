//! Theme generator configuration.
//!
//! An optional `themegen.toml` in the project root overrides where the
//! token document is read from and where the generated files are written.
//! All sections use defaults, so a missing or partial file works.

pub mod loader;
pub mod paths;
pub mod schema;
pub mod validation;

pub use loader::{load_for_root, load_from_path};
pub use paths::{default_config_path, normalize, resolve_paths, ResolvedPaths, CONFIG_FILE_NAME};
pub use schema::{HeaderConfig, PathsConfig, ThemegenConfig};
pub use validation::{validate, validate_resolved};
