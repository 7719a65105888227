//! Loaders reading menu files from disk.
//!
//! Files are RON or TOML, picked by extension, and share the [`MenuFile`]
//! layout described in [`crate::format`].
//!
//! [`MenuFile`]: crate::MenuFile

pub mod file;
pub mod library;

pub use file::MenuFileLoader;
pub use library::ContentLibrary;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
