//! Directory-backed menu library.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use menu_core::MenuLibrary;
use tracing::info;

use crate::loaders::{LoadResult, MenuFileLoader};

/// Loads every menu file in a directory.
///
/// # Directory Structure
///
/// ```text
/// menus/
/// ├── tutorial.ron
/// └── shop.toml
/// ```
///
/// Each file is registered under its file stem, so `menus/shop.toml` starts
/// with `MenuSource::path("shop")`.
pub struct ContentLibrary {
    menu_dir: PathBuf,
}

impl ContentLibrary {
    pub fn new(menu_dir: impl Into<PathBuf>) -> Self {
        Self {
            menu_dir: menu_dir.into(),
        }
    }

    /// Shorthand for `ContentLibrary::new(dir).load()`.
    pub fn from_dir<C: 'static>(menu_dir: impl Into<PathBuf>) -> LoadResult<MenuLibrary<C>> {
        Self::new(menu_dir).load()
    }

    /// Menu files in the directory, sorted by name.
    pub fn menu_files(&self) -> LoadResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.menu_dir).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read menu directory {}: {}",
                self.menu_dir.display(),
                e
            )
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && MenuFileLoader::is_menu_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Builds a library with one module per menu file.
    pub fn load<C: 'static>(&self) -> LoadResult<MenuLibrary<C>> {
        let mut library = MenuLibrary::new();
        for path in self.menu_files()? {
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let menu = MenuFileLoader::load_menu(&path)?;
            library.register(stem, Arc::new(menu));
        }

        info!(
            target: "menu::content",
            dir = %self.menu_dir.display(),
            menus = library.paths().count(),
            "Loaded menu library"
        );
        Ok(library)
    }

    pub fn menu_dir(&self) -> &Path {
        &self.menu_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Nobody;

    #[test]
    fn test_registers_files_by_stem() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("tutorial.ron"),
            r#"(nodes: [(name: "start", text: "Hi")])"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("shop.toml"),
            "[[nodes]]\nname = \"start\"\ntext = \"Buy?\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "not a menu").unwrap();

        let library = ContentLibrary::from_dir::<Nobody>(dir.path()).unwrap();
        let mut paths: Vec<_> = library.paths().collect();
        paths.sort_unstable();

        assert_eq!(paths, vec!["shop", "tutorial"]);
        assert!(library.load("shop").unwrap().contains("start"));
    }

    #[test]
    fn test_broken_file_fails_the_whole_library() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.ron"), "(nodes: [").unwrap();

        assert!(ContentLibrary::from_dir::<Nobody>(dir.path()).is_err());
    }
}
