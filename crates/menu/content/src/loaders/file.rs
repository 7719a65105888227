//! Menu file loader.

use std::path::Path;

use tracing::debug;

use crate::data::DataMenu;
use crate::format::MenuFile;
use crate::loaders::{LoadResult, read_file};

/// Loader for menu files in RON (`.ron`) or TOML (`.toml`) form.
pub struct MenuFileLoader;

impl MenuFileLoader {
    /// Extensions the loader understands.
    pub const EXTENSIONS: [&'static str; 2] = ["ron", "toml"];

    /// Load a menu file, choosing the parser by extension.
    pub fn load(path: &Path) -> LoadResult<MenuFile> {
        let content = read_file(path)?;
        let file = match extension(path).as_deref() {
            Some("ron") => Self::parse_ron(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse menu RON {}: {}", path.display(), e))?,
            Some("toml") => Self::parse_toml(&content).map_err(|e| {
                anyhow::anyhow!("Failed to parse menu TOML {}: {}", path.display(), e)
            })?,
            _ => anyhow::bail!("Unsupported menu file {}: expected .ron or .toml", path.display()),
        };

        debug!(
            target: "menu::content",
            path = %path.display(),
            nodes = file.nodes.len(),
            "Loaded menu file"
        );
        Ok(file)
    }

    /// Load a menu file straight into a menu module.
    pub fn load_menu(path: &Path) -> LoadResult<DataMenu> {
        Self::load(path).map(DataMenu::new)
    }

    pub fn parse_ron(content: &str) -> LoadResult<MenuFile> {
        Ok(ron::from_str(content)?)
    }

    pub fn parse_toml(content: &str) -> LoadResult<MenuFile> {
        Ok(toml::from_str(content)?)
    }

    /// Returns true if `path` has a menu file extension.
    pub fn is_menu_file(path: &Path) -> bool {
        extension(path).is_some_and(|ext| Self::EXTENSIONS.contains(&ext.as_str()))
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}
