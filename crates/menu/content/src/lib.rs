//! Data-driven menu definitions.
//!
//! Menus authored as data rather than code:
//! - [`MenuFile`]: nodes, their text, help and options (serde types)
//! - [`DataMenu`]: a [`menu_core::MenuModule`] built from a menu file
//! - RON/TOML loaders and a directory-backed [`ContentLibrary`]
//!
//! Data nodes only move between nodes; logic that touches the caller still
//! belongs in code modules.

pub mod data;
pub mod format;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use data::{DataMenu, INPUT_PLACEHOLDER};
pub use format::{MenuFile, NodeData, OptionData};

#[cfg(feature = "loaders")]
pub use loaders::{ContentLibrary, LoadResult, MenuFileLoader};
