//! Tree-structured text menus for turn-based text games.
//!
//! `menu-core` runs node-graph menus for a host game. A menu is a set of named
//! node functions; each node returns its text and a list of options, and each
//! option names the node to move to and/or a callback to run. The engine keeps
//! one [`MenuSession`] per caller inside a [`SessionRegistry`], renders pages
//! with [`format_node`] and routes every line the player types through the
//! [`MenuCmdSet`] the host attaches while the menu is open.
//!
//! The host game plugs in by implementing [`Caller`].
pub mod command;
pub mod config;
pub mod definition;
pub mod error;
pub mod executor;
pub mod host;
pub mod layout;
pub mod messages;
pub mod node;
pub mod options;
pub mod registry;
pub mod session;

#[cfg(test)]
mod test_support;

pub use command::{
    CMD_NOINPUT, CMD_NOMATCH, DEFAULT_CMDSET_PRIORITY, MENU_CMDSET_KEY, MenuCmdSet, MenuCommand,
    MergeType,
};
pub use config::{DEFAULT_START_NODE, DEFAULT_TEXT_WIDTH, MenuConfig};
pub use definition::{MenuDefinition, MenuLibrary, MenuModule, MenuSource, NodeModule};
pub use error::{DefinitionLoadError, MenuError, Result};
pub use executor::NodeExecutor;
pub use host::Caller;
pub use layout::{LabelMarkup, PlainMarkup, format_node};
pub use node::{CallbackFn, Content, DEFAULT_KEY, Exec, NodeFn, NodeResult, OptionSpec};
pub use options::{NormalizedOptions, OptionEntry, OptionRow};
pub use registry::SessionRegistry;
pub use session::{DispatchOutcome, MenuSession};
