//! Contract between the menu engine and the hosting game.
//!
//! The engine never owns players or network sessions. It only needs an
//! identity to key sessions by, a messaging sink, the host's own "look"
//! primitive, and a way to attach and detach the menu command set.

use std::fmt;
use std::hash::Hash;

use crate::command::MenuCmdSet;

/// A player (or any object) that can be put into a menu.
///
/// Node functions receive `&mut Self`, so any state the host exposes on the
/// caller is reachable from menu content without the engine knowing about it.
pub trait Caller {
    type Id: Eq + Hash + Clone + fmt::Debug;

    fn id(&self) -> Self::Id;

    /// Delivers text to the player. Assumed never to fail observably.
    fn msg(&mut self, text: &str);

    /// Runs the host's default look after the menu has closed.
    fn look(&mut self);

    /// Merges the menu command set into the caller's commands.
    fn attach_cmdset(&mut self, cmdset: MenuCmdSet);

    /// Removes a previously attached command set by key.
    fn detach_cmdset(&mut self, key: &str);
}
