//! Command binding handed to the host's dispatcher.
//!
//! While a menu is active the caller carries a [`MenuCmdSet`] holding a single
//! [`MenuCommand`]. The command is keyed `look` and aliased to the host's
//! no-match and no-input sentinels, so every line the player types ends up in
//! [`SessionRegistry::handle_input`].

use strum::{Display, EnumString};

use crate::error::Result;
use crate::host::Caller;
use crate::registry::SessionRegistry;
use crate::session::DispatchOutcome;

/// Sentinel command name the host uses when no command matched.
pub const CMD_NOMATCH: &str = "__nomatch_command";
/// Sentinel command name the host uses for an empty line.
pub const CMD_NOINPUT: &str = "__noinput_command";

pub const MENU_CMDSET_KEY: &str = "menu_cmdset";
pub const DEFAULT_CMDSET_PRIORITY: i32 = 1;

/// How the menu command set combines with the caller's normal commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MergeType {
    /// Menu commands are exclusive while the menu is open.
    #[default]
    Replace,
    /// Menu commands are merged with the caller's existing commands.
    Union,
}

/// The single intercepting command of a menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuCommand {
    pub key: &'static str,
    pub aliases: Vec<&'static str>,
    pub locks: &'static str,
    pub help_category: &'static str,
}

impl Default for MenuCommand {
    fn default() -> Self {
        Self {
            key: "look",
            aliases: vec!["l", CMD_NOMATCH, CMD_NOINPUT],
            locks: "cmd:all()",
            help_category: "Menu",
        }
    }
}

impl MenuCommand {
    /// Returns true if `name` is the command key or one of its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.key == name || self.aliases.contains(&name)
    }

    /// Command body: hands the raw line to the caller's menu session.
    pub fn func<C: Caller>(
        &self,
        registry: &mut SessionRegistry<C>,
        caller: &mut C,
        raw_string: &str,
    ) -> Result<DispatchOutcome> {
        registry.handle_input(caller, raw_string)
    }
}

/// Command set attached to a caller for the lifetime of a menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuCmdSet {
    pub key: &'static str,
    pub merge_type: MergeType,
    pub priority: i32,
    pub no_objs: bool,
    pub no_exits: bool,
    pub no_channels: bool,
    pub commands: Vec<MenuCommand>,
}

impl MenuCmdSet {
    pub fn new(merge_type: MergeType, priority: i32) -> Self {
        Self {
            key: MENU_CMDSET_KEY,
            merge_type,
            priority,
            no_objs: true,
            no_exits: true,
            no_channels: false,
            commands: vec![MenuCommand::default()],
        }
    }

    /// Resolves a raw input line the way a host dispatcher would.
    ///
    /// Empty lines go to the no-input sentinel, lines whose first word names a
    /// command go to that command, everything else to the no-match sentinel.
    pub fn resolve(&self, raw_string: &str) -> Option<&MenuCommand> {
        let trimmed = raw_string.trim();
        let name = if trimmed.is_empty() {
            CMD_NOINPUT.to_string()
        } else {
            let word = trimmed
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_lowercase();
            if self.commands.iter().any(|cmd| cmd.answers_to(&word)) {
                word
            } else {
                CMD_NOMATCH.to_string()
            }
        };

        self.commands.iter().find(|cmd| cmd.answers_to(&name))
    }
}

impl Default for MenuCmdSet {
    fn default() -> Self {
        Self::new(MergeType::default(), DEFAULT_CMDSET_PRIORITY)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn merge_type_parses_case_insensitively() {
        assert_eq!(MergeType::from_str("replace").unwrap(), MergeType::Replace);
        assert_eq!(MergeType::from_str("UNION").unwrap(), MergeType::Union);
        assert!(MergeType::from_str("intersect").is_err());
        assert_eq!(MergeType::Union.to_string(), "Union");
    }

    #[test]
    fn cmdset_routes_every_line_to_the_menu_command() {
        let cmdset = MenuCmdSet::default();

        for line in ["", "   ", "look", "L", "1", "quit", "anything at all"] {
            let cmd = cmdset.resolve(line).expect("menu command intercepts all input");
            assert_eq!(cmd.key, "look");
        }
    }

    #[test]
    fn default_cmdset_is_exclusive() {
        let cmdset = MenuCmdSet::default();
        assert_eq!(cmdset.key, MENU_CMDSET_KEY);
        assert_eq!(cmdset.merge_type, MergeType::Replace);
        assert_eq!(cmdset.priority, 1);
        assert!(cmdset.no_objs && cmdset.no_exits && !cmdset.no_channels);
    }
}
