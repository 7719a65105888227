//! Menu configuration and environment loading.

use std::env;

use crate::command::{DEFAULT_CMDSET_PRIORITY, MergeType};

/// Default terminal width used when laying out option tables.
pub const DEFAULT_TEXT_WIDTH: usize = 78;
pub const DEFAULT_START_NODE: &str = "start";

/// Per-menu settings fixed when the session starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    /// Node entered when the menu starts.
    pub start_node: String,
    /// Whether `quit`/`q`/`exit` leave the menu at any node.
    pub allow_quit: bool,
    pub cmdset_merge_type: MergeType,
    pub cmdset_priority: i32,
    /// Width budget for the option table.
    pub text_width: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            start_node: DEFAULT_START_NODE.to_string(),
            allow_quit: true,
            cmdset_merge_type: MergeType::default(),
            cmdset_priority: DEFAULT_CMDSET_PRIORITY,
            text_width: DEFAULT_TEXT_WIDTH,
        }
    }
}

impl MenuConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MENU_START_NODE` - Start node name (default: start)
    /// - `MENU_ALLOW_QUIT` - Allow leaving the menu with quit (default: true)
    /// - `MENU_CMDSET_MERGETYPE` - `Replace` or `Union` (default: Replace)
    /// - `MENU_CMDSET_PRIORITY` - Command set merge priority (default: 1)
    /// - `CLIENT_DEFAULT_WIDTH` - Terminal width budget (default: 78)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(node) = env::var("MENU_START_NODE") {
            let node = node.trim();
            if !node.is_empty() {
                config.start_node = node.to_string();
            }
        }

        if let Some(allow) = read_env_bool("MENU_ALLOW_QUIT") {
            config.allow_quit = allow;
        }

        if let Ok(raw) = env::var("MENU_CMDSET_MERGETYPE") {
            match raw.trim().parse::<MergeType>() {
                Ok(merge_type) => config.cmdset_merge_type = merge_type,
                Err(_) => tracing::warn!(
                    target: "menu::config",
                    value = %raw,
                    "Unknown cmdset merge type, keeping {}",
                    config.cmdset_merge_type
                ),
            }
        }

        if let Some(priority) = read_env::<i32>("MENU_CMDSET_PRIORITY") {
            config.cmdset_priority = priority;
        }

        if let Some(width) = read_env::<usize>("CLIENT_DEFAULT_WIDTH") {
            config.text_width = width.max(1);
        }

        config
    }

    pub fn with_start_node(mut self, node: impl Into<String>) -> Self {
        self.start_node = node.into();
        self
    }

    pub fn with_allow_quit(mut self, allow_quit: bool) -> Self {
        self.allow_quit = allow_quit;
        self
    }

    pub fn with_cmdset(mut self, merge_type: MergeType, priority: i32) -> Self {
        self.cmdset_merge_type = merge_type;
        self.cmdset_priority = priority;
        self
    }

    pub fn with_text_width(mut self, width: usize) -> Self {
        self.text_width = width.max(1);
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
