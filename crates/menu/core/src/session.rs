//! Per-caller menu state machine.
//!
//! A [`MenuSession`] tracks the node a caller is at: its rendered page, its
//! help text, the alias lookup table and the fallback entry. Transitions are
//! all-or-nothing: a node that is missing or fails leaves the session exactly
//! where it was.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::MenuConfig;
use crate::definition::MenuDefinition;
use crate::error::Result;
use crate::executor::NodeExecutor;
use crate::host::Caller;
use crate::layout::{self, LabelMarkup};
use crate::messages;
use crate::node::{Exec, NodeResult};
use crate::options::{self, OptionEntry};

/// Reserved word that redisplays the current node.
pub const LOOK_WORDS: [&str; 2] = ["look", "l"];
pub const HELP_WORDS: [&str; 2] = ["help", "h"];
pub const QUIT_WORDS: [&str; 3] = ["quit", "q", "exit"];

/// What the host should do after a line of input was dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The menu stays open.
    Continue,
    /// The menu ended; the session must be closed.
    Close,
}

pub struct MenuSession<C> {
    definition: Arc<MenuDefinition<C>>,
    markup: Arc<dyn LabelMarkup>,
    allow_quit: bool,
    text_width: usize,
    current_node: Option<String>,
    options: HashMap<String, OptionEntry<C>>,
    default: Option<OptionEntry<C>>,
    node_text: String,
    help_text: String,
}

impl<C: Caller> MenuSession<C> {
    /// Creates a session that has not entered any node yet.
    pub fn new(
        definition: Arc<MenuDefinition<C>>,
        config: &MenuConfig,
        markup: Arc<dyn LabelMarkup>,
    ) -> Self {
        Self {
            definition,
            markup,
            allow_quit: config.allow_quit,
            text_width: config.text_width,
            current_node: None,
            options: HashMap::new(),
            default: None,
            node_text: String::new(),
            help_text: String::new(),
        }
    }

    /// Moves to `node` and shows it to the caller.
    ///
    /// The node runs first; only when it succeeds are options, fallback, page
    /// and help replaced, so a failed transition changes nothing.
    pub fn goto(&mut self, caller: &mut C, node: &str, raw_input: &str) -> Result<()> {
        let NodeResult { content, options } =
            NodeExecutor::new(&self.definition).execute(caller, node, raw_input)?;

        let has_options = !options.is_empty();
        let normalized = options::normalize(options);
        let node_text = layout::format_node(
            content.text(),
            &normalized.rows,
            self.text_width,
            self.markup.as_ref(),
        );
        let help_text = content
            .help()
            .map(layout::text::normalize)
            .filter(|help| !help.is_empty())
            .unwrap_or_else(|| messages::default_help(has_options, self.allow_quit).to_string());

        self.current_node = Some(node.to_string());
        self.options = normalized.lookup;
        self.default = normalized.default;
        self.node_text = node_text;
        self.help_text = help_text;

        debug!(
            target: "menu::session",
            node,
            options = self.options.len(),
            has_default = self.default.is_some(),
            "Entered menu node"
        );

        caller.msg(&self.node_text);
        Ok(())
    }

    /// Runs an exec target for its side effects.
    pub fn callback(&self, caller: &mut C, exec: &Exec<C>, raw_input: &str) -> Result<()> {
        let origin = self.current_node.as_deref().unwrap_or_default();
        NodeExecutor::new(&self.definition).callback(caller, exec, raw_input, origin)
    }

    /// Handles one line of caller input.
    ///
    /// Option aliases win over the reserved words, which win over the
    /// fallback entry. A node without selectable options or fallback ends the
    /// menu once the line has been handled.
    pub fn dispatch(&mut self, caller: &mut C, raw_input: &str) -> Result<DispatchOutcome> {
        let cmd = raw_input.trim().to_lowercase();

        if let Some(entry) = self.options.get(&cmd).cloned() {
            self.select(caller, &entry, raw_input)?;
        } else if LOOK_WORDS.contains(&cmd.as_str()) {
            caller.msg(&self.node_text);
        } else if HELP_WORDS.contains(&cmd.as_str()) {
            caller.msg(&self.help_text);
        } else if self.allow_quit && QUIT_WORDS.contains(&cmd.as_str()) {
            info!(target: "menu::session", node = ?self.current_node, "Menu quit by caller");
            return Ok(DispatchOutcome::Close);
        } else if let Some(entry) = self.default.clone() {
            self.select(caller, &entry, raw_input)?;
        } else {
            caller.msg(messages::CHOOSE_OPTION);
        }

        if self.is_terminal() {
            info!(target: "menu::session", node = ?self.current_node, "Reached end of menu");
            return Ok(DispatchOutcome::Close);
        }
        Ok(DispatchOutcome::Continue)
    }

    /// Exec, then goto. A goto to a missing node only aborts this selection.
    fn select(&mut self, caller: &mut C, entry: &OptionEntry<C>, raw_input: &str) -> Result<()> {
        if let Some(exec) = &entry.exec {
            self.callback(caller, exec, raw_input)?;
        }
        if let Some(goto) = &entry.goto {
            match self.goto(caller, goto, raw_input) {
                Err(err) if err.is_recoverable() => {
                    debug!(target: "menu::session", error = %err, "Transition aborted");
                }
                other => other?,
            }
        }
        Ok(())
    }

    /// True when nothing at this node can be selected.
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty() && self.default.is_none()
    }

    pub fn current_node(&self) -> Option<&str> {
        self.current_node.as_deref()
    }

    pub fn node_text(&self) -> &str {
        &self.node_text
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn allow_quit(&self) -> bool {
        self.allow_quit
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Registered aliases, sorted.
    pub fn option_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.options.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn definition(&self) -> &Arc<MenuDefinition<C>> {
        &self.definition
    }
}

impl<C> fmt::Debug for MenuSession<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuSession")
            .field("current_node", &self.current_node)
            .field("allow_quit", &self.allow_quit)
            .field("options", &self.options.len())
            .field("has_default", &self.default.is_some())
            .finish_non_exhaustive()
    }
}
