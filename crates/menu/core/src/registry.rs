//! Caller → session bookkeeping.
//!
//! The registry owns every open [`MenuSession`], keyed by the caller's id. It
//! is the only place that attaches and detaches the menu command set, so a
//! caller carries the set exactly while it has a session here.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::command::{MENU_CMDSET_KEY, MenuCmdSet};
use crate::config::MenuConfig;
use crate::definition::{MenuLibrary, MenuSource};
use crate::error::{DefinitionLoadError, MenuError, Result};
use crate::host::Caller;
use crate::layout::{LabelMarkup, PlainMarkup};
use crate::messages;
use crate::session::{DispatchOutcome, MenuSession};

pub struct SessionRegistry<C: Caller> {
    sessions: HashMap<C::Id, MenuSession<C>>,
    library: MenuLibrary<C>,
    markup: Arc<dyn LabelMarkup>,
}

impl<C: Caller> SessionRegistry<C> {
    pub fn new() -> Self {
        Self::with_library(MenuLibrary::new())
    }

    pub fn with_library(library: MenuLibrary<C>) -> Self {
        Self {
            sessions: HashMap::new(),
            library,
            markup: Arc::new(PlainMarkup),
        }
    }

    /// Sets the label decoration used by sessions started afterwards.
    pub fn with_markup(mut self, markup: impl LabelMarkup + 'static) -> Self {
        self.markup = Arc::new(markup);
        self
    }

    pub fn library(&self) -> &MenuLibrary<C> {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut MenuLibrary<C> {
        &mut self.library
    }

    /// Puts `caller` into a menu and shows its start node.
    ///
    /// A session the caller already had is closed first. If the start node
    /// cannot be entered the command set is removed again and no session is
    /// kept.
    pub fn start(
        &mut self,
        caller: &mut C,
        source: impl Into<MenuSource<C>>,
        config: &MenuConfig,
    ) -> Result<()> {
        let definition = source.into().resolve(&self.library)?;
        if !definition.contains(&config.start_node) {
            warn!(
                target: "menu::registry",
                caller = ?caller.id(),
                start_node = %config.start_node,
                "Start node missing from menu"
            );
            return Err(DefinitionLoadError::MissingStartNode {
                node: config.start_node.clone(),
            }
            .into());
        }

        if self.sessions.contains_key(&caller.id()) {
            debug!(target: "menu::registry", caller = ?caller.id(), "Replacing open menu");
            self.close(caller);
        }

        caller.attach_cmdset(MenuCmdSet::new(
            config.cmdset_merge_type,
            config.cmdset_priority,
        ));

        let mut session = MenuSession::new(definition, config, Arc::clone(&self.markup));
        if let Err(err) = session.goto(caller, &config.start_node, "") {
            caller.detach_cmdset(MENU_CMDSET_KEY);
            warn!(target: "menu::registry", caller = ?caller.id(), error = %err, "Menu failed to start");
            return Err(err);
        }

        info!(
            target: "menu::registry",
            caller = ?caller.id(),
            start_node = %config.start_node,
            "Menu started"
        );
        self.sessions.insert(caller.id(), session);
        Ok(())
    }

    /// Routes a line of input to the caller's session.
    ///
    /// When the session ends the menu is closed and the host's own look runs.
    pub fn handle_input(&mut self, caller: &mut C, raw_input: &str) -> Result<DispatchOutcome> {
        let id = caller.id();
        let Some(session) = self.sessions.get_mut(&id) else {
            let name = format!("{id:?}");
            caller.msg(&messages::session_not_found(&name));
            warn!(target: "menu::registry", caller = %name, "Input without menu session");
            return Err(MenuError::NoActiveSession { caller: name });
        };

        let outcome = session.dispatch(caller, raw_input)?;
        if outcome == DispatchOutcome::Close {
            self.close(caller);
            caller.look();
        }
        Ok(outcome)
    }

    /// Ends the caller's menu. Returns false if it had none.
    pub fn close(&mut self, caller: &mut C) -> bool {
        let Some(session) = self.sessions.remove(&caller.id()) else {
            return false;
        };
        caller.detach_cmdset(MENU_CMDSET_KEY);
        info!(
            target: "menu::registry",
            caller = ?caller.id(),
            node = ?session.current_node(),
            "Menu closed"
        );
        true
    }

    pub fn is_active(&self, id: &C::Id) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn session(&self, id: &C::Id) -> Option<&MenuSession<C>> {
        self.sessions.get(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<C: Caller> Default for SessionRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Caller> fmt::Debug for SessionRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("sessions", &self.sessions.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
