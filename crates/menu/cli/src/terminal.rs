//! Terminal-backed caller.

use std::io::Write;

use menu_core::{
    Caller, DispatchOutcome, MENU_CMDSET_KEY, MenuCmdSet, MenuError, SessionRegistry,
};
use tracing::warn;

/// Reply for input the caller has no command for.
pub const UNKNOWN_COMMAND: &str = "Huh?";
pub const LOOK_TEXT: &str = "You are back where you started.";

/// A single local player whose output goes to a writer, normally stdout.
pub struct TerminalCaller<W> {
    name: String,
    out: W,
    cmdsets: Vec<MenuCmdSet>,
}

impl<W: Write> TerminalCaller<W> {
    pub fn new(name: impl Into<String>, out: W) -> Self {
        Self {
            name: name.into(),
            out,
            cmdsets: Vec::new(),
        }
    }

    pub fn in_menu(&self) -> bool {
        self.cmdsets.iter().any(|cmdset| cmdset.key == MENU_CMDSET_KEY)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Runs one input line the way a game's command handler would.
    ///
    /// Returns `None` when no command set took the line.
    pub fn execute(
        &mut self,
        registry: &mut SessionRegistry<Self>,
        line: &str,
    ) -> Option<Result<DispatchOutcome, MenuError>> {
        let command = self
            .cmdsets
            .iter()
            .rev()
            .find_map(|cmdset| cmdset.resolve(line))
            .cloned();

        match command {
            Some(command) => Some(command.func(registry, self, line)),
            None => {
                self.msg(UNKNOWN_COMMAND);
                None
            }
        }
    }
}

impl<W: Write> Caller for TerminalCaller<W> {
    type Id = String;

    fn id(&self) -> String {
        self.name.clone()
    }

    fn msg(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!(target: "menu::cli", error = %err, "Failed to write to terminal");
        }
    }

    fn look(&mut self) {
        self.msg(LOOK_TEXT);
    }

    fn attach_cmdset(&mut self, cmdset: MenuCmdSet) {
        self.cmdsets.push(cmdset);
    }

    fn detach_cmdset(&mut self, key: &str) {
        self.cmdsets.retain(|cmdset| cmdset.key != key);
    }
}
