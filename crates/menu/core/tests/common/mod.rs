//! Shared fixtures: a minimal host player and the demo menu.

use std::collections::HashMap;

use menu_core::{Caller, MenuCmdSet, NodeModule, NodeResult, OptionSpec};

#[derive(Debug, Default)]
pub struct Player {
    pub name: String,
    pub inbox: Vec<String>,
    pub looks: usize,
    pub cmdsets: Vec<MenuCmdSet>,
    pub attributes: HashMap<String, String>,
}

impl Player {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn last(&self) -> &str {
        self.inbox.last().map(String::as_str).unwrap_or_default()
    }
}

impl Caller for Player {
    type Id = String;

    fn id(&self) -> String {
        self.name.clone()
    }

    fn msg(&mut self, text: &str) {
        self.inbox.push(text.to_string());
    }

    fn look(&mut self) {
        self.looks += 1;
    }

    fn attach_cmdset(&mut self, cmdset: MenuCmdSet) {
        self.cmdsets.push(cmdset);
    }

    fn detach_cmdset(&mut self, key: &str) {
        self.cmdsets.retain(|cmdset| cmdset.key != key);
    }
}

/// The demo menu: set an attribute, view your name, echo free input, quit.
pub fn demo_menu() -> NodeModule<Player> {
    NodeModule::new()
        .node("start", |_: &mut Player| {
            Ok(NodeResult::new(
                "
                This is an example menu.

                Anything that is not an option is echoed back.
                ",
            )
            .option(
                OptionSpec::new()
                    .keys(["Set", "s"])
                    .desc("Set an attribute on yourself.")
                    .exec_fn(|player: &mut Player| {
                        player
                            .attributes
                            .insert("menuattrtest".into(), "Test value".into());
                        Ok(())
                    })
                    .goto("set"),
            )
            .option(OptionSpec::new().keys(["View", "v"]).desc("View your own name").goto("view"))
            .option(
                OptionSpec::new()
                    .keys(["Quit", "quit", "q"])
                    .desc("Quit this menu example.")
                    .goto("end"),
            )
            .option(OptionSpec::new().fallback().goto("echo")))
        })
        .node("set", |player: &mut Player| {
            let value = player.attributes.get("menuattrtest").cloned().unwrap_or_default();
            Ok(NodeResult::new((
                format!("The attribute 'menuattrtest' was set to\n\n    {value}"),
                "
                This is the help entry for this node.
                ",
            ))
            .option(
                OptionSpec::new()
                    .keys(["back (default)", "_default"])
                    .desc("back to main")
                    .goto("start"),
            ))
        })
        .node("view", |player: &mut Player| {
            Ok(NodeResult::new(format!("Your name is {}!", player.name))
                .option(OptionSpec::new().desc("back to main").goto("start")))
        })
        .input_node("echo", |_: &mut Player, raw: &str| {
            Ok(NodeResult::new(format!("You entered the text:\n\n    \"{raw}\""))
                .option(OptionSpec::new().fallback().goto("start")))
        })
        .node("end", |_: &mut Player| {
            Ok(NodeResult::new("This is the end of the menu."))
        })
        .node("_helper", |_: &mut Player| Ok(NodeResult::new("unreachable")))
}
