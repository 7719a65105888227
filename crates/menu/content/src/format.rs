//! Menu file format.
//!
//! ```ron
//! (
//!     nodes: [
//!         (
//!             name: "start",
//!             text: "Where to?",
//!             options: [
//!                 (key: ["North", "n"], desc: Some("The cold road."), goto: Some("north")),
//!                 (key: ["_default"], goto: Some("start")),
//!             ],
//!         ),
//!         (name: "north", text: "Snow everywhere."),
//!     ],
//! )
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MenuFile {
    pub nodes: Vec<NodeData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeData {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub help: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Vec<OptionData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionData {
    /// Aliases; empty means the option is selected by number only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub key: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub desc: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub goto: Option<String>,
    /// Node run for its side effects before `goto`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exec: Option<String>,
}

impl MenuFile {
    pub fn node(&self, name: &str) -> Option<&NodeData> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Targets referenced by options that no node in this file defines.
    pub fn dangling_targets(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .nodes
            .iter()
            .flat_map(|node| &node.options)
            .flat_map(|option| option.goto.iter().chain(&option.exec))
            .map(String::as_str)
            .filter(|target| self.node(target).is_none())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_targets_are_reported_once() {
        let file = MenuFile {
            nodes: vec![NodeData {
                name: "start".into(),
                options: vec![
                    OptionData {
                        goto: Some("lost".into()),
                        ..OptionData::default()
                    },
                    OptionData {
                        exec: Some("lost".into()),
                        goto: Some("start".into()),
                        ..OptionData::default()
                    },
                ],
                ..NodeData::default()
            }],
        };

        assert_eq!(file.dangling_targets(), vec!["lost"]);
    }
}
