//! Menu modules built from menu files.

use std::sync::Arc;

use menu_core::{Content, MenuModule, NodeFn, NodeResult, OptionSpec};
use tracing::warn;

use crate::format::{MenuFile, NodeData};

/// Placeholder in node text replaced by the input that led to the node.
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// A [`MenuModule`] whose nodes come from a [`MenuFile`].
///
/// Works for any caller type since data nodes never touch the caller.
#[derive(Clone, Debug)]
pub struct DataMenu {
    file: Arc<MenuFile>,
}

impl DataMenu {
    pub fn new(file: MenuFile) -> Self {
        let dangling = file.dangling_targets();
        if !dangling.is_empty() {
            warn!(target: "menu::content", targets = ?dangling, "Menu file references undefined nodes");
        }
        Self {
            file: Arc::new(file),
        }
    }

    pub fn file(&self) -> &MenuFile {
        &self.file
    }

    fn node_fn<C: 'static>(node: Arc<NodeData>) -> NodeFn<C> {
        if node.text.contains(INPUT_PLACEHOLDER) {
            NodeFn::with_input(move |_: &mut C, raw: &str| {
                Ok(render(&node, &node.text.replace(INPUT_PLACEHOLDER, raw)))
            })
        } else {
            NodeFn::caller(move |_: &mut C| Ok(render(&node, &node.text)))
        }
    }
}

impl From<MenuFile> for DataMenu {
    fn from(file: MenuFile) -> Self {
        Self::new(file)
    }
}

fn render<C>(node: &NodeData, text: &str) -> NodeResult<C> {
    let content = match &node.help {
        Some(help) => Content::TextWithHelp(text.to_string(), help.clone()),
        None => Content::Text(text.to_string()),
    };

    NodeResult::new(content).options(node.options.iter().map(|data| {
        let mut option = OptionSpec::new().keys(data.key.iter().cloned());
        if let Some(desc) = &data.desc {
            option = option.desc(desc.clone());
        }
        if let Some(exec) = &data.exec {
            option = option.exec_node(exec.clone());
        }
        if let Some(goto) = &data.goto {
            option = option.goto(goto.clone());
        }
        option
    }))
}

impl<C: 'static> MenuModule<C> for DataMenu {
    fn exports(&self) -> Vec<(String, NodeFn<C>)> {
        self.file
            .nodes
            .iter()
            .map(|node| (node.name.clone(), Self::node_fn(Arc::new(node.clone()))))
            .collect()
    }
}
