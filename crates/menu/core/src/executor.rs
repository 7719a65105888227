//! Node execution.
//!
//! Resolves node names against a definition, calls nodes with their declared
//! calling convention, and turns failures into [`MenuError`]s after telling
//! the player what went wrong.

use tracing::{debug, warn};

use crate::definition::MenuDefinition;
use crate::error::{MenuError, Result};
use crate::host::Caller;
use crate::messages;
use crate::node::{Exec, NodeResult};

pub struct NodeExecutor<'a, C> {
    definition: &'a MenuDefinition<C>,
}

impl<'a, C: Caller> NodeExecutor<'a, C> {
    pub fn new(definition: &'a MenuDefinition<C>) -> Self {
        Self { definition }
    }

    /// Runs `node` and returns what it produced.
    ///
    /// `raw_input` is passed through verbatim to nodes declared with
    /// [`NodeFn::with_input`](crate::NodeFn::with_input).
    pub fn execute(&self, caller: &mut C, node: &str, raw_input: &str) -> Result<NodeResult<C>> {
        let Some(node_fn) = self.definition.get(node) else {
            caller.msg(&messages::not_implemented(node));
            warn!(target: "menu::executor", node, "Menu node not implemented");
            return Err(MenuError::UnknownNode {
                node: node.to_string(),
            });
        };

        debug!(
            target: "menu::executor",
            node,
            with_input = node_fn.accepts_input(),
            "Executing menu node"
        );

        node_fn.call(caller, raw_input).map_err(|source| {
            caller.msg(&messages::node_error(node));
            warn!(target: "menu::executor", node, error = ?source, "Menu node failed");
            MenuError::NodeExecution {
                node: node.to_string(),
                source,
            }
        })
    }

    /// Runs an option's exec target for its side effects.
    ///
    /// `origin` names the node the option belongs to and is used when a direct
    /// callback fails. An exec node that does not exist is reported to the
    /// player but does not abort the selection.
    pub fn callback(
        &self,
        caller: &mut C,
        exec: &Exec<C>,
        raw_input: &str,
        origin: &str,
    ) -> Result<()> {
        match exec {
            Exec::Callback(callback) => callback.call(caller, raw_input).map_err(|source| {
                caller.msg(&messages::node_error(origin));
                warn!(target: "menu::executor", node = origin, error = ?source, "Menu callback failed");
                MenuError::NodeExecution {
                    node: origin.to_string(),
                    source,
                }
            }),
            Exec::Node(node) => match self.execute(caller, node, raw_input) {
                Ok(_) | Err(MenuError::UnknownNode { .. }) => Ok(()),
                Err(err) => Err(err),
            },
        }
    }
}
