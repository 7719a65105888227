//! Error types surfaced by the menu engine.
//!
//! Every variant that reaches a player has already been reported through
//! [`Caller::msg`](crate::Caller::msg) by the time it is returned; callers
//! receive the error for logging and diagnostics.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MenuError>;

/// Failures while resolving a menu source into a definition.
#[derive(Debug, Error)]
pub enum DefinitionLoadError {
    #[error("menu module `{0}` could not be found")]
    ModuleNotFound(String),

    #[error("start node `{node}` not in menu tree")]
    MissingStartNode { node: String },

    #[error("failed to load menu module `{path}`")]
    Source {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    DefinitionLoad(#[from] DefinitionLoadError),

    #[error("menu node `{node}` is not implemented")]
    UnknownNode { node: String },

    #[error("error in menu node `{node}`")]
    NodeExecution {
        node: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("no active menu session for caller {caller}")]
    NoActiveSession { caller: String },
}

impl MenuError {
    /// Returns true for failures that only abort the current dispatch step.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownNode { .. })
    }
}
