//! Node functions and the contract they return.
//!
//! A node is a function of the caller (and optionally the caller's last raw
//! input) that produces a [`NodeResult`]: the text to show plus the options
//! leading out of the node. The calling convention is fixed when the node is
//! declared via [`NodeFn::caller`] or [`NodeFn::with_input`], so the engine
//! never has to inspect a function's signature at call time.

use std::fmt;
use std::sync::Arc;

/// Reserved alias marking an option as the catch-all fallback.
pub const DEFAULT_KEY: &str = "_default";

type CallerNode<C> = dyn Fn(&mut C) -> anyhow::Result<NodeResult<C>> + Send + Sync;
type InputNode<C> = dyn Fn(&mut C, &str) -> anyhow::Result<NodeResult<C>> + Send + Sync;
type CallerCallback<C> = dyn Fn(&mut C) -> anyhow::Result<()> + Send + Sync;
type InputCallback<C> = dyn Fn(&mut C, &str) -> anyhow::Result<()> + Send + Sync;

/// A menu node with its calling convention.
pub enum NodeFn<C> {
    /// Receives only the caller.
    Caller(Arc<CallerNode<C>>),
    /// Receives the caller and the raw input that triggered the transition.
    WithInput(Arc<InputNode<C>>),
}

impl<C> NodeFn<C> {
    pub fn caller<F>(f: F) -> Self
    where
        F: Fn(&mut C) -> anyhow::Result<NodeResult<C>> + Send + Sync + 'static,
    {
        Self::Caller(Arc::new(f))
    }

    pub fn with_input<F>(f: F) -> Self
    where
        F: Fn(&mut C, &str) -> anyhow::Result<NodeResult<C>> + Send + Sync + 'static,
    {
        Self::WithInput(Arc::new(f))
    }

    /// Returns true if the node wants the raw input string.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::WithInput(_))
    }

    pub(crate) fn call(&self, caller: &mut C, raw_input: &str) -> anyhow::Result<NodeResult<C>> {
        match self {
            Self::Caller(f) => f(caller),
            Self::WithInput(f) => f(caller, raw_input),
        }
    }
}

impl<C> Clone for NodeFn<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Caller(f) => Self::Caller(Arc::clone(f)),
            Self::WithInput(f) => Self::WithInput(Arc::clone(f)),
        }
    }
}

impl<C> fmt::Debug for NodeFn<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caller(_) => f.write_str("NodeFn::Caller"),
            Self::WithInput(_) => f.write_str("NodeFn::WithInput"),
        }
    }
}

/// A side-effecting function run when an option is chosen.
///
/// Same two calling conventions as [`NodeFn`]; any value is discarded.
pub enum CallbackFn<C> {
    Caller(Arc<CallerCallback<C>>),
    WithInput(Arc<InputCallback<C>>),
}

impl<C> CallbackFn<C> {
    pub fn caller<F>(f: F) -> Self
    where
        F: Fn(&mut C) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self::Caller(Arc::new(f))
    }

    pub fn with_input<F>(f: F) -> Self
    where
        F: Fn(&mut C, &str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self::WithInput(Arc::new(f))
    }

    pub(crate) fn call(&self, caller: &mut C, raw_input: &str) -> anyhow::Result<()> {
        match self {
            Self::Caller(f) => f(caller),
            Self::WithInput(f) => f(caller, raw_input),
        }
    }
}

impl<C> Clone for CallbackFn<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Caller(f) => Self::Caller(Arc::clone(f)),
            Self::WithInput(f) => Self::WithInput(Arc::clone(f)),
        }
    }
}

impl<C> fmt::Debug for CallbackFn<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caller(_) => f.write_str("CallbackFn::Caller"),
            Self::WithInput(_) => f.write_str("CallbackFn::WithInput"),
        }
    }
}

/// What runs before a transition when an option is chosen.
pub enum Exec<C> {
    /// A node of the same definition, executed for its side effects only.
    Node(String),
    /// A direct callback.
    Callback(CallbackFn<C>),
}

impl<C> Clone for Exec<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Node(name) => Self::Node(name.clone()),
            Self::Callback(callback) => Self::Callback(callback.clone()),
        }
    }
}

impl<C> fmt::Debug for Exec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(name) => f.debug_tuple("Exec::Node").field(name).finish(),
            Self::Callback(callback) => f.debug_tuple("Exec::Callback").field(callback).finish(),
        }
    }
}

impl<C> From<CallbackFn<C>> for Exec<C> {
    fn from(callback: CallbackFn<C>) -> Self {
        Self::Callback(callback)
    }
}

/// Node text, optionally paired with a node-specific help text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Text(String),
    TextWithHelp(String, String),
}

impl Content {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::TextWithHelp(text, _) => text,
        }
    }

    pub fn help(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::TextWithHelp(_, help) => Some(help),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T, H> From<(T, H)> for Content
where
    T: Into<String>,
    H: Into<String>,
{
    fn from((text, help): (T, H)) -> Self {
        Self::TextWithHelp(text.into(), help.into())
    }
}

/// One selectable choice at a node.
///
/// Built fluently:
///
/// ```
/// use menu_core::OptionSpec;
///
/// struct Player;
///
/// let spec: OptionSpec<Player> = OptionSpec::new()
///     .key("testing")
///     .desc("Select this to go to node 2")
///     .goto("node2")
///     .exec_node("callback1");
/// assert_eq!(spec.keys, vec!["testing".to_string()]);
/// ```
pub struct OptionSpec<C> {
    /// Aliases, in order. Empty means "use the option's ordinal".
    pub keys: Vec<String>,
    pub desc: Option<String>,
    pub goto: Option<String>,
    pub exec: Option<Exec<C>>,
}

impl<C> OptionSpec<C> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            desc: None,
            goto: None,
            exec: None,
        }
    }

    /// Adds an alias.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Marks this option as the fallback for unmatched input.
    pub fn fallback(self) -> Self {
        self.key(DEFAULT_KEY)
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn goto(mut self, node: impl Into<String>) -> Self {
        self.goto = Some(node.into());
        self
    }

    pub fn exec(mut self, exec: impl Into<Exec<C>>) -> Self {
        self.exec = Some(exec.into());
        self
    }

    pub fn exec_node(self, node: impl Into<String>) -> Self {
        self.exec(Exec::Node(node.into()))
    }

    pub fn exec_fn<F>(self, f: F) -> Self
    where
        F: Fn(&mut C) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.exec(CallbackFn::caller(f))
    }

    pub fn exec_fn_with_input<F>(self, f: F) -> Self
    where
        F: Fn(&mut C, &str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.exec(CallbackFn::with_input(f))
    }

    /// Returns true if `_default` is among the aliases.
    pub fn is_fallback(&self) -> bool {
        self.keys.iter().any(|key| key == DEFAULT_KEY)
    }
}

impl<C> Default for OptionSpec<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for OptionSpec<C> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            desc: self.desc.clone(),
            goto: self.goto.clone(),
            exec: self.exec.clone(),
        }
    }
}

impl<C> fmt::Debug for OptionSpec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("keys", &self.keys)
            .field("desc", &self.desc)
            .field("goto", &self.goto)
            .field("exec", &self.exec)
            .finish()
    }
}

/// What a node returns: its content and the options leading out of it.
///
/// A node without options is terminal; reaching it ends the menu.
pub struct NodeResult<C> {
    pub content: Content,
    pub options: Vec<OptionSpec<C>>,
}

impl<C> NodeResult<C> {
    /// A terminal node result.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: OptionSpec<C>) -> Self {
        self.options.push(option);
        self
    }

    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = OptionSpec<C>>,
    {
        self.options.extend(options);
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }
}

impl<C> From<OptionSpec<C>> for Vec<OptionSpec<C>> {
    fn from(option: OptionSpec<C>) -> Self {
        vec![option]
    }
}

impl<C> fmt::Debug for NodeResult<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeResult")
            .field("content", &self.content)
            .field("options", &self.options)
            .finish()
    }
}
