//! Menu definitions and the loader that builds them.
//!
//! A menu is authored as a *module*: anything implementing [`MenuModule`]
//! that exports named node functions. Loading a module keeps every export
//! whose name does not start with `_`, so helpers can live next to nodes
//! without becoming reachable from the menu.
//!
//! Modules are either handed over directly or looked up by path in a
//! [`MenuLibrary`], the registry a host fills at startup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::DefinitionLoadError;
use crate::node::{NodeFn, NodeResult};

/// Names starting with this prefix are never nodes.
pub const PRIVATE_PREFIX: char = '_';

/// A namespace of menu node functions.
pub trait MenuModule<C>: Send + Sync {
    /// Every top-level entry of the module, in declaration order.
    fn exports(&self) -> Vec<(String, NodeFn<C>)>;
}

/// An in-code module assembled from closures or functions.
///
/// ```
/// use menu_core::{MenuDefinition, NodeModule, NodeResult, OptionSpec};
///
/// struct Player;
///
/// let module = NodeModule::new()
///     .node("start", |_: &mut Player| {
///         Ok(NodeResult::new("Hello").option(OptionSpec::new().key("go").goto("end")))
///     })
///     .node("end", |_: &mut Player| Ok(NodeResult::new("Bye")))
///     .node("_helper", |_: &mut Player| Ok(NodeResult::new("hidden")));
///
/// let definition = MenuDefinition::from_module(&module);
/// assert!(definition.contains("start"));
/// assert!(!definition.contains("_helper"));
/// ```
pub struct NodeModule<C> {
    entries: Vec<(String, NodeFn<C>)>,
}

impl<C> NodeModule<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a node receiving only the caller.
    pub fn node<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut C) -> anyhow::Result<NodeResult<C>> + Send + Sync + 'static,
    {
        self.entries.push((name.into(), NodeFn::caller(f)));
        self
    }

    /// Adds a node receiving the caller and the last raw input.
    pub fn input_node<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut C, &str) -> anyhow::Result<NodeResult<C>> + Send + Sync + 'static,
    {
        self.entries.push((name.into(), NodeFn::with_input(f)));
        self
    }

    pub fn entry(mut self, name: impl Into<String>, node: NodeFn<C>) -> Self {
        self.entries.push((name.into(), node));
        self
    }
}

impl<C> Default for NodeModule<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> MenuModule<C> for NodeModule<C> {
    fn exports(&self) -> Vec<(String, NodeFn<C>)> {
        self.entries.clone()
    }
}

/// Immutable node-name → node-function table.
pub struct MenuDefinition<C> {
    nodes: HashMap<String, NodeFn<C>>,
}

impl<C> MenuDefinition<C> {
    /// Introspects a module, keeping every public export.
    ///
    /// Later exports with the same name replace earlier ones.
    pub fn from_module(module: &dyn MenuModule<C>) -> Self {
        let nodes: HashMap<_, _> = module
            .exports()
            .into_iter()
            .filter(|(name, _)| !name.starts_with(PRIVATE_PREFIX))
            .collect();

        debug!(target: "menu::definition", nodes = nodes.len(), "Loaded menu definition");

        Self { nodes }
    }

    pub fn get(&self, name: &str) -> Option<&NodeFn<C>> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node names, sorted for stable output.
    pub fn node_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.nodes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<C> fmt::Debug for MenuDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuDefinition")
            .field("nodes", &self.node_names())
            .finish()
    }
}

/// Registry of menu modules addressable by path.
pub struct MenuLibrary<C> {
    modules: HashMap<String, Arc<dyn MenuModule<C>>>,
}

impl<C> MenuLibrary<C> {
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Registers a module under `path`, replacing any previous one.
    pub fn register(&mut self, path: impl Into<String>, module: Arc<dyn MenuModule<C>>) {
        let path = path.into();
        debug!(target: "menu::definition", path = %path, "Registered menu module");
        self.modules.insert(path, module);
    }

    pub fn with_module(mut self, path: impl Into<String>, module: Arc<dyn MenuModule<C>>) -> Self {
        self.register(path, module);
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.modules.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.modules.keys().map(String::as_str)
    }

    /// Resolves `path` and builds its definition.
    pub fn load(&self, path: &str) -> Result<MenuDefinition<C>, DefinitionLoadError> {
        let module = self
            .modules
            .get(path.trim())
            .ok_or_else(|| DefinitionLoadError::ModuleNotFound(path.to_string()))?;
        Ok(MenuDefinition::from_module(module.as_ref()))
    }
}

impl<C> Default for MenuLibrary<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a menu session gets its definition from.
pub enum MenuSource<C> {
    /// A module path looked up in the registry's [`MenuLibrary`].
    Path(String),
    /// A module object, loaded directly.
    Module(Arc<dyn MenuModule<C>>),
    /// An already loaded definition, shared as is.
    Definition(Arc<MenuDefinition<C>>),
}

impl<C> MenuSource<C> {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    pub fn module<M>(module: M) -> Self
    where
        M: MenuModule<C> + 'static,
    {
        Self::Module(Arc::new(module))
    }

    pub(crate) fn resolve(
        self,
        library: &MenuLibrary<C>,
    ) -> Result<Arc<MenuDefinition<C>>, DefinitionLoadError> {
        match self {
            Self::Path(path) => library.load(&path).map(Arc::new),
            Self::Module(module) => Ok(Arc::new(MenuDefinition::from_module(module.as_ref()))),
            Self::Definition(definition) => Ok(definition),
        }
    }
}

impl<C> From<Arc<MenuDefinition<C>>> for MenuSource<C> {
    fn from(definition: Arc<MenuDefinition<C>>) -> Self {
        Self::Definition(definition)
    }
}
