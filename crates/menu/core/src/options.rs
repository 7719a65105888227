//! Option normalization.
//!
//! Turns the option specs a node returned into the three things a session
//! needs: the alias lookup table, the fallback entry, and the rows to show.

use std::collections::HashMap;
use std::fmt;

use crate::messages::NO_DESCRIPTION;
use crate::node::{Exec, OptionSpec};

/// What happens when an option is chosen: exec first, then goto.
pub struct OptionEntry<C> {
    pub goto: Option<String>,
    pub exec: Option<Exec<C>>,
}

impl<C> OptionEntry<C> {
    /// An entry that neither moves nor runs anything.
    pub fn is_dead(&self) -> bool {
        self.goto.is_none() && self.exec.is_none()
    }
}

impl<C> Clone for OptionEntry<C> {
    fn clone(&self) -> Self {
        Self {
            goto: self.goto.clone(),
            exec: self.exec.clone(),
        }
    }
}

impl<C> fmt::Debug for OptionEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionEntry")
            .field("goto", &self.goto)
            .field("exec", &self.exec)
            .finish()
    }
}

/// One row of the option table: primary alias and description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub label: String,
    pub desc: String,
}

impl OptionRow {
    pub fn new(label: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            desc: desc.into(),
        }
    }
}

pub struct NormalizedOptions<C> {
    /// Lowercased, trimmed alias → entry.
    pub lookup: HashMap<String, OptionEntry<C>>,
    pub default: Option<OptionEntry<C>>,
    /// Visible rows in declaration order.
    pub rows: Vec<OptionRow>,
}

impl<C> fmt::Debug for NormalizedOptions<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedOptions")
            .field("lookup", &self.lookup)
            .field("default", &self.default)
            .field("rows", &self.rows)
            .finish()
    }
}

/// Normalizes a node's options.
///
/// - A spec carrying `_default` becomes the fallback entry (the last one
///   wins). It gets no ordinal, no row and no aliases.
/// - Every other spec is shown as one row labelled with its first alias, or
///   its 1-based position when it has none. The position is always an alias
///   as well, so options stay selectable by number.
/// - Entries with neither goto nor exec are shown but not registered.
/// - Duplicate aliases resolve to the last option that registered them.
pub fn normalize<C>(options: Vec<OptionSpec<C>>) -> NormalizedOptions<C> {
    let mut lookup = HashMap::new();
    let mut default = None;
    let mut rows = Vec::with_capacity(options.len());

    for (index, spec) in options.into_iter().enumerate() {
        let ordinal = (index + 1).to_string();
        let is_fallback = spec.is_fallback();
        let OptionSpec {
            keys,
            desc,
            goto,
            exec,
        } = spec;
        let entry = OptionEntry { goto, exec };

        if is_fallback {
            default = Some(entry);
            continue;
        }

        let mut aliases = keys;
        if aliases.is_empty() {
            aliases.push(ordinal.clone());
        }
        aliases.push(ordinal);

        let desc = desc.unwrap_or_else(|| NO_DESCRIPTION.to_string());
        rows.push(OptionRow::new(aliases[0].clone(), desc));

        if entry.is_dead() {
            continue;
        }
        for alias in aliases {
            lookup.insert(alias.trim().to_lowercase(), entry.clone());
        }
    }

    NormalizedOptions {
        lookup,
        default,
        rows,
    }
}
