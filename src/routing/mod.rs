//! Plugin routing: the `plugin_routing` section of `meta/runtime.yml`.
//!
//! Routing maps short or legacy plugin names to fully-qualified targets, or
//! attaches a deprecation notice instead of resolving.

mod deprecation;
mod derive;
mod module;
mod policy;

pub use deprecation::format_warning;
pub use derive::derive_routing;
pub use module::ModuleDescriptor;
pub use policy::RoutingPolicy;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Deprecation payload of a routing entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// Human-readable warning surfaced when the plugin is loaded.
    pub warning_text: String,
}

/// A single routing entry for one plugin name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RouteEntry {
    /// Resolve the name to another fully-qualified plugin.
    Redirect {
        /// Fully-qualified target name.
        redirect: String,
    },
    /// Surface a deprecation notice for the name.
    Deprecation {
        /// Notice details.
        deprecation: DeprecationNotice,
    },
}

impl RouteEntry {
    /// Shorthand for a redirect entry.
    #[must_use]
    pub fn redirect(target: impl Into<String>) -> Self {
        Self::Redirect { redirect: target.into() }
    }

    /// Shorthand for a deprecation entry.
    #[must_use]
    pub fn deprecation(warning_text: impl Into<String>) -> Self {
        Self::Deprecation { deprecation: DeprecationNotice { warning_text: warning_text.into() } }
    }
}

/// Ordered name-to-entry table with last-write-wins updates.
///
/// A name keeps the position of its first insertion; re-inserting it only
/// replaces the entry. Serialized as a YAML mapping in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(String, RouteEntry)>,
}

impl RouteTable {
    /// Inserts or replaces the entry for `name`, returning the replaced entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: RouteEntry) -> Option<RouteEntry> {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(&mut slot.1, entry));
        }
        self.entries.push((name, entry));
        None
    }

    /// Looks up the entry for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, entry)| entry)
    }

    /// Names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RouteTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

/// Routing sections derived for a collection.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PluginRouting {
    /// Action plugin redirects.
    #[serde(skip_serializing_if = "RouteTable::is_empty")]
    pub action: RouteTable,
    /// Module redirects and deprecation notices.
    #[serde(skip_serializing_if = "RouteTable::is_empty")]
    pub modules: RouteTable,
}

impl PluginRouting {
    /// Returns `true` when no section has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.action.is_empty() && self.modules.is_empty()
    }
}
