//! The `meta/runtime.yml` document and its writer.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::context::ServiceContext;
use crate::routing::{PluginRouting, RoutingPolicy};

/// Location of the runtime file relative to the collection root.
pub const RUNTIME_DIR: &str = "meta";
/// File name of the runtime file inside [`RUNTIME_DIR`].
pub const RUNTIME_FILE: &str = "runtime.yml";

/// Top-level shape of `meta/runtime.yml`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RuntimeDocument {
    /// Minimum supported platform version constraint.
    pub requires_ansible: String,
    /// Derived routing; omitted entirely when empty.
    #[serde(skip_serializing_if = "PluginRouting::is_empty")]
    pub plugin_routing: PluginRouting,
}

impl RuntimeDocument {
    /// Builds the document for the given policy and routing.
    #[must_use]
    pub fn new(policy: &RoutingPolicy, plugin_routing: PluginRouting) -> Self {
        Self { requires_ansible: policy.requires_ansible.clone(), plugin_routing }
    }

    /// Renders block-style YAML with an explicit document-start marker.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML serialization fails.
    pub fn to_yaml(&self) -> Result<String, String> {
        let body = serde_yaml::to_string(self)
            .map_err(|e| format!("failed to serialize runtime document: {e}"))?;
        Ok(format!("---\n{body}"))
    }
}

/// Writes `document` to `<collection_root>/meta/runtime.yml`, replacing any
/// existing file, and returns the written path.
///
/// # Errors
///
/// Returns an error if serialization, directory creation, or the write fails.
pub fn write_runtime(
    ctx: &ServiceContext,
    collection_root: &Path,
    document: &RuntimeDocument,
) -> Result<PathBuf, String> {
    let yaml = document.to_yaml()?;
    let meta_dir = collection_root.join(RUNTIME_DIR);
    ctx.fs
        .create_dir_all(&meta_dir)
        .map_err(|e| format!("failed to create {}: {e}", meta_dir.display()))?;

    let output = meta_dir.join(RUNTIME_FILE);
    ctx.fs
        .write(&output, &yaml)
        .map_err(|e| format!("failed to write runtime file to {}: {e}", output.display()))?;
    info!("wrote {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::{fixed_context, MemFs};
    use crate::routing::RouteEntry;

    #[test]
    fn empty_routing_is_omitted() {
        let doc = RuntimeDocument::new(&RoutingPolicy::default(), PluginRouting::default());
        let yaml = doc.to_yaml().unwrap();

        assert!(yaml.starts_with("---\n"));
        assert!(!yaml.contains("plugin_routing"));
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["requires_ansible"].as_str(), Some(">=2.9"));
    }

    #[test]
    fn routing_sections_are_nested() {
        let mut routing = PluginRouting::default();
        routing.action.insert("net_acls", RouteEntry::redirect("acme.net.net"));
        routing.modules.insert("acls", RouteEntry::redirect("acme.net.net_acls"));
        let yaml = RuntimeDocument::new(&RoutingPolicy::default(), routing).to_yaml().unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let routing = &value["plugin_routing"];
        assert_eq!(routing["action"]["net_acls"]["redirect"].as_str(), Some("acme.net.net"));
        assert_eq!(routing["modules"]["acls"]["redirect"].as_str(), Some("acme.net.net_acls"));
        assert!(yaml.find("action:").unwrap() < yaml.find("modules:").unwrap());
    }

    #[test]
    fn writes_under_meta_and_overwrites() {
        let fs = MemFs::new();
        fs.insert("/c/acme/net/meta/runtime.yml", "stale: true\n");
        let ctx = fixed_context(fs, 2024, 5, 17);
        let doc = RuntimeDocument::new(&RoutingPolicy::default(), PluginRouting::default());

        let path = write_runtime(&ctx, Path::new("/c/acme/net"), &doc).unwrap();

        assert_eq!(path, Path::new("/c/acme/net/meta/runtime.yml"));
        let written = ctx.fs.read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.starts_with("---\n"));
    }
}
