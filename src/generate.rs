//! Runtime metadata generation: discover modules, derive routing, write the file.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collection::CollectionId;
use crate::context::ServiceContext;
use crate::routing::{derive_routing, ModuleDescriptor};
use crate::runtime::{write_runtime, RuntimeDocument};

/// Module sources, relative to the collection root.
const MODULES_DIR: &str = "plugins/modules";
/// Action plugin sources, relative to the collection root.
const ACTION_DIR: &str = "plugins/action";

/// Generates `meta/runtime.yml` for `collection` laid out under `root`.
///
/// The collection lives at `<root>/<collection>` using the identity exactly
/// as given. Modules are read from `plugins/modules` in file-name order.
/// Returns the document that was written.
///
/// # Errors
///
/// Returns an error if a module cannot be read or the runtime file cannot
/// be written.
pub fn generate(
    ctx: &ServiceContext,
    collection: &CollectionId,
    root: &Path,
) -> Result<RuntimeDocument, String> {
    let collection_root = root.join(collection.raw());
    let modules = discover_modules(ctx, &collection_root)?;
    let routing = derive_routing(collection, &modules, ctx.clock.today(), &ctx.policy);
    let document = RuntimeDocument::new(&ctx.policy, routing);
    write_runtime(ctx, &collection_root, &document)?;
    Ok(document)
}

/// Builds a descriptor for every module file, sorted by file name.
///
/// A missing modules directory yields no modules.
fn discover_modules(
    ctx: &ServiceContext,
    collection_root: &Path,
) -> Result<Vec<ModuleDescriptor>, String> {
    let modules_dir = collection_root.join(MODULES_DIR);
    let action_dir = collection_root.join(ACTION_DIR);
    if !ctx.fs.exists(&modules_dir) {
        debug!("no modules directory at {}", modules_dir.display());
        return Ok(Vec::new());
    }

    let mut names = ctx
        .fs
        .list_dir(&modules_dir)
        .map_err(|e| format!("failed to list {}: {e}", modules_dir.display()))?;
    names.sort();

    let mut modules = Vec::new();
    for file_name in names {
        if !ModuleDescriptor::is_module_file(&file_name) {
            debug!("skipping {file_name}");
            continue;
        }
        let path = modules_dir.join(&file_name);
        let source = ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| format!("failed to read module {}: {e}", path.display()))?;

        let module_name = ModuleDescriptor::module_name_of(&file_name);
        let documentation = ctx.extractor.extract(&source);
        let has_action = ctx.fs.exists(&action_plugin_path(&action_dir, module_name));
        modules.push(ModuleDescriptor::new(module_name, documentation, has_action));
    }
    Ok(modules)
}

fn action_plugin_path(action_dir: &Path, module_name: &str) -> PathBuf {
    action_dir.join(format!("{}.py", ModuleDescriptor::prefix_of(module_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::{fixed_context, MemFs};
    use crate::routing::RouteEntry;

    const PLAIN: &str = "DOCUMENTATION = '''\nmodule: x\n'''\n";
    const DEPRECATED: &str =
        "DOCUMENTATION = '''\nmodule: x\ndeprecated:\n  why: replaced\n'''\n";

    fn collection_fs(modules: &[(&str, &str)], actions: &[&str]) -> MemFs {
        let fs = MemFs::new();
        for (name, source) in modules {
            fs.insert(format!("/root/acme/net/plugins/modules/{name}"), source);
        }
        for name in actions {
            fs.insert(format!("/root/acme/net/plugins/action/{name}"), "");
        }
        fs
    }

    fn run(fs: MemFs) -> (ServiceContext, RuntimeDocument) {
        let ctx = fixed_context(fs, 2024, 5, 17);
        let doc = generate(&ctx, &CollectionId::parse("acme/net"), Path::new("/root")).unwrap();
        (ctx, doc)
    }

    #[test]
    fn short_name_redirect_without_action() {
        let (_, doc) = run(collection_fs(&[("net_acls.py", PLAIN)], &[]));

        assert!(doc.plugin_routing.action.is_empty());
        assert_eq!(
            doc.plugin_routing.modules.get("acls"),
            Some(&RouteEntry::redirect("acme.net.net_acls"))
        );
    }

    #[test]
    fn action_plugin_is_matched_by_prefix() {
        let (_, doc) = run(collection_fs(&[("net_acls.py", PLAIN)], &["net.py"]));

        let action = &doc.plugin_routing.action;
        assert_eq!(action.names().collect::<Vec<_>>(), vec!["net_acls", "acls"]);
        assert_eq!(action.get("acls"), Some(&RouteEntry::redirect("acme.net.net")));
    }

    #[test]
    fn deprecated_module_gets_dated_notice() {
        let (_, doc) = run(collection_fs(&[("net_old.py", DEPRECATED)], &[]));

        let modules = &doc.plugin_routing.modules;
        assert_eq!(modules.names().collect::<Vec<_>>(), vec!["net_old"]);
        let Some(RouteEntry::Deprecation { deprecation }) = modules.get("net_old") else {
            panic!("expected deprecation entry");
        };
        assert!(deprecation.warning_text.starts_with("acme.net.net_old has been deprecated"));
        assert!(deprecation.warning_text.contains("after 2026-6-01."));
    }

    #[test]
    fn package_marker_and_non_python_files_are_skipped() {
        let fs = collection_fs(
            &[("__init__.py", PLAIN), ("net_acls.py", PLAIN), ("README.md", "# net")],
            &[],
        );
        let (_, doc) = run(fs);

        assert_eq!(doc.plugin_routing.modules.names().collect::<Vec<_>>(), vec!["acls"]);
    }

    #[test]
    fn hidden_module_file_is_skipped() {
        let fs = collection_fs(&[(".net_old.py", DEPRECATED), ("net_acls.py", PLAIN)], &[]);
        let (_, doc) = run(fs);

        assert_eq!(doc.plugin_routing.modules.names().collect::<Vec<_>>(), vec!["acls"]);
    }

    #[test]
    fn module_without_documentation_uses_name_rules() {
        let (_, doc) = run(collection_fs(&[("net_bare.py", "import os\n")], &["net.py"]));

        assert_eq!(doc.plugin_routing.action.len(), 2);
        assert!(doc.plugin_routing.modules.get("bare").is_some());
    }

    #[test]
    fn missing_modules_directory_writes_bare_document() {
        let (ctx, doc) = run(MemFs::new());

        assert!(doc.plugin_routing.is_empty());
        let written =
            ctx.fs.read_to_string(Path::new("/root/acme/net/meta/runtime.yml")).unwrap();
        assert!(!written.contains("plugin_routing"));
        assert!(written.contains("requires_ansible"));
    }

    #[test]
    fn modules_are_processed_in_file_name_order() {
        // `net.py` has short name `net`, as does `net_net.py`; the latter sorts last.
        let fs = collection_fs(&[("net_net.py", PLAIN), ("net.py", PLAIN)], &[]);
        let (_, doc) = run(fs);

        assert_eq!(
            doc.plugin_routing.modules.get("net"),
            Some(&RouteEntry::redirect("acme.net.net_net"))
        );
    }

    #[test]
    fn written_file_matches_returned_document() {
        let (ctx, doc) = run(collection_fs(&[("net_acls.py", PLAIN)], &[]));

        let written =
            ctx.fs.read_to_string(Path::new("/root/acme/net/meta/runtime.yml")).unwrap();
        assert_eq!(written, doc.to_yaml().unwrap());
    }
}
