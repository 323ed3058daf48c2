//! Routing derivation from module descriptors.

use chrono::NaiveDate;
use tracing::{error, info};

use super::deprecation::format_warning;
use super::module::ModuleDescriptor;
use super::policy::RoutingPolicy;
use super::{PluginRouting, RouteEntry};
use crate::collection::CollectionId;

/// Derives the plugin routing for `collection` from its modules.
///
/// Modules are applied in slice order and later writes to the same name win,
/// so callers pass them sorted by file name. For each module:
///
/// - a matching action plugin plus a collection-branded prefix redirects both
///   the full and short module names to `<collection>.<prefix>` under `action`;
/// - a collection-branded, non-deprecated module gets a `modules` redirect from
///   its short name to its full name;
/// - a deprecated module gets a `modules` deprecation notice under its full name.
#[must_use]
pub fn derive_routing(
    collection: &CollectionId,
    modules: &[ModuleDescriptor],
    as_of: NaiveDate,
    policy: &RoutingPolicy,
) -> PluginRouting {
    let collection_name = collection.short_name();
    if collection_name.is_empty() {
        error!("failed to get collection name from {}", collection.dotted());
    }

    let mut routing = PluginRouting::default();
    for module in modules {
        info!("processing runtime.yml for module {}", module.module_name());

        let branded = module.module_prefix() == collection_name;

        if branded && module.has_matching_action_plugin() {
            let target = collection.qualify(module.module_prefix());
            routing.action.insert(module.module_name(), RouteEntry::redirect(&target));
            routing.action.insert(module.short_name(), RouteEntry::redirect(target));
        }

        if branded && !module.is_deprecated() {
            routing.modules.insert(
                module.short_name(),
                RouteEntry::redirect(collection.qualify(module.module_name())),
            );
        }

        if module.is_deprecated() {
            info!("found {} to be deprecated", module.module_name());
            let warning = format_warning(&collection.qualify(module.module_name()), as_of, policy);
            routing.modules.insert(module.module_name(), RouteEntry::deprecation(warning));
        }
    }
    routing
}
