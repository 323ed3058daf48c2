//! Per-module facts feeding routing derivation.

use crate::docs::DocBlock;

/// Everything routing needs to know about one module file.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDescriptor {
    module_name: String,
    documentation: Option<DocBlock>,
    has_matching_action_plugin: bool,
}

impl ModuleDescriptor {
    /// Creates a descriptor for `module_name` (the file stem).
    #[must_use]
    pub fn new(
        module_name: impl Into<String>,
        documentation: Option<DocBlock>,
        has_matching_action_plugin: bool,
    ) -> Self {
        Self { module_name: module_name.into(), documentation, has_matching_action_plugin }
    }

    /// Returns `true` for module source files; hidden files and package
    /// markers are excluded.
    #[must_use]
    pub fn is_module_file(file_name: &str) -> bool {
        !file_name.starts_with('.')
            && file_name.ends_with(".py")
            && !file_name.ends_with("__init__.py")
    }

    /// Module name for a file: everything before the first `.`.
    #[must_use]
    pub fn module_name_of(file_name: &str) -> &str {
        file_name.split('.').next().unwrap_or(file_name)
    }

    /// Prefix of a module name: text before the first `_`, or the whole name.
    #[must_use]
    pub fn prefix_of(module_name: &str) -> &str {
        module_name.split_once('_').map_or(module_name, |(prefix, _)| prefix)
    }

    /// Full module name.
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Text before the first `_`, or the whole name.
    #[must_use]
    pub fn module_prefix(&self) -> &str {
        Self::prefix_of(&self.module_name)
    }

    /// Text after the first `_`, or the whole name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.module_name.split_once('_').map_or(self.module_name.as_str(), |(_, rest)| rest)
    }

    /// Whether the documentation declares the module deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.documentation.as_ref().is_some_and(DocBlock::is_deprecated)
    }

    /// Whether an action plugin named after the module prefix exists.
    #[must_use]
    pub fn has_matching_action_plugin(&self) -> bool {
        self.has_matching_action_plugin
    }
}
