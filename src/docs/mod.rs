//! Embedded module documentation: extraction boundary and the parsed block.
//!
//! A module's documentation is a YAML document embedded in its source as a
//! named string literal. Extraction is static: the module is never run.

mod python;

pub use python::PythonDocExtractor;

use serde_yaml::{Mapping, Value};

/// Key whose presence marks a module as deprecated.
const DEPRECATED_KEY: &str = "deprecated";

/// Parsed documentation block of a single module.
#[derive(Debug, Clone, PartialEq)]
pub struct DocBlock {
    mapping: Mapping,
}

impl DocBlock {
    /// Wraps an already-parsed YAML mapping.
    #[must_use]
    pub fn new(mapping: Mapping) -> Self {
        Self { mapping }
    }

    /// Parses YAML text into a documentation block.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML or its root is not a
    /// mapping.
    pub fn from_yaml(text: &str) -> Result<Self, String> {
        let value: Value =
            serde_yaml::from_str(text).map_err(|e| format!("invalid documentation YAML: {e}"))?;
        match value {
            Value::Mapping(mapping) => Ok(Self::new(mapping)),
            other => Err(format!("documentation root is not a mapping: {}", kind_of(&other))),
        }
    }

    /// Returns `true` when the block carries a `deprecated` key, whatever its value.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.mapping.contains_key(DEPRECATED_KEY)
    }

    /// Borrows the underlying mapping.
    #[must_use]
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }
}

/// Pulls a module's documentation block out of its source text.
pub trait MetadataExtractor: Send + Sync {
    /// Returns the documentation block embedded in `source`, or `None` when
    /// there is no usable block.
    fn extract(&self, source: &str) -> Option<DocBlock>;
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
