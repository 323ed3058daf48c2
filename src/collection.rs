//! Collection identity: the `namespace/name` a routing file is generated for.

/// Identity of a collection as given on the command line.
///
/// The raw form is kept for filesystem joins (`acme/net` lays out as
/// `<root>/acme/net/...`); routing targets use the dotted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionId {
    raw: String,
    dotted: String,
}

impl CollectionId {
    /// Parses a slash- or dot-delimited identity.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self { raw: raw.to_string(), dotted: raw.replace('/', ".") }
    }

    /// The identity exactly as supplied.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Dot-separated form, e.g. `acme.net`.
    #[must_use]
    pub fn dotted(&self) -> &str {
        &self.dotted
    }

    /// Last dotted segment, e.g. `net`. Empty when the identity ends in a separator.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.dotted.rsplit('.').next().unwrap_or_default()
    }

    /// Fully-qualified name of a plugin inside this collection.
    #[must_use]
    pub fn qualify(&self, plugin: &str) -> String {
        format!("{}.{plugin}", self.dotted)
    }
}
