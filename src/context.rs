//! Service context bundling the port trait objects and policy.

use crate::docs::{MetadataExtractor, PythonDocExtractor};
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::routing::RoutingPolicy;

/// Bundles the external boundaries and fixed policy into a single context.
///
/// Constructors wire up different implementations; tests swap in a fixed
/// clock and an in-memory filesystem.
pub struct ServiceContext {
    /// Clock for obtaining today's date.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Extractor for embedded module documentation.
    pub extractor: Box<dyn MetadataExtractor>,
    /// Policy constants for the generated file.
    pub policy: RoutingPolicy,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock and real disk.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::filesystem::LiveFileSystem;

        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            extractor: Box::new(PythonDocExtractor::default()),
            policy: RoutingPolicy::default(),
        }
    }
}
