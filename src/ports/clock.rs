//! Clock port for obtaining the current date.

use chrono::NaiveDate;

/// Provides the current calendar date.
///
/// Deprecation removal dates are computed relative to "today", so tests
/// substitute a fixed clock to pin the generated warning text.
pub trait Clock: Send + Sync {
    /// Returns today's date in the local calendar.
    fn today(&self) -> NaiveDate;
}
