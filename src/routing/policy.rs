//! Fixed policy constants for runtime metadata generation.

/// Immutable policy values threaded through derivation and formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingPolicy {
    /// Minimum platform version written as `requires_ansible`.
    pub requires_ansible: String,
    /// Years between deprecation and earliest removal.
    pub deprecation_cycle_years: i32,
    /// Removal dates are rounded up to a multiple of this many months.
    pub removal_frequency_months: u32,
    /// Day-of-month text used in removal dates.
    pub removal_day: String,
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self {
            requires_ansible: ">=2.9".to_string(),
            deprecation_cycle_years: 2,
            removal_frequency_months: 3,
            removal_day: "01".to_string(),
        }
    }
}
