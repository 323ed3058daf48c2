//! Deprecation warning text with a computed removal date.

use chrono::{Datelike, NaiveDate};

use super::policy::RoutingPolicy;

/// Builds the warning shown when a deprecated plugin is loaded.
///
/// The removal date is `cycle` years out, with the month rounded up to the
/// next multiple of the removal frequency. A month already on a boundary is
/// kept as is. Numbers are not zero-padded.
#[must_use]
pub fn format_warning(plugin_name: &str, as_of: NaiveDate, policy: &RoutingPolicy) -> String {
    let year = as_of.year() + policy.deprecation_cycle_years;
    let month = removal_month(as_of.month(), policy.removal_frequency_months);
    format!(
        "{plugin_name} has been deprecated and will be removed in a release after \
         {year}-{month}-{day}. See the plugin documentation for more details",
        day = policy.removal_day,
    )
}

fn removal_month(month: u32, frequency: u32) -> u32 {
    if frequency == 0 {
        return month;
    }
    match month % frequency {
        0 => month,
        rem => month + frequency - rem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_rounds_up_to_quarter_boundary() {
        let policy = RoutingPolicy::default();
        let text = format_warning("acme.net.net_old", date(2024, 5, 17), &policy);
        assert_eq!(
            text,
            "acme.net.net_old has been deprecated and will be removed in a release after \
             2026-6-01. See the plugin documentation for more details"
        );
    }

    #[test]
    fn boundary_month_is_kept() {
        let policy = RoutingPolicy::default();
        let text = format_warning("acme.net.net_old", date(2024, 6, 30), &policy);
        assert!(text.contains("after 2026-6-01."));
    }

    #[test]
    fn every_month_maps_into_same_year() {
        let expected = [3, 3, 3, 6, 6, 6, 9, 9, 9, 12, 12, 12];
        for (month, want) in (1..=12).zip(expected) {
            assert_eq!(removal_month(month, 3), want, "month {month}");
        }
    }

    #[test]
    fn single_digit_months_are_not_padded() {
        let text = format_warning("a.b.c", date(2023, 1, 1), &RoutingPolicy::default());
        assert!(text.contains("after 2025-3-01."));
    }
}
