//! Group label derivation for separated metrics reporting.
//!
//! For each write request, the group is obtained from the configured group
//! label on the first time-series of the batch. Tenants that have not
//! configured a group label get the empty string, which downstream metric
//! pipelines drop.

use serde::{Deserialize, Serialize};

/// A single name/value label pair on a time-series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub value: String,
}

impl Label {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Minimal time-series shape: an ordered label set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub labels: Vec<Label>,
}

impl TimeSeries {
    pub fn new(labels: Vec<Label>) -> Self {
        Self { labels }
    }
}

/// Per-tenant configuration lookups consumed by this module.
pub trait TenantOverrides {
    /// Configured group label name for the tenant; empty disables grouping.
    fn separate_metrics_group_label(&self, tenant_id: &str) -> String;
}

/// Derive the group label value for a batch of time-series.
///
/// Returns `""` for an empty batch or an unconfigured tenant. Otherwise
/// scans the label set of only the first series for a label whose name
/// equals the configured name and returns an owned copy of its value, or
/// `""` on no match. Pure: never mutates or retains references into the
/// input slice, so callers may share it across concurrent readers.
pub fn group_label<O>(overrides: &O, tenant_id: &str, series: &[TimeSeries]) -> String
where
    O: TenantOverrides + ?Sized,
{
    if series.is_empty() {
        return String::new();
    }

    let name = overrides.separate_metrics_group_label(tenant_id);
    if name.is_empty() {
        // Unset label values are dropped downstream
        return name;
    }

    series[0]
        .labels
        .iter()
        .find(|label| label.name == name)
        // Cloned so the result does not borrow from the shared batch
        .map(|label| label.value.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapOverrides(HashMap<String, String>);

    impl MapOverrides {
        fn single(tenant_id: &str, label: &str) -> Self {
            Self(HashMap::from([(tenant_id.to_string(), label.to_string())]))
        }
    }

    impl TenantOverrides for MapOverrides {
        fn separate_metrics_group_label(&self, tenant_id: &str) -> String {
            self.0.get(tenant_id).cloned().unwrap_or_default()
        }
    }

    fn series_with(labels: &[(&str, &str)]) -> TimeSeries {
        TimeSeries::new(labels.iter().map(|(n, v)| Label::new(*n, *v)).collect())
    }

    #[test]
    fn test_empty_series_yields_empty_group() {
        let overrides = MapOverrides::single("tenant-1", "team");
        assert_eq!(group_label(&overrides, "tenant-1", &[]), "");
    }

    #[test]
    fn test_unconfigured_tenant_yields_empty_group() {
        let overrides = MapOverrides(HashMap::new());
        let series = vec![series_with(&[("team", "x")])];
        assert_eq!(group_label(&overrides, "tenant-1", &series), "");
    }

    #[test]
    fn test_only_first_series_is_consulted() {
        let overrides = MapOverrides::single("tenant-1", "team");
        let series = vec![series_with(&[("team", "x")]), series_with(&[("team", "y")])];
        assert_eq!(group_label(&overrides, "tenant-1", &series), "x");
    }

    #[test]
    fn test_first_series_without_label_yields_empty_group() {
        let overrides = MapOverrides::single("tenant-1", "team");
        // Later series carrying the label must not be consulted
        let series = vec![series_with(&[("job", "api")]), series_with(&[("team", "y")])];
        assert_eq!(group_label(&overrides, "tenant-1", &series), "");
    }

    #[test]
    fn test_result_is_owned_copy() {
        let overrides = MapOverrides::single("tenant-1", "team");
        let mut series = vec![series_with(&[("team", "platform")])];

        let value = group_label(&overrides, "tenant-1", &series);
        series[0].labels[0].value.clear();

        assert_eq!(value, "platform");
    }
}
