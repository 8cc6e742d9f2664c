use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional surfaces are shown.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the "Go to EcoLearn" button on role dashboards.
    #[serde(default)]
    pub ecolearn: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.ecolearn);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
