use serde::{Deserialize, Serialize};

/// Nesting limit applied when no explicit value is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Maximum object nesting below the validated root. Deeper input is
    /// reported as `recursion-depth-exceeded` instead of being walked.
    pub max_depth: usize,
    /// Report `Period.end` preceding `Period.start` as a warning.
    pub check_period_order: bool,
    /// Keep validating after the first error.
    pub collect_all: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            check_period_order: true,
            collect_all: true,
        }
    }
}

impl ValidatorConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_period_order_check(mut self, enabled: bool) -> Self {
        self.check_period_order = enabled;
        self
    }

    /// Stop at the first error instead of collecting every violation.
    pub fn fail_fast(mut self) -> Self {
        self.collect_all = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ValidatorConfig = serde_json::from_str(r#"{"maxDepth": 8}"#).unwrap();
        assert_eq!(config.max_depth, 8);
        assert!(config.check_period_order);
        assert!(config.collect_all);
    }

    #[test]
    fn test_builder_methods() {
        let config = ValidatorConfig::default()
            .with_max_depth(3)
            .with_period_order_check(false)
            .fail_fast();
        assert_eq!(config.max_depth, 3);
        assert!(!config.check_period_order);
        assert!(!config.collect_all);
    }
}
