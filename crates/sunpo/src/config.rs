use serde::{Deserialize, Serialize};

/// Scaling baselines and knobs.
///
/// Values are design points. The defaults describe the reference screen
/// the design tokens were authored against (a 375×812 iPhone-class phone).
/// Values are not validated; degenerate settings flow through the formulas
/// and produce degenerate numbers rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Width of the reference screen.
    pub base_width: f64,
    /// Height of the reference screen.
    pub base_height: f64,
    /// How strongly scaled sizes follow the screen: 0 keeps design sizes
    /// as-is, 1 scales fully proportionally.
    pub scaling_factor: f64,
    /// Normalized width at and above which a device counts as a tablet
    /// when the host does not say.
    pub tablet_breakpoint: f64,
    /// Base unit of the spacing scale.
    pub spacing_base: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            base_width: 375.0,
            base_height: 812.0,
            scaling_factor: 0.5,
            tablet_breakpoint: 768.0,
            spacing_base: 4.0,
        }
    }
}

/// Partial configuration patch.
///
/// Applying overrides always starts from [`MetricsConfig::default`], never
/// from the previously active value, so omitted fields reset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub base_width: Option<f64>,
    pub base_height: Option<f64>,
    pub scaling_factor: Option<f64>,
    pub tablet_breakpoint: Option<f64>,
    pub spacing_base: Option<f64>,
}

impl ConfigOverrides {
    /// The default configuration with these overrides applied on top.
    pub fn apply(self) -> MetricsConfig {
        let defaults = MetricsConfig::default();
        MetricsConfig {
            base_width: self.base_width.unwrap_or(defaults.base_width),
            base_height: self.base_height.unwrap_or(defaults.base_height),
            scaling_factor: self.scaling_factor.unwrap_or(defaults.scaling_factor),
            tablet_breakpoint: self.tablet_breakpoint.unwrap_or(defaults.tablet_breakpoint),
            spacing_base: self.spacing_base.unwrap_or(defaults.spacing_base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MetricsConfig::default();
        assert_eq!(config.base_width, 375.0);
        assert_eq!(config.base_height, 812.0);
        assert_eq!(config.scaling_factor, 0.5);
        assert_eq!(config.tablet_breakpoint, 768.0);
        assert_eq!(config.spacing_base, 4.0);
    }

    #[test]
    fn test_overrides_merge_over_defaults() {
        let config = ConfigOverrides {
            base_width: Some(414.0),
            ..Default::default()
        }
        .apply();

        assert_eq!(config.base_width, 414.0);
        assert_eq!(config.base_height, 812.0);
        assert_eq!(config.spacing_base, 4.0);
    }

    #[test]
    fn test_empty_overrides_are_defaults() {
        assert_eq!(ConfigOverrides::default().apply(), MetricsConfig::default());
    }

    #[test]
    fn test_partial_overrides_deserialize() {
        let overrides: ConfigOverrides = serde_json::from_str(r#"{ "spacing_base": 8.0 }"#).unwrap();
        let config = overrides.apply();
        assert_eq!(config.spacing_base, 8.0);
        assert_eq!(config.base_width, 375.0);
    }

    #[test]
    fn test_degenerate_values_pass_through() {
        let config = ConfigOverrides {
            base_width: Some(0.0),
            ..Default::default()
        }
        .apply();
        assert_eq!(config.base_width, 0.0);
    }

    #[test]
    fn test_roundtrip() {
        let config = MetricsConfig::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: MetricsConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }
}
