//! Tracker and observer configuration.

use serde::{Deserialize, Serialize};

/// Default manual-override suppression window in milliseconds.
///
/// Long enough for a smooth programmatic scroll to settle before passive
/// observation regains authority.
pub const DEFAULT_SUPPRESS_MS: u64 = 1400;

/// Options passed to the host's intersection observation capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObserverOptions {
    /// Margin applied to the observation root, CSS margin syntax.
    ///
    /// The default pulls the intersection "center line" above the true
    /// viewport middle so a section counts as active slightly before it
    /// reaches visual center, compensating for the sticky nav bar.
    pub root_margin: String,

    /// Intersection ratios at which the host reports a change.
    pub thresholds: Vec<f32>,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin: "-35% 0px -50% 0px".to_string(),
            thresholds: vec![0.0, 0.1, 0.25, 0.5, 0.75, 1.0],
        }
    }
}

/// Configuration for the active-section tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Observation options handed to the host at bind time
    #[serde(default)]
    pub observer: ObserverOptions,

    /// Manual-override suppression window in milliseconds
    #[serde(default = "default_suppress_ms")]
    pub manual_suppress_ms: u64,
}

fn default_suppress_ms() -> u64 {
    DEFAULT_SUPPRESS_MS
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            observer: ObserverOptions::default(),
            manual_suppress_ms: DEFAULT_SUPPRESS_MS,
        }
    }
}

impl TrackerConfig {
    /// Suppression window as a chrono duration.
    pub fn suppress_duration(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.manual_suppress_ms as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_defaults_bias_above_center() {
        let opts = ObserverOptions::default();
        assert_eq!(opts.root_margin, "-35% 0px -50% 0px");
        assert_eq!(opts.thresholds.len(), 6);
        assert_eq!(opts.thresholds[0], 0.0);
        assert_eq!(*opts.thresholds.last().unwrap(), 1.0);
    }

    #[test]
    fn test_tracker_config_default_suppression() {
        let config = TrackerConfig::default();
        assert_eq!(config.manual_suppress_ms, DEFAULT_SUPPRESS_MS);

        // serde fills the same default when the field is absent
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.manual_suppress_ms, DEFAULT_SUPPRESS_MS);
        assert_eq!(
            config.suppress_duration(),
            chrono::Duration::milliseconds(1400)
        );
    }
}
