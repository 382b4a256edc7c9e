// SLW - Sliding Window access classifier
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Configuration types for SLW

use crate::error::{Result, SlwError};

/// Default window width (number of retained events)
pub const DEFAULT_WIDTH: usize = 20;

/// How slots that have not been written yet are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnfilledPolicy {
    /// Unfilled slots belong to no category; totals sum to the occupancy.
    #[default]
    Ignore,
    /// Unfilled slots are reported as `Category::None` up to the width.
    /// Only the value returned for `None` changes; stored totals do not.
    CountAsNone,
}

/// Window-level configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowConfig {
    /// Maximum number of retained events (default: 20)
    pub width: usize,

    /// Reporting of slots not yet written (default: Ignore)
    pub unfilled: UnfilledPolicy,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            unfilled: UnfilledPolicy::Ignore,
        }
    }
}

impl WindowConfig {
    /// Create a configuration with a custom width
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Create a configuration with a custom unfilled-slot policy
    pub fn with_unfilled(unfilled: UnfilledPolicy) -> Self {
        Self {
            unfilled,
            ..Default::default()
        }
    }

    /// Check that the configuration describes a usable window
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(SlwError::invalid_capacity(self.width));
        }
        Ok(())
    }
}

/// Thresholds used by [`crate::classify::HotnessClassifier`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HotnessThresholds {
    /// Below this share of I/O events over the width the window is idle (default: 0.10)
    pub idle_ratio: f64,

    /// Share of reads (or writes) among I/O events to call it hot (default: 0.70)
    pub hot_ratio: f64,
}

impl Default for HotnessThresholds {
    fn default() -> Self {
        Self {
            idle_ratio: 0.10,
            hot_ratio: 0.70,
        }
    }
}

impl HotnessThresholds {
    /// Check that both ratios are usable
    ///
    /// `idle_ratio` must lie in `[0.0, 1.0]` and `hot_ratio` in `(0.5, 1.0]`,
    /// so that at most one direction can be hot. NaN is rejected.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.idle_ratio) {
            return Err(SlwError::InvalidThresholds(format!(
                "idle_ratio {} outside [0, 1]",
                self.idle_ratio
            )));
        }
        if !(self.hot_ratio > 0.5 && self.hot_ratio <= 1.0) {
            return Err(SlwError::InvalidThresholds(format!(
                "hot_ratio {} outside (0.5, 1]",
                self.hot_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_default() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 20);
        assert_eq!(config.unfilled, UnfilledPolicy::Ignore);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_window_config_with_width() {
        let config = WindowConfig::with_width(64);
        assert_eq!(config.width, 64);
        assert_eq!(config.unfilled, UnfilledPolicy::Ignore);
    }

    #[test]
    fn test_window_config_zero_width_rejected() {
        let config = WindowConfig::with_width(0);
        assert!(matches!(
            config.validate(),
            Err(SlwError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn test_hotness_thresholds_default() {
        let thresholds = HotnessThresholds::default();
        assert!(thresholds.idle_ratio < thresholds.hot_ratio);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_hotness_thresholds_rejects_nan_and_out_of_range() {
        let rejected = [
            HotnessThresholds {
                idle_ratio: f64::NAN,
                ..Default::default()
            },
            HotnessThresholds {
                hot_ratio: f64::NAN,
                ..Default::default()
            },
            HotnessThresholds {
                idle_ratio: -0.1,
                ..Default::default()
            },
            HotnessThresholds {
                idle_ratio: 1.5,
                ..Default::default()
            },
            HotnessThresholds {
                hot_ratio: 0.5,
                ..Default::default()
            },
            HotnessThresholds {
                hot_ratio: f64::INFINITY,
                ..Default::default()
            },
        ];
        for thresholds in rejected {
            assert!(
                matches!(thresholds.validate(), Err(SlwError::InvalidThresholds(_))),
                "{:?} should be rejected",
                thresholds
            );
        }

        let edges = HotnessThresholds {
            idle_ratio: 0.0,
            hot_ratio: 1.0,
        };
        assert!(edges.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_window_config_json() {
        let config: WindowConfig = serde_json::from_str(r#"{ "unfilled": "CountAsNone" }"#)
            .expect("config should parse");
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.unfilled, UnfilledPolicy::CountAsNone);

        let json = serde_json::to_string(&config).expect("config should serialize");
        let restored: WindowConfig = serde_json::from_str(&json).expect("roundtrip");
        assert_eq!(restored, config);
    }
}
