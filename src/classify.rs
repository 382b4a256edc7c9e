// SLW - Sliding Window access classifier
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Access hotness classification
//!
//! This module turns the totals of a window into a hotness signal
//! (idle, read-hot, write-hot or mixed) using configurable ratio thresholds.

use crate::config::HotnessThresholds;
use crate::error::Result;
use crate::window::{SlidingWindow, WindowSnapshot};

/// Access pattern of the recent history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hotness {
    /// Too few reads and writes in the window
    Idle,
    /// Reads dominate
    ReadHot,
    /// Writes dominate
    WriteHot,
    /// Active, no dominant direction
    Mixed,
}

/// Classification result for a window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// Assigned hotness
    pub hotness: Hotness,
    /// Reads over reads + writes (0.0 when there is no I/O)
    pub read_ratio: f64,
    /// Writes over reads + writes (0.0 when there is no I/O)
    pub write_ratio: f64,
    /// Reads + writes over the window width
    pub activity: f64,
}

impl Classification {
    fn idle(activity: f64) -> Self {
        Self {
            hotness: Hotness::Idle,
            read_ratio: 0.0,
            write_ratio: 0.0,
            activity,
        }
    }
}

/// Hotness classifier
#[derive(Debug, Clone, Default)]
pub struct HotnessClassifier {
    thresholds: HotnessThresholds,
}

impl HotnessClassifier {
    /// Create a new classifier with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom thresholds
    ///
    /// Fails with `InvalidThresholds` if either ratio is NaN or out of range.
    pub fn with_thresholds(thresholds: HotnessThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &HotnessThresholds {
        &self.thresholds
    }

    /// Classify the current contents of a window
    pub fn classify(&self, window: &SlidingWindow) -> Classification {
        self.classify_snapshot(&window.snapshot())
    }

    /// Classify previously captured totals
    ///
    /// `None` events, recorded or implied by vacant slots, count as inactivity.
    pub fn classify_snapshot(&self, snapshot: &WindowSnapshot) -> Classification {
        let io = snapshot.io();
        let activity = if snapshot.width == 0 {
            0.0
        } else {
            io as f64 / snapshot.width as f64
        };

        if io == 0 || activity < self.thresholds.idle_ratio {
            return Classification::idle(activity);
        }

        let read_ratio = snapshot.read as f64 / io as f64;
        let write_ratio = snapshot.write as f64 / io as f64;

        let hotness = if read_ratio >= self.thresholds.hot_ratio {
            Hotness::ReadHot
        } else if write_ratio >= self.thresholds.hot_ratio {
            Hotness::WriteHot
        } else {
            Hotness::Mixed
        };

        Classification {
            hotness,
            read_ratio,
            write_ratio,
            activity,
        }
    }
}
