// SLW - Sliding Window access classifier
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Fixed-width sliding window of categorized events.
//!
//! The window keeps the last `width` events in a ring and a running total per
//! [`Category`], so that reading a total never rescans the history.
//!
//! ```text
//!   slots: [W, W, R, R, R, W]     head: index of the oldest entry
//!              ^head               len:  number of valid entries (<= width)
//!
//!   oldest            => slots[head]
//!   newest            => slots[(head + len - 1) % width]
//!   advance when full => overwrite slots[head], head += 1
//! ```
//!
//! Invariants, checked by [`SlidingWindow::debug_validate_invariants`]:
//! - `1 <= width` and `len <= width`
//! - `sum(totals) == len`
//! - `totals[c]` equals the number of `c` among the `len` live slots
//!
//! `advance`, `total`, `width` and `reset` are O(1). `resize` reallocates the
//! ring once and replays the retained entries oldest-first.

use crate::category::Category;
use crate::config::{UnfilledPolicy, WindowConfig, DEFAULT_WIDTH};
use crate::error::{Result, SlwError};
use crate::metrics::WindowMetrics;
use std::fmt;

/// Validate a requested width. Zero, negative and out-of-range values are rejected.
fn checked_width<W>(width: W) -> Result<usize>
where
    W: TryInto<usize> + Copy + fmt::Display,
{
    match width.try_into() {
        Ok(w) if w > 0 => Ok(w),
        _ => Err(SlwError::invalid_capacity(width)),
    }
}

/// Allocate an arena of `width` vacant slots, rejecting widths the allocator cannot serve.
fn alloc_slots(width: usize) -> Result<Box<[Category]>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(width)
        .map_err(|_| SlwError::invalid_capacity(width))?;
    slots.resize(width, Category::None);
    Ok(slots.into_boxed_slice())
}

/// Reported per-category totals at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot {
    /// Window width
    pub width: usize,
    /// Number of recorded events in the window
    pub len: usize,
    /// Reported `None` total (includes vacant slots under `CountAsNone`)
    pub none: usize,
    /// Reads in the window
    pub read: usize,
    /// Writes in the window
    pub write: usize,
}

impl WindowSnapshot {
    /// Reported total for one category.
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::None => self.none,
            Category::Read => self.read,
            Category::Write => self.write,
        }
    }

    /// Reads plus writes.
    pub fn io(&self) -> usize {
        self.read + self.write
    }
}

/// Sliding window over the most recent events with exact per-category totals.
///
/// A window has a single owner; share it across threads by wrapping it in a
/// `Mutex` at the call site.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    /// Ring storage, its length is the width.
    slots: Box<[Category]>,
    /// Index of the oldest live entry.
    head: usize,
    /// Number of live entries.
    len: usize,
    /// Count of each category among live entries, indexed by `Category::index`.
    totals: [usize; Category::COUNT],
    unfilled: UnfilledPolicy,
    metrics: WindowMetrics,
}

impl SlidingWindow {
    /// Create an empty window retaining at most `width` events.
    ///
    /// Fails with [`SlwError::InvalidCapacity`] if `width` is zero, negative
    /// or too large to allocate.
    pub fn new<W>(width: W) -> Result<Self>
    where
        W: TryInto<usize> + Copy + fmt::Display,
    {
        let slots = alloc_slots(checked_width(width)?)?;
        Ok(Self::from_slots(slots, UnfilledPolicy::default()))
    }

    /// Create an empty window from a configuration
    pub fn with_config(config: WindowConfig) -> Result<Self> {
        config.validate()?;
        let slots = alloc_slots(config.width)?;
        Ok(Self::from_slots(slots, config.unfilled))
    }

    fn from_slots(slots: Box<[Category]>, unfilled: UnfilledPolicy) -> Self {
        Self {
            slots,
            head: 0,
            len: 0,
            totals: [0; Category::COUNT],
            unfilled,
            metrics: WindowMetrics::new(),
        }
    }

    /// Current width (maximum number of retained events).
    #[inline]
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// Number of events currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once the next advance will evict the oldest entry.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.width()
    }

    /// Slots not yet written since the last reset or growth.
    #[inline]
    pub fn vacant(&self) -> usize {
        self.width() - self.len
    }

    pub fn unfilled_policy(&self) -> UnfilledPolicy {
        self.unfilled
    }

    pub fn set_unfilled_policy(&mut self, unfilled: UnfilledPolicy) {
        self.unfilled = unfilled;
    }

    /// Configuration that would rebuild a window of the same shape.
    pub fn config(&self) -> WindowConfig {
        WindowConfig {
            width: self.width(),
            unfilled: self.unfilled,
        }
    }

    #[inline]
    fn slot(&self, offset: usize) -> usize {
        let idx = self.head + offset;
        if idx >= self.slots.len() {
            idx - self.slots.len()
        } else {
            idx
        }
    }

    /// Record one event as the newest entry, evicting the oldest if the window is full.
    #[inline]
    pub fn advance(&mut self, category: Category) {
        let evicted = self.is_full();
        if evicted {
            let oldest = self.slots[self.head];
            self.totals[oldest.index()] -= 1;
            self.slots[self.head] = category;
            self.head = self.slot(1);
        } else {
            let tail = self.slot(self.len);
            self.slots[tail] = category;
            self.len += 1;
        }
        self.totals[category.index()] += 1;
        self.metrics.record_advance(evicted);
    }

    /// Record `count` events of the same category.
    pub fn advance_n(&mut self, category: Category, count: usize) {
        for _ in 0..count {
            self.advance(category);
        }
    }

    /// Drop the oldest entry, if any.
    fn evict_oldest(&mut self) -> Option<Category> {
        if self.len == 0 {
            return None;
        }
        let oldest = self.slots[self.head];
        self.totals[oldest.index()] -= 1;
        self.head = self.slot(1);
        self.len -= 1;
        Some(oldest)
    }

    /// Reported total for `category`.
    ///
    /// Under [`UnfilledPolicy::CountAsNone`] vacant slots are added to the
    /// `None` total; `Read` and `Write` are always exact event counts.
    #[inline]
    pub fn total(&self, category: Category) -> usize {
        let recorded = self.totals[category.index()];
        match (category, self.unfilled) {
            (Category::None, UnfilledPolicy::CountAsNone) => recorded + self.vacant(),
            _ => recorded,
        }
    }

    /// Number of recorded events of `category`, ignoring the unfilled policy.
    #[inline]
    pub fn recorded(&self, category: Category) -> usize {
        self.totals[category.index()]
    }

    /// Change the width.
    ///
    /// Shrinking below the occupancy evicts the oldest entries until the
    /// window fits. Growing never touches the recorded events. A rejected
    /// width, including one too large to allocate, leaves the window unchanged.
    pub fn resize<W>(&mut self, width: W) -> Result<()>
    where
        W: TryInto<usize> + Copy + fmt::Display,
    {
        // The new arena is allocated before anything is evicted.
        let prepared = checked_width(width).and_then(|w| {
            if w == self.width() {
                Ok((w, None))
            } else {
                alloc_slots(w).map(|slots| (w, Some(slots)))
            }
        });
        let (new_width, new_slots) = match prepared {
            Ok(prepared) => prepared,
            Err(err) => {
                #[cfg(feature = "logging")]
                log::warn!("rejected window resize to {} (width stays {})", width, self.width());
                self.metrics.record_rejected_resize();
                return Err(err);
            }
        };

        let evicted = self.len.saturating_sub(new_width);
        for _ in 0..evicted {
            let _category = self.evict_oldest();
            #[cfg(feature = "logging")]
            log::trace!("shrink evicted {:?}", _category);
        }

        if let Some(mut slots) = new_slots {
            for (slot, category) in slots.iter_mut().zip(self.iter()) {
                *slot = category;
            }
            #[cfg(feature = "logging")]
            log::debug!(
                "window resized {} -> {} ({} evicted, {} retained)",
                self.width(),
                new_width,
                evicted,
                self.len
            );
            self.slots = slots;
            self.head = 0;
        }

        self.metrics.record_resize(evicted);
        Ok(())
    }

    /// Empty the window and zero every total. The width is kept.
    pub fn reset(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("window reset ({} events dropped, width {})", self.len, self.width());
        self.head = 0;
        self.len = 0;
        self.totals = [0; Category::COUNT];
        self.metrics.record_reset();
    }

    /// Live entries, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Category> + ExactSizeIterator + '_ {
        (0..self.len).map(move |offset| self.slots[self.slot(offset)])
    }

    /// Most recently recorded event.
    pub fn newest(&self) -> Option<Category> {
        if self.len == 0 {
            return None;
        }
        Some(self.slots[self.slot(self.len - 1)])
    }

    /// Oldest event still in the window.
    pub fn oldest(&self) -> Option<Category> {
        if self.len == 0 {
            return None;
        }
        Some(self.slots[self.head])
    }

    /// Reported totals, width and occupancy.
    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            width: self.width(),
            len: self.len,
            none: self.total(Category::None),
            read: self.total(Category::Read),
            write: self.total(Category::Write),
        }
    }

    /// Lifetime counters.
    pub fn metrics(&self) -> &WindowMetrics {
        &self.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Recount the live entries and assert every structural invariant.
    ///
    /// O(len); meant for tests and debugging, panics on a violated invariant.
    pub fn debug_validate_invariants(&self) {
        assert!(self.width() >= 1, "width must be positive");
        assert!(self.len <= self.width(), "len {} > width {}", self.len, self.width());
        assert!(self.head < self.width(), "head {} out of range", self.head);
        assert_eq!(self.totals.iter().sum::<usize>(), self.len);

        let mut recount = [0usize; Category::COUNT];
        for category in self.iter() {
            recount[category.index()] += 1;
        }
        assert_eq!(recount, self.totals, "running totals drifted from history");
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::from_slots(
            vec![Category::None; DEFAULT_WIDTH].into_boxed_slice(),
            UnfilledPolicy::default(),
        )
    }
}
