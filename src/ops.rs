//! Replayable window operations
//!
//! A [`WindowOp`] sequence describes an I/O trace interleaved with policy
//! changes. Replaying it drives a window exactly as a caller would.

use crate::category::Category;
use crate::error::Result;
use crate::window::SlidingWindow;

/// One step applied to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowOp {
    /// Burst of `count` events of one category
    Io { category: Category, count: usize },
    /// Change the width (signed so that invalid requests can be replayed)
    Resize(i64),
    /// Start a fresh observation epoch
    Reset,
    /// Does nothing
    Noop,
}

impl WindowOp {
    pub fn io(category: Category, count: usize) -> Self {
        WindowOp::Io { category, count }
    }

    pub fn reads(count: usize) -> Self {
        Self::io(Category::Read, count)
    }

    pub fn writes(count: usize) -> Self {
        Self::io(Category::Write, count)
    }

    pub fn nones(count: usize) -> Self {
        Self::io(Category::None, count)
    }
}

impl SlidingWindow {
    /// Apply one operation. Only `Resize` can fail, leaving the window unchanged.
    pub fn apply(&mut self, op: &WindowOp) -> Result<()> {
        match *op {
            WindowOp::Io { category, count } => self.advance_n(category, count),
            WindowOp::Resize(width) => self.resize(width)?,
            WindowOp::Reset => self.reset(),
            WindowOp::Noop => {}
        }
        Ok(())
    }

    /// Apply operations in order, stopping at the first failure.
    pub fn replay<'a, I>(&mut self, ops: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a WindowOp>,
    {
        for op in ops {
            self.apply(op)?;
        }
        Ok(())
    }
}
