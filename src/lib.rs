//! # SLW - Sliding Window access classifier
//!
//! A fixed-width history of categorized I/O events (none, read, write) with an
//! exact running total per category. Storage and caching layers use it to tell
//! from recent history whether a region is read-hot, write-hot or idle without
//! rescanning that history on every query.
//!
//! ## Key Features
//!
//! - **O(1) hot path**: `advance` evicts and inserts with incremental totals
//! - **Dynamic width**: `resize` drops only the oldest entries when shrinking
//! - **Explicit unfilled-slot policy**: vacant slots are ignored or reported as `None`
//! - **Hotness classification**: ratio thresholds over the window totals
//!
//! ## Quick Start
//!
//! ```rust
//! use slw::{Category, SlidingWindow};
//!
//! let mut window = SlidingWindow::new(20).unwrap();
//!
//! window.advance_n(Category::Write, 15);
//! window.advance(Category::Read);
//! window.advance_n(Category::Write, 5);
//! window.advance_n(Category::Read, 3);
//!
//! // 24 events into a width of 20: the 4 oldest writes were evicted
//! assert_eq!(window.total(Category::Read), 4);
//! assert_eq!(window.total(Category::Write), 16);
//! assert_eq!(window.total(Category::None), 0);
//!
//! // Shrinking keeps the newest entries
//! window.resize(3).unwrap();
//! assert_eq!(window.total(Category::Read), 3);
//!
//! // Zero and negative widths are rejected without touching the window
//! assert!(window.resize(0).is_err());
//! assert_eq!(window.width(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`category`]: Event categories
//! - [`window`]: The sliding window and its snapshots
//! - [`config`]: Window configuration and classifier thresholds
//! - [`ops`]: Replayable operation sequences
//! - [`classify`]: Hotness classification
//! - [`metrics`]: Lifetime counters
//!
//! ## Features
//!
//! - `logging`: emit `log` records on resize, reset and rejected widths
//! - `serde`: derive `Serialize`/`Deserialize` on config, snapshot and op types

// Modules
pub mod category;
pub mod classify;
pub mod config;
pub mod error;
pub mod metrics;
pub mod ops;
pub mod window;

// Re-exports for convenient access
pub use category::Category;
pub use classify::{Classification, Hotness, HotnessClassifier};
pub use config::{HotnessThresholds, UnfilledPolicy, WindowConfig, DEFAULT_WIDTH};
pub use error::{Result, SlwError};
pub use metrics::WindowMetrics;
pub use ops::WindowOp;
pub use window::{SlidingWindow, WindowSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
