// SLW - Sliding Window access classifier
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Event categories recorded by the window.

use crate::error::SlwError;
use std::fmt;
use std::str::FromStr;

/// Classification tag of one recorded event.
///
/// The set is closed: the per-category totals are stored in a fixed array
/// indexed by [`Category::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Untyped or idle tick
    #[default]
    None,
    /// Read access
    Read,
    /// Write access
    Write,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 3;

    /// All categories, in index order.
    pub const ALL: [Category; Category::COUNT] = [Category::None, Category::Read, Category::Write];

    /// Stable slot of this category in a totals array.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Category::None => 0,
            Category::Read => 1,
            Category::Write => 2,
        }
    }

    /// Lowercase name, as used by `Display` and accepted by `FromStr`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::None => "none",
            Category::Read => "read",
            Category::Write => "write",
        }
    }

    /// True for `Read` and `Write`.
    pub const fn is_io(self) -> bool {
        !matches!(self, Category::None)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, surrounding whitespace ignored. Besides the full names,
/// `r` and `w` are accepted as short forms of `read` and `write`.
impl FromStr for Category {
    type Err = SlwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Category::None),
            "read" | "r" => Ok(Category::Read),
            "write" | "w" => Ok(Category::Write),
            _ => Err(SlwError::UnknownCategory(s.to_string())),
        }
    }
}
