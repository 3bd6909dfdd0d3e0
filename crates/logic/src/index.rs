//! Positions in a displayed list.

use core::str::FromStr;

use crate::error::ParseError;

/// A position in a displayed list, entered one-based and stored zero-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    /// Returns `None` for zero.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }

    /// Picks the element at this position, if there is one.
    pub fn pick<'a, T>(&self, items: &[&'a T]) -> Option<&'a T> {
        items.get(self.0).copied()
    }
}

impl FromStr for Index {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::InvalidIndex);
        }
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(Self::from_one_based)
            .ok_or(ParseError::InvalidIndex)
    }
}

impl core::fmt::Display for Index {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
