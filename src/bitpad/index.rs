//! # Display Indexing
//!
//! Bits have stable UUIDs at the storage level, which are hostile to
//! typing. Listings therefore carry ergonomic display indexes: `1`, `2`,
//! … address the signed-in user's bits in recency order, and `e1`, `e2`,
//! … address the public explore listing. A raw UUID is always accepted
//! wherever an index is.
//!
//! Indexes are positions in a listing, so they shift as bits change—they
//! are a UI convenience, never persisted.

use crate::model::Bit;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A user-facing index into one of the two listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    /// Position in the signed-in user's listing.
    Mine(usize),
    /// Position in the public explore listing (`e` prefix).
    Public(usize),
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayIndex::Mine(i) => write!(f, "{}", i),
            DisplayIndex::Public(i) => write!(f, "e{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('e') {
            if let Ok(n) = rest.parse() {
                return Ok(DisplayIndex::Public(n));
            }
        }
        if let Ok(n) = s.parse() {
            return Ok(DisplayIndex::Mine(n));
        }
        Err(format!("Invalid index: {}", s))
    }
}

/// User input selecting a bit: a display index or a raw id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSelector {
    Index(DisplayIndex),
    Id(Uuid),
}

impl fmt::Display for BitSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitSelector::Index(idx) => write!(f, "{}", idx),
            BitSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for BitSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(BitSelector::Id(id));
        }
        s.parse::<DisplayIndex>().map(BitSelector::Index)
    }
}

#[derive(Debug, Clone)]
pub struct DisplayBit {
    pub bit: Bit,
    pub index: DisplayIndex,
}

/// Assigns `1..` indexes to an owner listing (already in recency order).
pub fn index_mine(bits: Vec<&Bit>) -> Vec<DisplayBit> {
    bits.into_iter()
        .enumerate()
        .map(|(i, bit)| DisplayBit {
            bit: bit.clone(),
            index: DisplayIndex::Mine(i + 1),
        })
        .collect()
}

/// Assigns `e1..` indexes to the public listing (already in recency order).
pub fn index_public(bits: Vec<&Bit>) -> Vec<DisplayBit> {
    bits.into_iter()
        .enumerate()
        .map(|(i, bit)| DisplayBit {
            bit: bit.clone(),
            index: DisplayIndex::Public(i + 1),
        })
        .collect()
}
