//! The dirt cells of a puzzle and masks over them.
//!
//! A [`DirtSet`] fixes an enumeration of the dirty cells of the original grid
//! (row-major order). A [`DirtMask`] is a bitmask over that enumeration, so a
//! set of cleaned cells has exactly one representation regardless of the
//! order in which the cells were cleaned.
//!
//! # Examples
//!
//! ```
//! use sweepgrid_core::{DirtMask, DirtSet, Position};
//!
//! let dirt = DirtSet::from_positions([Position::new(2, 0), Position::new(0, 1)])?;
//! assert_eq!(dirt.index_of(Position::new(0, 1)), Some(0));
//!
//! let cleaned = DirtMask::EMPTY.with(1).with(0);
//! assert_eq!(cleaned, dirt.full_mask());
//! # Ok::<(), sweepgrid_core::DirtSetError>(())
//! ```

use crate::Position;

/// Errors produced when building a [`DirtSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DirtSetError {
    /// More dirty cells than a [`DirtMask`] can index.
    #[display("{len} dirty cells exceed the limit of {}", DirtSet::MAX_LEN)]
    TooMany {
        /// Number of distinct dirty cells supplied.
        len: usize,
    },
}

/// The fixed, sorted set of dirty cells of a puzzle.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DirtSet {
    cells: Vec<Position>,
}

impl DirtSet {
    /// Maximum number of dirty cells in one set.
    pub const MAX_LEN: usize = 64;

    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from arbitrary positions, sorting and deduplicating them.
    ///
    /// # Errors
    ///
    /// Returns [`DirtSetError::TooMany`] if more than [`Self::MAX_LEN`]
    /// distinct positions are given.
    pub fn from_positions<I>(positions: I) -> Result<Self, DirtSetError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut cells = positions.into_iter().collect::<Vec<_>>();
        cells.sort_unstable();
        cells.dedup();
        if cells.len() > Self::MAX_LEN {
            return Err(DirtSetError::TooMany { len: cells.len() });
        }
        Ok(Self { cells })
    }

    /// Returns the number of dirty cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if there is no dirt at all.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` is dirty.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Returns the enumeration index of `pos`, if it is dirty.
    #[must_use]
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.cells.binary_search(&pos).ok()
    }

    /// Returns the position at enumeration index `index`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<Position> {
        self.cells.get(index).copied()
    }

    /// Returns the dirty cells in enumeration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// Returns the mask in which every cell of this set is cleaned.
    #[must_use]
    #[inline]
    pub fn full_mask(&self) -> DirtMask {
        DirtMask::full(self.cells.len())
    }

    /// Returns the cells not yet present in `cleaned`.
    pub fn remaining(&self, cleaned: DirtMask) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, &pos)| (!cleaned.contains(i)).then_some(pos))
    }
}

impl<'a> IntoIterator for &'a DirtSet {
    type Item = Position;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}

/// A set of [`DirtSet`] indices, stored as a 64-bit mask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirtMask(u64);

impl DirtMask {
    /// The mask with no cell cleaned.
    pub const EMPTY: Self = Self(0);

    /// Returns the mask containing indices `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`DirtSet::MAX_LEN`].
    #[must_use]
    #[inline]
    pub const fn full(len: usize) -> Self {
        assert!(len <= DirtSet::MAX_LEN);
        if len == DirtSet::MAX_LEN {
            Self(u64::MAX)
        } else {
            Self((1 << len) - 1)
        }
    }

    /// Returns the raw bits.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns a copy with `index` added.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`DirtSet::MAX_LEN`].
    #[must_use]
    #[inline]
    pub const fn with(self, index: usize) -> Self {
        assert!(index < DirtSet::MAX_LEN);
        Self(self.0 | (1 << index))
    }

    /// Returns `true` if `index` is in the mask.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index < DirtSet::MAX_LEN && self.0 & (1 << index) != 0
    }

    /// Returns the number of indices in the mask.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the mask is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_positions_sorts_and_dedups() {
        let dirt = DirtSet::from_positions([
            Position::new(1, 1),
            Position::new(0, 3),
            Position::new(1, 1),
        ])
        .unwrap();
        assert_eq!(
            dirt.iter().collect::<Vec<_>>(),
            vec![Position::new(0, 3), Position::new(1, 1)]
        );
        assert_eq!(dirt.index_of(Position::new(1, 1)), Some(1));
        assert_eq!(dirt.index_of(Position::new(2, 2)), None);
    }

    #[test]
    fn test_from_positions_rejects_too_many() {
        let positions = (0..65).map(|col| Position::new(0, col));
        assert_eq!(
            DirtSet::from_positions(positions),
            Err(DirtSetError::TooMany { len: 65 })
        );
        let positions = (0..64).map(|col| Position::new(0, col));
        assert_eq!(DirtSet::from_positions(positions).unwrap().len(), 64);
    }

    #[test]
    fn test_full_mask() {
        assert_eq!(DirtMask::full(0), DirtMask::EMPTY);
        assert_eq!(DirtMask::full(3).bits(), 0b111);
        assert_eq!(DirtMask::full(64).bits(), u64::MAX);
        assert_eq!(DirtMask::full(64).len(), 64);
    }

    #[test]
    fn test_remaining() {
        let dirt = DirtSet::from_positions([
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
        ])
        .unwrap();
        let cleaned = DirtMask::EMPTY.with(1);
        assert_eq!(
            dirt.remaining(cleaned).collect::<Vec<_>>(),
            vec![Position::new(0, 0), Position::new(0, 2)]
        );
        assert_eq!(dirt.remaining(dirt.full_mask()).count(), 0);
    }

    #[test]
    fn test_mask_contains_out_of_range() {
        assert!(!DirtMask::full(64).contains(64));
    }

    proptest! {
        #[test]
        fn mask_is_order_independent(indices in proptest::collection::vec(0usize..64, 0..20)) {
            let forward = indices.iter().fold(DirtMask::EMPTY, |m, &i| m.with(i));
            let backward = indices.iter().rev().fold(DirtMask::EMPTY, |m, &i| m.with(i));
            prop_assert_eq!(forward, backward);
            for &i in &indices {
                prop_assert!(forward.contains(i));
            }
        }
    }
}
