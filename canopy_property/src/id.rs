// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property identification.
//!
//! This module provides [`PropertyId`], the position of an attribute inside
//! a [`PropertyGroup`](crate::PropertyGroup) or a composed glyph schema.

use core::fmt;

/// A positional property identifier.
///
/// This is a lightweight handle (u16) naming an attribute by its declaration
/// index. Identifiers are only meaningful relative to the group or schema that
/// produced them.
///
/// # Example
///
/// ```rust
/// use canopy_property::PropertyId;
///
/// let id = PropertyId::new(42);
/// assert_eq!(id.index(), 42);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(u16);

impl PropertyId {
    /// Creates a new property ID from the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Creates a property ID from a declaration position.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in a `u16`.
    #[must_use]
    pub fn from_position(index: usize) -> Self {
        let index = u16::try_from(index)
            .unwrap_or_else(|_| panic!("too many properties declared (max {})", u16::MAX));
        Self(index)
    }

    /// Returns the underlying index of this property ID.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Returns the index as a `usize`, for slice access.
    #[must_use]
    #[inline]
    pub const fn position(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyId").field(&self.0).finish()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyId({})", self.0)
    }
}
