// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance sparse value storage.
//!
//! This module provides [`ValueStore`] for holding the values an instance sets
//! explicitly. Everything else resolves to the declared default, which lives
//! once in the schema rather than in every instance.
//!
//! # Implementation
//!
//! Entries live in a sorted vector with binary search rather than a hash map:
//!
//! - Better cache locality (contiguous memory)
//! - O(log n) lookup, which is fast for the handful of values a glyph overrides
//! - Inline storage for small override sets via `SmallVec`

use smallvec::SmallVec;

use crate::id::PropertyId;
use crate::value::Value;

/// Default inline capacity for explicitly set values.
///
/// Most glyphs override only their coordinates and a color or two,
/// so this avoids heap allocation in the common case.
const INLINE_CAPACITY: usize = 8;

/// Sparse storage for explicitly set property values.
///
/// # Example
///
/// ```rust
/// use canopy_property::{PropertyId, ValueStore, Value};
///
/// let x = PropertyId::new(0);
/// let mut store = ValueStore::new();
///
/// // No value set
/// assert!(store.get(x).is_none());
///
/// store.set(x, Value::Float(1.5));
/// assert_eq!(store.get(x), Some(&Value::Float(1.5)));
///
/// // Clearing falls back to "unset"
/// assert_eq!(store.clear(x), Some(Value::Float(1.5)));
/// assert!(store.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ValueStore {
    /// Sorted by [`PropertyId`] for binary search lookup.
    entries: SmallVec<[(PropertyId, Value); INLINE_CAPACITY]>,
}

impl ValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no values are set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of values set.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn find(&self, id: PropertyId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&id, |(pid, _)| *pid)
    }

    /// Returns the value set for `id`, if any.
    #[must_use]
    pub fn get(&self, id: PropertyId) -> Option<&Value> {
        self.find(id).ok().map(|idx| &self.entries[idx].1)
    }

    /// Returns `true` if a value is set for `id`.
    #[must_use]
    pub fn contains(&self, id: PropertyId) -> bool {
        self.find(id).is_ok()
    }

    /// Sets the value for `id`, returning the previous one.
    pub fn set(&mut self, id: PropertyId, value: Value) -> Option<Value> {
        match self.find(id) {
            Ok(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (id, value));
                None
            }
        }
    }

    /// Removes the value for `id`, returning it.
    pub fn clear(&mut self, id: PropertyId) -> Option<Value> {
        self.find(id).ok().map(|idx| self.entries.remove(idx).1)
    }

    /// Removes every value.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Returns the set values in [`PropertyId`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &Value)> + '_ {
        self.entries.iter().map(|(id, value)| (*id, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn store_new_is_empty() {
        let store = ValueStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn store_set_replaces() {
        let id = PropertyId::new(3);
        let mut store = ValueStore::new();

        assert_eq!(store.set(id, Value::Int(1)), None);
        assert_eq!(store.set(id, Value::Int(2)), Some(Value::Int(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id), Some(&Value::Int(2)));
        assert!(store.contains(id));
    }

    #[test]
    fn store_keeps_entries_sorted() {
        let mut store = ValueStore::new();
        store.set(PropertyId::new(5), Value::Int(5));
        store.set(PropertyId::new(1), Value::Int(1));
        store.set(PropertyId::new(3), Value::Int(3));

        let ids: Vec<_> = store.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, [1, 3, 5]);
    }

    #[test]
    fn store_clear() {
        let mut store = ValueStore::new();
        store.set(PropertyId::new(0), Value::Bool(true));
        store.set(PropertyId::new(1), Value::Bool(false));

        assert_eq!(store.clear(PropertyId::new(0)), Some(Value::Bool(true)));
        assert_eq!(store.clear(PropertyId::new(0)), None);
        assert!(!store.contains(PropertyId::new(0)));

        store.clear_all();
        assert!(store.is_empty());
    }

    #[test]
    fn store_spills_past_inline_capacity() {
        let mut store = ValueStore::new();
        for i in 0..20 {
            store.set(PropertyId::new(i), Value::Int(i64::from(i)));
        }
        assert_eq!(store.len(), 20);
        assert_eq!(store.get(PropertyId::new(19)), Some(&Value::Int(19)));
    }
}
