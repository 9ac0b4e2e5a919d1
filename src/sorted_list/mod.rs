//! A generic container kept sorted under a pluggable total order.
//!
//! [`SortedList`] wraps a `Vec<T>` and guarantees that its elements are
//! ascending under the comparator policy `O` at all times. The comparator is
//! part of the type, so two lists can only be intersected when they are
//! sorted under the same order.
//!
//! Read access is fully transparent via `Deref<Target = [T]>`, so slice
//! methods (`.len()`, `.iter()`, indexing, `.first()`, `.last()`) are
//! available directly. Mutation goes through [`SortedList::insert`], which
//! re-establishes the invariant on every call.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Deref, Index};

pub mod errors;
pub use errors::ListError;


/// A total order over `T`, carried as a zero-sized policy type.
///
/// Keeping the comparator out of `T` itself decouples collection order from
/// any notion of identity or equality `T` may have elsewhere: a type can be
/// stored under several orders without implementing `Ord`.
pub trait SortOrder<T> {
    fn cmp(a: &T, b: &T) -> Ordering;
}

/// The order given by `T`'s own `Ord` implementation.
#[derive(Debug, Clone, Copy)]
pub struct Natural;

impl<T: Ord> SortOrder<T> for Natural {
    fn cmp(a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A sequence kept ascending under the order `O`.
///
/// Duplicate policy is fixed at construction: [`SortedList::new`] rejects
/// elements equal under the order to an existing one, while
/// [`SortedList::allowing_duplicates`] accepts them. A new element always
/// lands immediately *before* the first element it compares equal to, so
/// among equal elements the most recently inserted occupies the lowest
/// index.
///
/// # Complexity
///
/// - `insert`: O(log n) to locate the slot + O(n) to shift the tail.
/// - `contains`, `get`, `floor`: O(log n).
/// - `intersection`: O(n1 + n2) merge scan.
#[derive(Debug, Clone)]
pub struct SortedList<T, O: SortOrder<T>> {
    items: Vec<T>,
    allow_duplicates: bool,
    _order: PhantomData<O>,
}

impl<T, O: SortOrder<T>> SortedList<T, O> {
    /// Creates an empty list that rejects duplicates under the order.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            allow_duplicates: false,
            _order: PhantomData,
        }
    }

    /// Creates an empty list that accepts elements comparing equal.
    pub fn allowing_duplicates() -> Self {
        Self {
            items: Vec::new(),
            allow_duplicates: true,
            _order: PhantomData,
        }
    }

    /// Index of the first element not less than `key` under the order
    /// (the leftmost insertion point).
    fn lower_bound(&self, key: &T) -> usize {
        self.items
            .partition_point(|x| O::cmp(x, key) == Ordering::Less)
    }

    /// Inserts `item`, keeping the list ascending.
    ///
    /// Equal-under-order elements are inserted before the first existing
    /// equal element. Fails with [`ListError::DuplicateEntry`] when the list
    /// rejects duplicates and an equal element exists; the list is left
    /// unchanged on error.
    pub fn insert(&mut self, item: T) -> Result<(), ListError> {
        let idx = self.lower_bound(&item);
        if !self.allow_duplicates
            && idx < self.items.len()
            && O::cmp(&self.items[idx], &item) == Ordering::Equal
        {
            return Err(ListError::DuplicateEntry);
        }
        self.items.insert(idx, item);
        Ok(())
    }

    /// Returns true if some element compares equal to `key` under the order.
    pub fn contains(&self, key: &T) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the stored element comparing equal to `key` under the order.
    ///
    /// With duplicates present this is the one at the lowest index.
    pub fn get(&self, key: &T) -> Result<&T, ListError> {
        let idx = self.lower_bound(key);
        match self.items.get(idx) {
            Some(item) if O::cmp(item, key) == Ordering::Equal => Ok(item),
            _ => Err(ListError::NotFound),
        }
    }

    /// Returns the exact match for `key` if present, otherwise the greatest
    /// element strictly less than `key`.
    ///
    /// When `key` is greater than every element, that is the last element.
    /// Fails with [`ListError::NotFound`] when the list is empty or `key`
    /// precedes every element without matching the first.
    pub fn floor(&self, key: &T) -> Result<&T, ListError> {
        if self.items.is_empty() {
            return Err(ListError::NotFound);
        }
        let idx = self.lower_bound(key);
        if idx == self.items.len() {
            return Ok(&self.items[idx - 1]);
        }
        if O::cmp(&self.items[idx], key) == Ordering::Equal {
            return Ok(&self.items[idx]);
        }
        match idx.checked_sub(1) {
            Some(prev) => Ok(&self.items[prev]),
            None => Err(ListError::NotFound),
        }
    }

    /// Elements common to both lists under the order, ascending.
    ///
    /// Linear merge scan: advance whichever side is smaller, emit on
    /// equality and advance both. Runs of equal elements collapse to a
    /// single emission, so the result carries no order-duplicates even when
    /// the inputs allow them.
    pub fn intersection(&self, other: &SortedList<T, O>) -> Vec<T>
    where
        T: Clone,
    {
        let mut common = Vec::new();
        let mut i = 0;
        let mut j = 0;
        while i < self.items.len() && j < other.items.len() {
            let a = &self.items[i];
            let b = &other.items[j];
            match O::cmp(a, b) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    let duplicate = common
                        .last()
                        .is_some_and(|last| O::cmp(last, a) == Ordering::Equal);
                    if !duplicate {
                        common.push(a.clone());
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        common
    }

    /// Returns a slice of the elements, ascending under the order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the list and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T, O: SortOrder<T>> Default for SortedList<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: SortOrder<T>> Deref for SortedList<T, O> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T, O: SortOrder<T>> AsRef<[T]> for SortedList<T, O> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T, O: SortOrder<T>> Index<usize> for SortedList<T, O> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T, O: SortOrder<T>> IntoIterator for &'a SortedList<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, O: SortOrder<T>> IntoIterator for SortedList<T, O> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
