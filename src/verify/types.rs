// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make unsorted input unrepresentable.
//!
//! The search functions take any slice and trust the caller to have sorted
//! it. When the input comes from somewhere you don't control, wrap it in
//! [`Sorted`] instead: the O(n) check is paid once at construction and every
//! search afterwards is guaranteed a well-defined answer.
//!
//! # Example
//!
//! ```
//! use flank::verify::Sorted;
//!
//! let sorted = Sorted::new(&[1, 3, 5, 7])?;
//! assert_eq!(sorted.search(&5), Some(2));
//!
//! assert!(Sorted::new(&[3, 1]).is_err());
//! # Ok::<(), flank::verify::InvariantError>(())
//! ```

use std::fmt;
use std::ops::Deref;

use crate::search::{classic, neighbor};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `slice[position - 1] > slice[position]`.
    Unsorted { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Unsorted { position } => {
                write!(
                    f,
                    "input not sorted: element {} is smaller than element {}",
                    position,
                    position - 1
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// A borrowed slice proven to be in non-descending order.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `slice[i] <= slice[j]`
#[derive(Debug, PartialEq, Eq)]
pub struct Sorted<'a, T> {
    inner: &'a [T],
}

impl<T> Clone for Sorted<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sorted<'_, T> {}

impl<'a, T: Ord> Sorted<'a, T> {
    /// Validate that `slice` is sorted.
    ///
    /// Returns `Err` with the first descending position otherwise.
    pub fn new(slice: &'a [T]) -> Result<Self, InvariantError> {
        if let Some(position) = first_descent(slice) {
            return Err(InvariantError::Unsorted { position });
        }
        Ok(Self { inner: slice })
    }

    /// Neighbor-probing search. Always reliable: the input is sorted.
    pub fn search(&self, target: &T) -> Option<usize> {
        neighbor::search(self.inner, target)
    }

    /// Classic binary search over the same slice.
    pub fn search_classic(&self, target: &T) -> Option<usize> {
        classic::search(self.inner, target)
    }

    /// Whether `target` occurs anywhere in the slice.
    pub fn contains(&self, target: &T) -> bool {
        self.search(target).is_some()
    }
}

impl<'a, T> Sorted<'a, T> {
    /// Get the underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.inner
    }
}

impl<T> Deref for Sorted<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.inner
    }
}

/// Index of the first element smaller than its predecessor.
pub fn first_descent<T: Ord>(slice: &[T]) -> Option<usize> {
    slice
        .windows(2)
        .position(|pair| pair[0] > pair[1])
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_accepts_non_descending() {
        let xs = [1, 1, 2, 3, 3, 3, 9];
        let sorted = Sorted::new(&xs).unwrap();
        assert_eq!(sorted.len(), 7);
        assert_eq!(sorted.search(&2), Some(2));
        assert_eq!(sorted.search_classic(&9), Some(6));
        assert!(sorted.contains(&1));
        assert!(!sorted.contains(&4));
        assert_eq!(sorted.as_slice(), &xs);
    }

    #[test]
    fn test_sorted_accepts_trivial() {
        assert!(Sorted::<i32>::new(&[]).unwrap().is_empty());
        assert_eq!(Sorted::new(&[42]).unwrap().get(0), Some(&42));
    }

    #[test]
    fn test_sorted_rejects_descent() {
        let err = Sorted::new(&[1, 2, 5, 4, 6]).unwrap_err();
        assert_eq!(err, InvariantError::Unsorted { position: 3 });
        assert_eq!(
            err.to_string(),
            "input not sorted: element 3 is smaller than element 2"
        );
    }

    #[test]
    fn test_first_descent() {
        assert_eq!(first_descent(&[3, 2, 1]), Some(1));
        assert_eq!(first_descent(&["a", "b", "b"]), None);
        assert_eq!(first_descent::<u8>(&[]), None);
    }
}
