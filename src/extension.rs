//! Method-call syntax for the sequence operations.
//!
//! This module provides two extension traits:
//!
//! - [`SequenceOps`]: Borrowing operations, implemented for every slice
//!   `[E]` and therefore reachable from `Vec<E>`, arrays and boxed slices
//! - [`SequenceOpsOwned`]: Consuming operations, implemented for `Vec<E>`
//!
//! Each method forwards to the free function of the same behavior in
//! [`crate::sequence`]. The method names differ from `Iterator::any`,
//! `Iterator::all` and the inherent array `map`, so they are never shadowed.
//!
//! # Examples
//!
//! ```rust
//! use collection_ops::extension::{SequenceOps, SequenceOpsOwned};
//!
//! let words = vec!["one", "oneone", "two", "three"];
//!
//! assert!(words.any_where(|word| *word == "two"));
//! assert!(!words.all_where(|word| word.len() == 3));
//! assert_eq!(words.map_each(|word| word.len()), vec![3, 6, 3, 5]);
//!
//! let joined = words.reduce_indexed(
//!     |accumulator: String, word, sequence, index| {
//!         if index + 1 == sequence.len() {
//!             accumulator + *word
//!         } else {
//!             accumulator + *word + "/"
//!         }
//!     },
//!     String::new(),
//! );
//! assert_eq!(joined, "one/oneone/two/three");
//!
//! assert_eq!(words.filter_where(|word| word.starts_with("one")), vec!["one", "oneone"]);
//! ```

use crate::sequence;

/// Borrowing sequence operations in method form.
///
/// Implemented for `[E]`; auto-deref makes the methods available on
/// `Vec<E>`, `[E; N]` and `Box<[E]>` as well.
///
/// # Examples
///
/// ```rust
/// use collection_ops::extension::SequenceOps;
///
/// let empty: Vec<i32> = Vec::new();
/// assert!(!empty.all_where(|_| true));
/// assert!(empty.map_each(|number| number + 1).is_empty());
/// ```
pub trait SequenceOps {
    /// The element type of the sequence.
    type Element;

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// See [`sequence::any`].
    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool;

    /// Returns `true` if the sequence is non-empty and every element
    /// satisfies `predicate`. An empty sequence yields `false`.
    ///
    /// See [`sequence::all`].
    fn all_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool;

    /// Applies `function` to each element and collects the results.
    ///
    /// See [`sequence::map`].
    fn map_each<R, F>(&self, function: F) -> Vec<R>
    where
        F: FnMut(&Self::Element) -> R;

    /// Copies the elements that satisfy `predicate` into a new `Vec`,
    /// leaving `self` untouched.
    ///
    /// See [`sequence::filter_cloned`].
    fn filter_cloned_where<P>(&self, predicate: P) -> Vec<Self::Element>
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element) -> bool;

    /// Folds from left to right, passing the accumulator, the element, the
    /// whole sequence and the index to `function`.
    ///
    /// See [`sequence::reduce`].
    fn reduce_indexed<R, F>(&self, function: F, initial: R) -> R
    where
        F: FnMut(R, &Self::Element, &[Self::Element], usize) -> R;
}

impl<E> SequenceOps for [E] {
    type Element = E;

    #[inline]
    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool,
    {
        sequence::any(self, predicate)
    }

    #[inline]
    fn all_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool,
    {
        sequence::all(self, predicate)
    }

    #[inline]
    fn map_each<R, F>(&self, function: F) -> Vec<R>
    where
        F: FnMut(&E) -> R,
    {
        sequence::map(self, function)
    }

    #[inline]
    fn filter_cloned_where<P>(&self, predicate: P) -> Vec<E>
    where
        E: Clone,
        P: FnMut(&E) -> bool,
    {
        sequence::filter_cloned(self, predicate)
    }

    #[inline]
    fn reduce_indexed<R, F>(&self, function: F, initial: R) -> R
    where
        F: FnMut(R, &E, &[E], usize) -> R,
    {
        sequence::reduce(self, function, initial)
    }
}

/// Consuming sequence operations in method form, implemented for `Vec<E>`.
pub trait SequenceOpsOwned: Sized {
    /// The element type of the sequence.
    type Element;

    /// Keeps the elements that satisfy `predicate`, compacting `self` in
    /// place and returning the same allocation.
    ///
    /// See [`sequence::filter`].
    #[must_use]
    fn filter_where<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Element) -> bool;

    /// Applies `function` to each element, moving the elements into it.
    ///
    /// See [`sequence::map_into`].
    fn map_into_each<R, F>(self, function: F) -> Vec<R>
    where
        F: FnMut(Self::Element) -> R;
}

impl<E> SequenceOpsOwned for Vec<E> {
    type Element = E;

    #[inline]
    fn filter_where<P>(self, predicate: P) -> Self
    where
        P: FnMut(&E) -> bool,
    {
        sequence::filter(self, predicate)
    }

    #[inline]
    fn map_into_each<R, F>(self, function: F) -> Vec<R>
    where
        F: FnMut(E) -> R,
    {
        sequence::map_into(self, function)
    }
}
