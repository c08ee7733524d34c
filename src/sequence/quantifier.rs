//! Existence and universal tests over a sequence.
//!
//! Both tests walk the sequence from left to right and return as soon as the
//! answer is decided, so the predicate is never invoked past the deciding
//! element.
//!
//! # Empty sequences
//!
//! [`any`] over an empty sequence is `false`, as usual. [`all`] over an empty
//! sequence is **also `false`**. This library does not treat "all of none" as
//! vacuously true, and so [`all`] differs from [`Iterator::all`] on empty
//! input.
//!
//! # Examples
//!
//! ```rust
//! use collection_ops::sequence::{all, any};
//!
//! let empty: Vec<i32> = Vec::new();
//! assert!(!any(&empty, |_| true));
//! assert!(!all(&empty, |_| true));
//! assert!(empty.iter().all(|_| true));
//! ```

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Elements are tested from left to right. Evaluation stops at the first
/// element for which `predicate` returns `true`; later elements are never
/// passed to it. An empty sequence yields `false`.
///
/// # Arguments
///
/// * `collection` - The sequence to search
/// * `predicate` - The test applied to each element
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::any;
///
/// let words = ["one", "two", "three"];
/// assert!(any(&words, |word| *word == "one"));
/// assert!(!any(&words, |word| *word == "four"));
/// ```
#[inline]
pub fn any<E, P>(collection: &[E], mut predicate: P) -> bool
where
    P: FnMut(&E) -> bool,
{
    for element in collection {
        if predicate(element) {
            return true;
        }
    }

    false
}

/// Returns `true` if the sequence is non-empty and every element satisfies
/// `predicate`.
///
/// **An empty sequence yields `false`**, unlike [`Iterator::all`].
///
/// Elements are tested from left to right. Evaluation stops at the first
/// element for which `predicate` returns `false`.
///
/// # Arguments
///
/// * `collection` - The sequence to test
/// * `predicate` - The test every element must pass
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::all;
///
/// assert!(all(&["one", "one", "one"], |word| *word == "one"));
/// assert!(!all(&["one", "one", "two"], |word| *word == "one"));
///
/// let none: [&str; 0] = [];
/// assert!(!all(&none, |word| *word == "one"));
/// ```
#[inline]
pub fn all<E, P>(collection: &[E], mut predicate: P) -> bool
where
    P: FnMut(&E) -> bool,
{
    if collection.is_empty() {
        return false;
    }

    for element in collection {
        if !predicate(element) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn equal_to(expected: &'static str) -> impl Fn(&&str) -> bool {
        move |value: &&str| *value == expected
    }

    // =========================================================================
    // any
    // =========================================================================

    #[rstest]
    #[case(&["one", "two", "three"], "one", true)]
    #[case(&["one", "two", "three"], "three", true)]
    #[case(&["one", "two", "three"], "four", false)]
    #[case(&[], "one", false)]
    fn any_finds_matching_element(
        #[case] collection: &[&str],
        #[case] expected: &'static str,
        #[case] found: bool,
    ) {
        assert_eq!(any(collection, equal_to(expected)), found);
    }

    #[rstest]
    fn any_stops_at_first_match() {
        let mut calls = 0;
        let result = any(&[1, 2, 3, 4], |element| {
            calls += 1;
            *element == 2
        });

        assert!(result);
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn any_visits_every_element_without_match() {
        let mut visited = Vec::new();
        let result = any(&[1, 2, 3], |element| {
            visited.push(*element);
            false
        });

        assert!(!result);
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[rstest]
    fn any_empty_never_calls_predicate() {
        let mut calls = 0;
        let empty: [i32; 0] = [];
        assert!(!any(&empty, |_| {
            calls += 1;
            true
        }));
        assert_eq!(calls, 0);
    }

    // =========================================================================
    // all
    // =========================================================================

    #[rstest]
    #[case(&["one", "one", "one"], true)]
    #[case(&["one", "one", "two"], false)]
    #[case(&["two", "three"], false)]
    #[case(&["one"], true)]
    fn all_requires_every_element(#[case] collection: &[&str], #[case] expected: bool) {
        assert_eq!(all(collection, equal_to("one")), expected);
    }

    #[rstest]
    fn all_empty_is_false() {
        let empty: Vec<String> = Vec::new();
        assert!(!all(&empty, |_| true));
    }

    #[rstest]
    fn all_stops_at_first_failure() {
        let mut calls = 0;
        let result = all(&[2, 4, 5, 6, 8], |element| {
            calls += 1;
            element % 2 == 0
        });

        assert!(!result);
        assert_eq!(calls, 3);
    }
}
