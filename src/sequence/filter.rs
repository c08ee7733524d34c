//! Narrowing a sequence to the elements that satisfy a predicate.
//!
//! Three entry points share one contract: the predicate is evaluated exactly
//! once per element, left to right, and the kept elements stay in their
//! original relative order. They differ only in what happens to the input:
//!
//! | Function | Input | Storage |
//! |---|---|---|
//! | [`filter`] | `Vec<E>`, consumed | compacted in place and returned |
//! | [`filter_in_place`] | `&mut Vec<E>` | compacted in place |
//! | [`filter_cloned`] | `&[E]`, untouched | fresh `Vec` of clones |
//!
//! [`filter`] reuses the input's backing storage, so the returned `Vec` keeps
//! the original capacity. Because the input is moved into the call, the
//! caller can never observe the narrowed storage through the old binding:
//!
//! ```compile_fail
//! use collection_ops::sequence::filter;
//!
//! let words = vec!["one", "two"];
//! let kept = filter(words, |word| word.starts_with('o'));
//! println!("{:?} {:?}", kept, words);
//! ```

/// Keeps the elements that satisfy `predicate`, reusing the input's storage.
///
/// The sequence is taken by value and compacted in place: retained elements
/// are shifted to the front, rejected elements are dropped, and the same
/// allocation is returned. Use [`filter_cloned`] to leave a borrowed input
/// untouched instead.
///
/// # Arguments
///
/// * `collection` - The sequence to narrow
/// * `predicate` - The test an element must pass to be kept
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::filter;
///
/// let words = vec!["one", "oneone", "two", "three"];
/// let kept = filter(words, |word| word.starts_with("one"));
/// assert_eq!(kept, vec!["one", "oneone"]);
/// ```
#[inline]
pub fn filter<E, P>(mut collection: Vec<E>, predicate: P) -> Vec<E>
where
    P: FnMut(&E) -> bool,
{
    filter_in_place(&mut collection, predicate);
    collection
}

/// Removes, in place, every element that does not satisfy `predicate`.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::filter_in_place;
///
/// let mut numbers = vec![1, 2, 3, 4, 5, 6];
/// filter_in_place(&mut numbers, |number| number % 3 == 0);
/// assert_eq!(numbers, vec![3, 6]);
/// ```
pub fn filter_in_place<E, P>(collection: &mut Vec<E>, predicate: P)
where
    P: FnMut(&E) -> bool,
{
    let before = collection.len();
    collection.retain(predicate);

    tracing::trace!(
        retained = collection.len(),
        removed = before - collection.len(),
        "filtered sequence"
    );
}

/// Copies the elements that satisfy `predicate` into a new `Vec`.
///
/// The input is borrowed and left exactly as it was.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::filter_cloned;
///
/// let words = vec!["one", "oneone", "two", "three"];
/// let kept = filter_cloned(&words, |word| word.starts_with("one"));
///
/// assert_eq!(kept, vec!["one", "oneone"]);
/// assert_eq!(words, vec!["one", "oneone", "two", "three"]);
/// ```
pub fn filter_cloned<E, P>(collection: &[E], mut predicate: P) -> Vec<E>
where
    E: Clone,
    P: FnMut(&E) -> bool,
{
    let result: Vec<E> = collection
        .iter()
        .filter(|element| predicate(*element))
        .cloned()
        .collect();

    tracing::trace!(
        retained = result.len(),
        removed = collection.len() - result.len(),
        "filtered sequence"
    );

    result
}
