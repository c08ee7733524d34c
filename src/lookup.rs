//! Deprecated lookup helpers.
//!
//! These functions only forward to the standard slice and iterator
//! primitives named in each deprecation note. New code should call those
//! primitives directly.

/// Returns the index of the first element equal to `test`.
///
/// # Examples
///
/// ```rust
/// #![allow(deprecated)]
/// use collection_ops::lookup::index;
///
/// assert_eq!(index(&["one", "two"], &"two"), Some(1));
/// assert_eq!(index(&["one", "two"], &"three"), None);
/// ```
#[deprecated(note = "use `collection.iter().position(|element| element == test)` instead")]
#[inline]
pub fn index<E>(collection: &[E], test: &E) -> Option<usize>
where
    E: PartialEq,
{
    collection.iter().position(|element| element == test)
}

/// Returns the index of the first element that satisfies `predicate`.
#[deprecated(note = "use `collection.iter().position(predicate)` instead")]
#[inline]
pub fn index_func<E, P>(collection: &[E], predicate: P) -> Option<usize>
where
    P: FnMut(&E) -> bool,
{
    collection.iter().position(predicate)
}

/// Returns `true` if some element equals `test`.
#[deprecated(note = "use `<[E]>::contains` instead")]
#[inline]
pub fn includes<E>(collection: &[E], test: &E) -> bool
where
    E: PartialEq,
{
    collection.contains(test)
}

/// Returns `true` if some element satisfies `predicate`.
#[deprecated(note = "use `collection.iter().any(predicate)` instead")]
#[inline]
pub fn includes_func<E, P>(collection: &[E], predicate: P) -> bool
where
    P: FnMut(&E) -> bool,
{
    collection.iter().any(predicate)
}
