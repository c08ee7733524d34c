//! Left folds with a full-context reducer.
//!
//! Unlike [`Iterator::fold`], which hands the combining function only the
//! accumulator and the current element, the reducer here receives four
//! arguments on every step:
//!
//! 1. the accumulator so far
//! 2. the current element
//! 3. the *entire* original sequence
//! 4. the zero-based index of the current element
//!
//! This lets a reducer look at neighbouring elements or at the total length,
//! for example to treat the last element differently.
//!
//! # Examples
//!
//! ```rust
//! use collection_ops::sequence::reduce;
//!
//! let readings = [3, 5, 4, 9];
//!
//! // Count the readings that are higher than their predecessor.
//! let rises = reduce(
//!     &readings,
//!     |count, current, sequence, index| {
//!         if index > 0 && *current > sequence[index - 1] { count + 1 } else { count }
//!     },
//!     0,
//! );
//! assert_eq!(rises, 2);
//! ```

/// Folds the sequence from left to right.
///
/// `function` is called once per element, with indices ascending from 0,
/// as `function(accumulator, element, collection, index)`. Its result becomes
/// the next accumulator. An empty sequence returns `initial` without calling
/// `function`.
///
/// # Arguments
///
/// * `collection` - The sequence to fold
/// * `function` - The reducer combining the accumulator with each element
/// * `initial` - The starting accumulator
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::reduce;
///
/// let sum = reduce(&[1, 2, 3, 4, 5], |result, current, _, _| result + current, 0);
/// assert_eq!(sum, 15);
///
/// let empty: [i32; 0] = [];
/// assert_eq!(reduce(&empty, |result, current, _, _| result + current, 7), 7);
/// ```
#[inline]
pub fn reduce<E, R, F>(collection: &[E], mut function: F, initial: R) -> R
where
    F: FnMut(R, &E, &[E], usize) -> R,
{
    collection
        .iter()
        .enumerate()
        .fold(initial, |accumulator, (index, element)| {
            function(accumulator, element, collection, index)
        })
}

/// Folds the sequence from left to right with a fallible reducer.
///
/// Behaves like [`reduce`] while `function` returns `Ok`. The first `Err`
/// stops the fold and is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::try_reduce;
///
/// let total = try_reduce(
///     &[100u8, 100, 100],
///     |sum: u8, current, _, _| sum.checked_add(*current).ok_or("overflow"),
///     0,
/// );
/// assert_eq!(total, Err("overflow"));
/// ```
///
/// # Errors
///
/// Returns the first error produced by `function`.
pub fn try_reduce<E, R, Err, F>(collection: &[E], mut function: F, initial: R) -> Result<R, Err>
where
    F: FnMut(R, &E, &[E], usize) -> Result<R, Err>,
{
    let mut accumulator = initial;

    for (index, element) in collection.iter().enumerate() {
        accumulator = match function(accumulator, element, collection, index) {
            Ok(next) => next,
            Err(error) => {
                tracing::debug!(
                    index,
                    length = collection.len(),
                    "reducer returned an error; stopping"
                );
                return Err(error);
            }
        };
    }

    Ok(accumulator)
}
