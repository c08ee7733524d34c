//! Higher-order operations over ordered sequences.
//!
//! This module provides the five traversals that make up the library:
//!
//! - [`any`]: Existence test, short-circuiting on the first match
//! - [`all`]: Universal test, short-circuiting on the first mismatch
//! - [`map`]: Element-wise transform into a freshly allocated `Vec`
//! - [`filter`]: Narrowing to the elements that satisfy a predicate
//! - [`reduce`]: Left fold whose reducer sees the whole sequence and the index
//!
//! Alongside them sit the owned and fallible variants [`map_into`],
//! [`try_map`], [`filter_in_place`], [`filter_cloned`] and [`try_reduce`].
//!
//! ## Sequences
//!
//! Borrowing operations take `&[E]`, so a `Vec<E>`, an array or any other
//! slice can be passed directly. Operations that consume their input take a
//! `Vec<E>` by value.
//!
//! ## Determinism
//!
//! Every operation visits elements strictly left to right with ascending
//! zero-based indices. Given deterministic closures, identical input always
//! produces identical output.
//!
//! # Examples
//!
//! ```rust
//! use collection_ops::sequence::{all, any, filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! assert!(any(&numbers, |number| *number > 4));
//! assert!(all(&numbers, |number| *number > 0));
//! assert_eq!(map(&numbers, |number| number * 10), vec![10, 20, 30, 40, 50]);
//! assert_eq!(reduce(&numbers, |sum, number, _, _| sum + number, 0), 15);
//! assert_eq!(filter(numbers, |number| number % 2 == 1), vec![1, 3, 5]);
//! ```

mod filter;
mod quantifier;
mod reduce;
mod transform;

pub use filter::{filter, filter_cloned, filter_in_place};
pub use quantifier::{all, any};
pub use reduce::{reduce, try_reduce};
pub use transform::{map, map_into, try_map};
