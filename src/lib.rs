//! # collection-ops
//!
//! Eager higher-order operations over ordered sequences.
//!
//! ## Overview
//!
//! This library lets calling code express common iteration patterns
//! (search, transform, accumulate) declaratively instead of writing manual
//! loops. It includes:
//!
//! - **Quantifiers**: [`any`](sequence::any) and [`all`](sequence::all), both short-circuiting
//! - **Transforms**: [`map`](sequence::map), [`map_into`](sequence::map_into), [`try_map`](sequence::try_map)
//! - **Filters**: [`filter`](sequence::filter), [`filter_in_place`](sequence::filter_in_place),
//!   [`filter_cloned`](sequence::filter_cloned)
//! - **Folds**: [`reduce`](sequence::reduce) and [`try_reduce`](sequence::try_reduce), whose reducer
//!   sees the accumulator, the element, the whole sequence and the index
//!
//! Every operation is eager and runs to completion on the calling thread.
//!
//! ## Feature Flags
//!
//! - `extension`: Method syntax through `SequenceOps` and `SequenceOpsOwned`
//! - `lookup`: Deprecated forwards to the standard `position`/`contains` primitives
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use collection_ops::prelude::*;
//!
//! let words = vec!["one", "two", "three"];
//!
//! assert!(any(&words, |word| *word == "one"));
//! assert!(!all(&words, |word| *word == "one"));
//!
//! let joined = reduce(
//!     &words,
//!     |accumulator: String, current, sequence, index| {
//!         if index == sequence.len() - 1 {
//!             format!("{accumulator} and {current}")
//!         } else if accumulator.is_empty() {
//!             (*current).to_string()
//!         } else {
//!             format!("{accumulator}, {current}")
//!         }
//!     },
//!     String::new(),
//! );
//! assert_eq!(joined, "one, two and three");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation and, when enabled, the extension traits.
/// The deprecated lookup forwards stay in `collection_ops::lookup` only.
///
/// # Usage
///
/// ```rust
/// use collection_ops::prelude::*;
/// ```
///
/// The lookup forwards are not brought into scope by the glob:
///
/// ```compile_fail
/// use collection_ops::prelude::*;
///
/// let _ = includes(&[1, 2, 3], &2);
/// ```
pub mod prelude {
    pub use crate::sequence::*;

    #[cfg(feature = "extension")]
    pub use crate::extension::*;
}

pub mod sequence;

#[cfg(feature = "extension")]
pub mod extension;

#[cfg(feature = "lookup")]
pub mod lookup;
