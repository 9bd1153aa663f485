//! # lamargs
//!
//! Composable variadic consumers, functions, and predicates, plus a
//! small set of collection mapping helpers.
//!
//! ## Overview
//!
//! The crate provides four leaf modules with no dependencies on each
//! other:
//!
//! - [`combinator::consumer`]: side-effecting actions over a slice of
//!   arguments, composable in sequence with `and_then`.
//! - [`combinator::function`]: transformations from a slice of
//!   arguments to a value, composable with `compose` and `and_then`.
//! - [`combinator::predicate`]: boolean tests over a single value,
//!   composable with short-circuiting `and`/`or` and `negate`.
//! - [`collect`]: stateless helpers that apply a function across a
//!   sequence and materialize the results as a set, a list, or a
//!   key/value map.
//!
//! Every combinator returns a named adapter struct that owns its
//! operands in composition order, so composed behavior is an ordinary
//! immutable value: cloneable, shareable across threads (when its
//! operands are), and — under the `serde` feature — serializable.
//!
//! ## Feature Flags
//!
//! - `combinator`: the consumer/function/predicate modules (default)
//! - `collect`: the collection mapping helpers (default)
//! - `serde`: Serialize/Deserialize for library-provided behavior values
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use lamargs::prelude::*;
//! use lamargs::combinator::{function, predicate};
//!
//! let total = function::from_fn(|values: &[i32]| values.iter().sum::<i32>());
//! let doubled = total.and_then(function::from_fn(|sums: &[i32]| sums[0] * 2));
//! assert_eq!(doubled.apply(&[1, 2, 3]), 12);
//!
//! let positive = predicate::from_fn(|value: &i32| *value > 0);
//! let small = predicate::from_fn(|value: &i32| *value < 10);
//! assert!(positive.and(small).test(&5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the behavior traits and the mapping helpers.
///
/// # Usage
///
/// ```rust
/// use lamargs::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "combinator")]
    pub use crate::combinator::{ArgsConsumer, ArgsFunction, Predicate};

    #[cfg(feature = "collect")]
    pub use crate::collect::{
        DuplicateKeyError, list_to_map, list_to_map_with, map_to_list, map_to_set,
    };
}

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "collect")]
pub mod collect;
