//! Composable behavior values: consumers, functions, and predicates.
//!
//! This module provides three families of behavior values. Each is a
//! trait over an element type `T`, implemented by explicit adapter
//! structs so that a composed value is itself a plain, immutable value:
//!
//! - [`ArgsConsumer`]: a side-effecting action over a slice of
//!   arguments, composed in sequence with [`ArgsConsumer::and_then`].
//! - [`ArgsFunction`]: a transformation from a slice of arguments to a
//!   single value, composed with [`ArgsFunction::compose`] and
//!   [`ArgsFunction::and_then`].
//! - [`Predicate`]: a boolean test over a single value, composed with
//!   the short-circuiting [`Predicate::and`] / [`Predicate::or`] and
//!   inverted with [`Predicate::negate`].
//!
//! # Composition semantics
//!
//! Combinators never mutate their operands; each returns a new value
//! owning the operands in composition order. Consumer composition
//! forwards the identical argument slice to every stage. Function
//! composition reduces arity to one after the first stage: the
//! intermediate result is lifted into a one-element slice for the next
//! stage.
//!
//! Fold-style combinators ([`consumer::multi`],
//! [`predicate::multi_and`], [`predicate::multi_or`]) left-fold an
//! ordered sequence of operands and return the corresponding identity
//! value on empty input: the no-op consumer, the always-true predicate,
//! and the always-false predicate respectively.
//!
//! # Failure semantics
//!
//! Nothing in this module catches, translates, or logs failures. A
//! panic raised inside any stage unwinds to the caller of the outermost
//! composed value, and later stages never run. Operands are taken by
//! value, so an absent operand is unrepresentable; the one operation
//! where absence is meaningful, [`predicate::is_equal`], keeps it
//! explicit in its signature.
//!
//! # Laws
//!
//! - **Associativity**: `a.and_then(b).and_then(c)` and
//!   `a.and_then(b.and_then(c))` produce identical observable effects
//!   and results for the same inputs.
//! - **Fold identities**: `multi([])` behaves as [`consumer::nothing`],
//!   `multi_and([])` as [`predicate::always`], and `multi_or([])` as
//!   [`predicate::never`].
//!
//! # Examples
//!
//! ```rust
//! use lamargs::combinator::{consumer, ArgsConsumer};
//! use std::cell::RefCell;
//!
//! let log = RefCell::new(Vec::new());
//! let first = consumer::from_fn(|values: &[i32]| log.borrow_mut().push(values.to_vec()));
//! let second = consumer::from_fn(|values: &[i32]| log.borrow_mut().push(values.to_vec()));
//!
//! first.and_then(second).accept(&[1, 2]);
//! assert_eq!(*log.borrow(), vec![vec![1, 2], vec![1, 2]]);
//! ```

pub mod consumer;
pub mod function;
pub mod predicate;

pub use consumer::ArgsConsumer;
pub use function::ArgsFunction;
pub use predicate::Predicate;
