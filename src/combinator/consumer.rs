//! Variadic, side-effecting consumers composable in sequence.
//!
//! An [`ArgsConsumer`] performs an action on a slice of arguments and
//! returns nothing. Consumers compose with [`ArgsConsumer::and_then`],
//! which forwards the identical argument slice to each stage in order,
//! and with [`multi`], which left-folds any number of consumers and
//! falls back to the no-op identity [`nothing`] on empty input.

/// A side-effecting action over a variable-length slice of arguments.
///
/// Implementors receive the full argument slice on every invocation;
/// composition never reorders, truncates, or copies the arguments.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{consumer, ArgsConsumer};
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let record = consumer::from_fn(|values: &[i32]| seen.borrow_mut().extend_from_slice(values));
///
/// record.accept(&[1, 2, 3]);
/// assert_eq!(*seen.borrow(), vec![1, 2, 3]);
/// ```
pub trait ArgsConsumer<T> {
    /// Performs this consumer's action on the given arguments.
    fn accept(&self, values: &[T]);

    /// Returns a composed consumer that performs, in sequence, this
    /// consumer's action followed by `after`'s action, both on the
    /// identical argument slice.
    ///
    /// If this consumer's action panics, `after` is never invoked; the
    /// failure propagates unchanged to the caller of the composed
    /// consumer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lamargs::combinator::{consumer, ArgsConsumer};
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let first = consumer::from_fn(|_: &[i32]| log.borrow_mut().push("first"));
    /// let second = consumer::from_fn(|_: &[i32]| log.borrow_mut().push("second"));
    ///
    /// first.and_then(second).accept(&[0]);
    /// assert_eq!(*log.borrow(), vec!["first", "second"]);
    /// ```
    fn and_then<C>(self, after: C) -> AndThen<Self, C>
    where
        Self: Sized,
        C: ArgsConsumer<T>,
    {
        AndThen {
            first: self,
            second: after,
        }
    }
}

/// A consumer wrapping an arbitrary closure.
///
/// Created by [`from_fn`]. This is the one leaf that cannot be
/// serialized: the closure's captured environment is opaque to the
/// library.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    action: F,
}

impl<F> core::fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a consumer from a closure over an argument slice.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{consumer, ArgsConsumer};
///
/// let print_all = consumer::from_fn(|values: &[&str]| {
///     for value in values {
///         let _ = value;
///     }
/// });
/// print_all.accept(&["a", "b"]);
/// ```
pub fn from_fn<T, F>(action: F) -> FromFn<F>
where
    F: Fn(&[T]),
{
    FromFn { action }
}

impl<T, F> ArgsConsumer<T> for FromFn<F>
where
    F: Fn(&[T]),
{
    #[inline]
    fn accept(&self, values: &[T]) {
        (self.action)(values);
    }
}

impl<T, C> ArgsConsumer<T> for &C
where
    C: ArgsConsumer<T> + ?Sized,
{
    #[inline]
    fn accept(&self, values: &[T]) {
        (**self).accept(values);
    }
}

impl<T, C> ArgsConsumer<T> for Box<C>
where
    C: ArgsConsumer<T> + ?Sized,
{
    #[inline]
    fn accept(&self, values: &[T]) {
        (**self).accept(values);
    }
}

/// Sequential composition of two consumers. See
/// [`ArgsConsumer::and_then`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AndThen<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> ArgsConsumer<T> for AndThen<A, B>
where
    A: ArgsConsumer<T>,
    B: ArgsConsumer<T>,
{
    #[inline]
    fn accept(&self, values: &[T]) {
        self.first.accept(values);
        self.second.accept(values);
    }
}

/// The canonical no-op consumer.
///
/// Accepts any arguments, does nothing, and never fails. `Nothing` is
/// the identity element of [`ArgsConsumer::and_then`] and the fallback
/// returned by [`multi`] for an empty operand sequence. It is a
/// zero-sized type, so every instance is the same stateless value.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{consumer, ArgsConsumer};
///
/// consumer::nothing().accept(&[1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nothing;

/// Returns the canonical no-op consumer.
#[inline]
pub const fn nothing() -> Nothing {
    Nothing
}

impl<T> ArgsConsumer<T> for Nothing {
    #[inline]
    fn accept(&self, _values: &[T]) {}
}

/// Left fold of an ordered sequence of consumers. See [`multi`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multi<C> {
    stages: Vec<C>,
}

/// Folds the supplied consumers into one, left to right, with
/// [`ArgsConsumer::and_then`] semantics: every stage receives the
/// identical argument slice, in operand order, and a panic in any stage
/// prevents the remaining stages from running.
///
/// An empty sequence yields the no-op identity, equivalent to
/// [`nothing`].
///
/// Operands of a single type fold directly; mixed operand types go
/// through `Box<dyn ArgsConsumer<T>>`.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{consumer, ArgsConsumer};
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let stages: Vec<Box<dyn ArgsConsumer<i32> + '_>> = vec![
///     Box::new(consumer::from_fn(|_: &[i32]| log.borrow_mut().push(1))),
///     Box::new(consumer::from_fn(|_: &[i32]| log.borrow_mut().push(2))),
/// ];
///
/// consumer::multi(stages).accept(&[0]);
/// assert_eq!(*log.borrow(), vec![1, 2]);
/// ```
pub fn multi<C>(consumers: impl IntoIterator<Item = C>) -> Multi<C> {
    Multi {
        stages: consumers.into_iter().collect(),
    }
}

impl<T, C> ArgsConsumer<T> for Multi<C>
where
    C: ArgsConsumer<T>,
{
    fn accept(&self, values: &[T]) {
        for stage in &self.stages {
            stage.accept(values);
        }
    }
}

static_assertions::assert_impl_all!(Nothing: Send, Sync);
static_assertions::assert_impl_all!(AndThen<Nothing, Nothing>: Send, Sync);
static_assertions::assert_impl_all!(Multi<Nothing>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn nothing_accepts_anything() {
        nothing().accept(&[1, 2, 3]);
        nothing().accept(&[] as &[i32]);
    }

    #[test]
    fn and_then_preserves_argument_slice() {
        let seen = RefCell::new(Vec::new());
        let record = |values: &[i32]| seen.borrow_mut().push(values.to_vec());

        from_fn(record).and_then(from_fn(record)).accept(&[7, 8]);

        assert_eq!(*seen.borrow(), vec![vec![7, 8], vec![7, 8]]);
    }

    #[test]
    fn empty_multi_is_noop() {
        multi(Vec::<Nothing>::new()).accept(&[1, 2, 3]);
    }
}
