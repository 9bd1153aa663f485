//! Variadic functions composable before and after one another.
//!
//! An [`ArgsFunction`] maps a slice of arguments to a single value.
//! Composition reduces arity to one: once a stage has produced its
//! single result, that result is lifted into a one-element slice for
//! the next stage, whether the next stage comes from
//! [`ArgsFunction::and_then`] or the current one was built with
//! [`ArgsFunction::compose`].

use core::slice;

/// A mapping from a variable-length slice of arguments to one value.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{function, ArgsFunction};
///
/// let sum = function::from_fn(|values: &[i32]| values.iter().sum::<i32>());
/// assert_eq!(sum.apply(&[1, 2, 3]), 6);
/// ```
pub trait ArgsFunction<T> {
    /// The type of value this function produces.
    type Output;

    /// Applies this function to the given arguments.
    fn apply(&self, values: &[T]) -> Self::Output;

    /// Returns a composed function that first applies `before` to the
    /// full argument slice, then applies this function to the single
    /// intermediate value, lifted into a one-element slice.
    ///
    /// A panic raised in `before` propagates to the caller and this
    /// function is never applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lamargs::combinator::{function, ArgsFunction};
    ///
    /// let double = function::from_fn(|values: &[i32]| values[0] * 2);
    /// let sum = function::from_fn(|values: &[i32]| values.iter().sum::<i32>());
    ///
    /// // double(sum(1, 2, 3)) = 12
    /// assert_eq!(double.compose(sum).apply(&[1, 2, 3]), 12);
    /// ```
    fn compose<V, B>(self, before: B) -> Compose<Self, B>
    where
        Self: Sized,
        B: ArgsFunction<V, Output = T>,
    {
        Compose {
            after: self,
            before,
        }
    }

    /// Returns a composed function that applies this function to the
    /// full argument slice, then applies `after` to the single result,
    /// lifted into a one-element slice.
    ///
    /// A panic raised in this function propagates to the caller and
    /// `after` is never applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lamargs::combinator::{function, ArgsFunction};
    ///
    /// let sum = function::from_fn(|values: &[i32]| values.iter().sum::<i32>());
    /// let double = function::from_fn(|values: &[i32]| values[0] * 2);
    ///
    /// // double(sum(1, 2, 3)) = 12
    /// assert_eq!(sum.and_then(double).apply(&[1, 2, 3]), 12);
    /// ```
    fn and_then<A>(self, after: A) -> AndThen<Self, A>
    where
        Self: Sized,
        A: ArgsFunction<Self::Output>,
    {
        AndThen { first: self, after }
    }
}

/// A function wrapping an arbitrary closure.
///
/// Created by [`from_fn`]. Like its consumer and predicate
/// counterparts, this leaf is not serializable.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    function: F,
}

impl<F> core::fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a function from a closure over an argument slice.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{function, ArgsFunction};
///
/// let count = function::from_fn(|values: &[&str]| values.len());
/// assert_eq!(count.apply(&["a", "b"]), 2);
/// ```
pub fn from_fn<T, R, F>(function: F) -> FromFn<F>
where
    F: Fn(&[T]) -> R,
{
    FromFn { function }
}

impl<T, R, F> ArgsFunction<T> for FromFn<F>
where
    F: Fn(&[T]) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, values: &[T]) -> R {
        (self.function)(values)
    }
}

impl<T, F> ArgsFunction<T> for &F
where
    F: ArgsFunction<T> + ?Sized,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, values: &[T]) -> Self::Output {
        (**self).apply(values)
    }
}

impl<T, F> ArgsFunction<T> for Box<F>
where
    F: ArgsFunction<T> + ?Sized,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, values: &[T]) -> Self::Output {
        (**self).apply(values)
    }
}

/// Pre-composition of two functions. See [`ArgsFunction::compose`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compose<F, B> {
    after: F,
    before: B,
}

impl<V, T, F, B> ArgsFunction<V> for Compose<F, B>
where
    F: ArgsFunction<T>,
    B: ArgsFunction<V, Output = T>,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, values: &[V]) -> Self::Output {
        let intermediate = self.before.apply(values);
        self.after.apply(slice::from_ref(&intermediate))
    }
}

/// Post-composition of two functions. See [`ArgsFunction::and_then`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AndThen<F, A> {
    first: F,
    after: A,
}

impl<T, F, A> ArgsFunction<T> for AndThen<F, A>
where
    F: ArgsFunction<T>,
    A: ArgsFunction<F::Output>,
{
    type Output = A::Output;

    #[inline]
    fn apply(&self, values: &[T]) -> Self::Output {
        let intermediate = self.first.apply(values);
        self.after.apply(slice::from_ref(&intermediate))
    }
}

/// The canonical function returning the last argument.
///
/// Produces a clone of the final element of the slice, or `None` when
/// the slice is empty. Created by [`last`].
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{function, ArgsFunction};
///
/// assert_eq!(function::last().apply(&["a", "b", "c"]), Some("c"));
/// assert_eq!(function::last().apply(&[] as &[&str]), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last;

/// Returns the canonical last-argument function.
#[inline]
pub const fn last() -> Last {
    Last
}

impl<T: Clone> ArgsFunction<T> for Last {
    type Output = Option<T>;

    #[inline]
    fn apply(&self, values: &[T]) -> Option<T> {
        values.last().cloned()
    }
}

static_assertions::assert_impl_all!(Last: Send, Sync);
static_assertions::assert_impl_all!(AndThen<Last, Last>: Send, Sync);
static_assertions::assert_impl_all!(Compose<Last, Last>: Send, Sync);
