//! Boolean predicates with short-circuiting logical composition.
//!
//! A [`Predicate`] tests a single value. Predicates compose with
//! [`Predicate::and`] and [`Predicate::or`], both short-circuiting:
//! the second operand is evaluated only when the first does not decide
//! the result. [`multi_and`] and [`multi_or`] left-fold any number of
//! predicates and fall back to the fold identities [`always`] and
//! [`never`] on empty input.
//!
//! # The `is_equal` sharp edge
//!
//! [`is_equal`] with more than one target is an **all-match** test: the
//! tested value must equal every target simultaneously, so two distinct
//! targets produce an unsatisfiable predicate. This mirrors the
//! contract this library implements rather than the any-match most
//! callers might expect; see the function docs before reaching for it
//! with multiple targets.

/// A boolean test over a single value.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{predicate, Predicate};
///
/// let positive = predicate::from_fn(|value: &i32| *value > 0);
/// assert!(positive.test(&1));
/// assert!(!positive.test(&-1));
/// ```
pub trait Predicate<T> {
    /// Evaluates this predicate on the given value.
    fn test(&self, value: &T) -> bool;

    /// Returns a short-circuiting logical AND of this predicate and
    /// `other`.
    ///
    /// `other` is evaluated only when this predicate is true. A panic
    /// raised while evaluating this predicate propagates to the caller
    /// and `other` is never evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lamargs::combinator::{predicate, Predicate};
    ///
    /// let positive = predicate::from_fn(|value: &i32| *value > 0);
    /// let even = predicate::from_fn(|value: &i32| value % 2 == 0);
    ///
    /// let positive_even = positive.and(even);
    /// assert!(positive_even.test(&4));
    /// assert!(!positive_even.test(&3));
    /// assert!(!positive_even.test(&-4));
    /// ```
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        And {
            first: self,
            second: other,
        }
    }

    /// Returns a short-circuiting logical OR of this predicate and
    /// `other`.
    ///
    /// `other` is evaluated only when this predicate is false.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lamargs::combinator::{predicate, Predicate};
    ///
    /// let negative = predicate::from_fn(|value: &i32| *value < 0);
    /// let zero = predicate::from_fn(|value: &i32| *value == 0);
    ///
    /// assert!(negative.or(zero).test(&0));
    /// ```
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Or {
            first: self,
            second: other,
        }
    }

    /// Returns the logical complement of this predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lamargs::combinator::{predicate, Predicate};
    ///
    /// let positive = predicate::from_fn(|value: &i32| *value > 0);
    /// assert!(positive.negate().test(&-1));
    /// ```
    fn negate(self) -> Negate<Self>
    where
        Self: Sized,
    {
        Negate { inner: self }
    }
}

/// A predicate wrapping an arbitrary closure.
///
/// Created by [`from_fn`]. Not serializable, unlike the library's own
/// predicate values.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    test: F,
}

impl<F> core::fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a predicate from a closure.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{predicate, Predicate};
///
/// let empty = predicate::from_fn(|value: &String| value.is_empty());
/// assert!(empty.test(&String::new()));
/// ```
pub fn from_fn<T, F>(test: F) -> FromFn<F>
where
    F: Fn(&T) -> bool,
{
    FromFn { test }
}

impl<T, F> Predicate<T> for FromFn<F>
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }
}

impl<T, P> Predicate<T> for &P
where
    P: Predicate<T> + ?Sized,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        (**self).test(value)
    }
}

impl<T, P> Predicate<T> for Box<P>
where
    P: Predicate<T> + ?Sized,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        (**self).test(value)
    }
}

/// Short-circuiting conjunction of two predicates. See
/// [`Predicate::and`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Predicate<T> for And<A, B>
where
    A: Predicate<T>,
    B: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.first.test(value) && self.second.test(value)
    }
}

/// Short-circuiting disjunction of two predicates. See
/// [`Predicate::or`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Predicate<T> for Or<A, B>
where
    A: Predicate<T>,
    B: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.first.test(value) || self.second.test(value)
    }
}

/// Logical complement of a predicate. See [`Predicate::negate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Negate<P> {
    inner: P,
}

impl<T, P> Predicate<T> for Negate<P>
where
    P: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.inner.test(value)
    }
}

/// The always-true predicate, identity of [`multi_and`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Always;

/// Returns the always-true predicate.
#[inline]
pub const fn always() -> Always {
    Always
}

impl<T> Predicate<T> for Always {
    #[inline]
    fn test(&self, _value: &T) -> bool {
        true
    }
}

/// The always-false predicate, identity of [`multi_or`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Never;

/// Returns the always-false predicate.
#[inline]
pub const fn never() -> Never {
    Never
}

impl<T> Predicate<T> for Never {
    #[inline]
    fn test(&self, _value: &T) -> bool {
        false
    }
}

/// Left fold of predicates under AND. See [`multi_and`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiAnd<P> {
    stages: Vec<P>,
}

/// Folds the supplied predicates into one, left to right, with
/// [`Predicate::and`] semantics: evaluation stops at the first false
/// stage. An empty sequence yields the always-true identity,
/// equivalent to [`always`].
///
/// Operands of a single type fold directly; mixed operand types go
/// through `Box<dyn Predicate<T>>`.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{predicate, Predicate};
///
/// let stages: Vec<Box<dyn Predicate<i32>>> = vec![
///     Box::new(predicate::from_fn(|value: &i32| *value > 0)),
///     Box::new(predicate::from_fn(|value: &i32| *value < 10)),
/// ];
///
/// let within = predicate::multi_and(stages);
/// assert!(within.test(&5));
/// assert!(!within.test(&50));
/// ```
pub fn multi_and<P>(predicates: impl IntoIterator<Item = P>) -> MultiAnd<P> {
    MultiAnd {
        stages: predicates.into_iter().collect(),
    }
}

impl<T, P> Predicate<T> for MultiAnd<P>
where
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        self.stages.iter().all(|stage| stage.test(value))
    }
}

/// Left fold of predicates under OR. See [`multi_or`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiOr<P> {
    stages: Vec<P>,
}

/// Folds the supplied predicates into one, left to right, with
/// [`Predicate::or`] semantics: evaluation stops at the first true
/// stage. An empty sequence yields the always-false identity,
/// equivalent to [`never`].
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{predicate, Predicate};
///
/// let stages: Vec<Box<dyn Predicate<i32>>> = vec![
///     Box::new(predicate::from_fn(|value: &i32| *value < 0)),
///     Box::new(predicate::from_fn(|value: &i32| *value > 10)),
/// ];
///
/// let outside = predicate::multi_or(stages);
/// assert!(outside.test(&-1));
/// assert!(!outside.test(&5));
/// ```
pub fn multi_or<P>(predicates: impl IntoIterator<Item = P>) -> MultiOr<P> {
    MultiOr {
        stages: predicates.into_iter().collect(),
    }
}

impl<T, P> Predicate<T> for MultiOr<P>
where
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        self.stages.iter().any(|stage| stage.test(value))
    }
}

/// Equality test against a target sequence. See [`is_equal`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsEqual<T> {
    targets: Option<Vec<T>>,
}

/// Returns a predicate testing equality against the target sequence.
///
/// With an absent sequence (`None`), the predicate is true only for an
/// absent tested value; this variant is usable through the
/// `Predicate<Option<T>>` impl, where absence is representable. When
/// testing a plain `T` it is false for every value.
///
/// With a present sequence, the predicate is true only when the tested
/// value equals **every** target. This is an all-match test, not an
/// any-match: `is_equal(vec![5, 6])` is satisfied by no value, and the
/// empty present sequence is vacuously true for every value. Use
/// [`multi_or`] over single-target predicates for any-match semantics.
///
/// # Examples
///
/// ```rust
/// use lamargs::combinator::{predicate, Predicate};
///
/// let five = predicate::is_equal(vec![5]);
/// assert!(five.test(&5));
/// assert!(!five.test(&6));
///
/// // All-match: no value equals both targets.
/// let impossible = predicate::is_equal(vec![5, 6]);
/// assert!(!impossible.test(&5));
/// assert!(!impossible.test(&6));
///
/// // Absent target sequence: true only for an absent value.
/// let absent: predicate::IsEqual<i32> = predicate::is_equal(None);
/// assert!(absent.test(&None));
/// assert!(!absent.test(&Some(5)));
/// ```
pub fn is_equal<T>(targets: impl Into<Option<Vec<T>>>) -> IsEqual<T> {
    IsEqual {
        targets: targets.into(),
    }
}

impl<T: PartialEq> Predicate<T> for IsEqual<T> {
    fn test(&self, value: &T) -> bool {
        match &self.targets {
            // A plain value is never absent.
            None => false,
            Some(targets) => targets.iter().all(|target| target == value),
        }
    }
}

impl<T: PartialEq> Predicate<Option<T>> for IsEqual<T> {
    fn test(&self, value: &Option<T>) -> bool {
        match &self.targets {
            None => value.is_none(),
            Some(targets) => targets.iter().all(|target| value.as_ref() == Some(target)),
        }
    }
}

static_assertions::assert_impl_all!(Always: Send, Sync);
static_assertions::assert_impl_all!(Never: Send, Sync);
static_assertions::assert_impl_all!(And<Always, Never>: Send, Sync);
static_assertions::assert_impl_all!(IsEqual<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_inverts() {
        let positive = from_fn(|value: &i32| *value > 0);

        assert!(positive.negate().test(&-1));
        assert!(!positive.negate().test(&1));
    }

    #[test]
    fn empty_folds_are_identities() {
        assert!(multi_and(Vec::<Always>::new()).test(&"anything"));
        assert!(!multi_or(Vec::<Always>::new()).test(&"anything"));
    }

    #[test]
    fn is_equal_empty_present_sequence_is_vacuously_true() {
        let vacuous = is_equal(Vec::<i32>::new());
        assert!(vacuous.test(&0));
        assert!(vacuous.test(&42));
    }
}
