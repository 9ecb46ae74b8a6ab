//! Free-function adapters over the type classes.
//!
//! `fmap`, `chain`, `ap` and `of` take the function (or representative)
//! first and the container last, so they read like their point-free
//! counterparts and slot into [`curry`](crate::curry) pipelines. Dispatch is
//! static: a container lacking a capability is a compile error, not a
//! runtime one.

use super::applicative::Applicative;
use super::functor::Functor;
use super::monad::Monad;

/// Maps `function` over `target`.
///
/// ```rust
/// use fnkit::typeclass::fmap;
///
/// assert_eq!(fmap(|n: i32| n + 1, Some(1)), Some(2));
/// assert_eq!(fmap(|n: i32| n + 1, vec![1, 2]), vec![2, 3]);
/// ```
#[inline]
pub fn fmap<FA, B, F>(function: F, target: FA) -> FA::WithType<B>
where
    FA: Functor,
    F: FnMut(FA::Inner) -> B,
{
    target.fmap(function)
}

/// Chains `function` after `target`.
///
/// ```rust
/// use fnkit::typeclass::chain;
///
/// let halve = |n: i32| (n % 2 == 0).then_some(n / 2);
/// assert_eq!(chain(halve, Some(4)), Some(2));
/// assert_eq!(chain(halve, Some(3)), None);
/// ```
#[inline]
pub fn chain<MA, B, F>(function: F, target: MA) -> MA::WithType<B>
where
    MA: Monad,
    F: FnMut(MA::Inner) -> MA::WithType<B>,
{
    target.chain(function)
}

/// Applies the wrapped `functions` to the wrapped `target`.
///
/// ```rust
/// use fnkit::typeclass::ap;
///
/// let increment: Option<fn(i32) -> i32> = Some(|n| n + 1);
/// assert_eq!(ap(increment, Some(1)), Some(2));
/// ```
#[inline]
pub fn ap<FF, B, Output>(functions: FF, target: FF::WithType<B>) -> FF::WithType<Output>
where
    FF: Applicative,
    FF::Inner: FnMut(B) -> Output,
    B: Clone,
{
    functions.ap(target)
}

/// Lifts `value` into the applicative named by the representative `FA`.
///
/// Only the constructor of `FA` matters; its inner type is ignored.
///
/// ```rust
/// use fnkit::typeclass::of;
///
/// assert_eq!(of::<Option<()>, _>(3), Some(3));
/// assert_eq!(of::<Vec<()>, _>("a"), vec!["a"]);
/// ```
#[inline]
pub fn of<FA, B>(value: B) -> FA::WithType<B>
where
    FA: Applicative,
{
    FA::pure(value)
}
