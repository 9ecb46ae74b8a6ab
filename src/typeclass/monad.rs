//! Monad: sequencing computations that depend on previous results.
//!
//! # Laws
//!
//! ```text
//! pure(a).chain(f) == f(a)
//! m.chain(pure) == m
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```

use super::applicative::Applicative;

/// Applicatives whose values can feed a function producing a new container.
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::Monad;
///
/// let parsed = Some("42").chain(|text| text.parse::<i32>().ok());
/// assert_eq!(parsed, Some(42));
///
/// let pairs = vec![1, 2].chain(|n| vec![n, n * 10]);
/// assert_eq!(pairs, vec![1, 10, 2, 20]);
/// ```
pub trait Monad: Applicative {
    /// Feeds every inner value to `function` and flattens the result.
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::chain`].
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.chain(function)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

impl<T> Monad for Vec<T> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<T> Monad for Box<T> {
    #[inline]
    fn chain<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> Box<B>,
    {
        function(*self)
    }
}
