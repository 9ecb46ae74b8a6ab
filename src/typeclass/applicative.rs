//! Applicative: lifting values and applying wrapped functions.
//!
//! # Laws
//!
//! ```text
//! pure(identity).ap(v) == v
//! pure(f).ap(pure(x)) == pure(f(x))
//! ```

use super::functor::Functor;

/// Functors that can lift a plain value and apply wrapped functions.
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::Applicative;
///
/// let lifted: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(lifted, Some(42));
///
/// let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
/// assert_eq!(functions.ap(vec![1, 2]), vec![2, 3, 10, 20]);
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies the wrapped function(s) to the wrapped value(s).
    ///
    /// For `Vec`, every function is applied to every value, functions in
    /// the outer loop; values are cloned for that reason.
    fn ap<B, Output>(self, values: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnMut(B) -> Output,
        B: Clone;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn ap<B, Output>(self, values: Option<B>) -> Option<Output>
    where
        A: FnMut(B) -> Output,
        B: Clone,
    {
        match (self, values) {
            (Some(mut function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn ap<B, Output>(self, values: Result<B, E>) -> Result<Output, E>
    where
        T: FnMut(B) -> Output,
        B: Clone,
    {
        match (self, values) {
            (Ok(mut function), Ok(value)) => Ok(function(value)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

impl<T> Applicative for Vec<T> {
    #[inline]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    fn ap<B, Output>(self, values: Vec<B>) -> Vec<Output>
    where
        T: FnMut(B) -> Output,
        B: Clone,
    {
        let mut results = Vec::with_capacity(self.len() * values.len());
        for mut function in self {
            for value in &values {
                results.push(function(value.clone()));
            }
        }
        results
    }
}

impl<T> Applicative for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn ap<B, Output>(self, values: Box<B>) -> Box<Output>
    where
        T: FnMut(B) -> Output,
        B: Clone,
    {
        let mut function = *self;
        Box::new(function(*values))
    }
}
