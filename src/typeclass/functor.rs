//! Functor: mapping over the values inside a container.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;

/// Types whose contents can be transformed without changing their shape.
///
/// The mapping function is `FnMut` so that multi-element containers such as
/// `Vec` share the trait with single-slot ones such as `Option`.
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::Functor;
///
/// assert_eq!(Some(5).fmap(|n| n.to_string()), Some("5".to_string()));
/// assert_eq!(vec![1, 2, 3].fmap(|n| n * 2), vec![2, 4, 6]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every value inside the container with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> B,
    {
        Box::new(function(*self))
    }
}
