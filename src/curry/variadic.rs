//! Erased currying for functions of any fixed arity.

use std::fmt;
use std::rc::Rc;

use arrayvec::ArrayVec;

/// Result of applying a batch of arguments to a [`VariadicCurried`].
///
/// # Examples
///
/// ```
/// use fnkit::curry::{Application, curry_n};
///
/// let join = curry_n(|[first, second, third]: [&'static str; 3]| format!("{first}{second}{third}"));
///
/// match join.apply(["a"]) {
///     Application::Partial(next) => assert_eq!(next.accumulated(), &["a"]),
///     Application::Complete(_) => unreachable!(),
/// }
/// assert_eq!(join.apply(["a", "b", "c"]).complete(), Some("abc".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Application<P, R> {
    /// Not enough arguments yet; holds the next callable.
    Partial(P),
    /// The target fired; holds its result.
    Complete(R),
}

impl<P, R> Application<P, R> {
    /// Returns `true` if the target has not fired yet.
    #[inline]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// Returns `true` if the target fired.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the target's result, discarding a partial application.
    #[inline]
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the next callable, discarding a result.
    #[inline]
    pub fn partial(self) -> Option<P> {
        match self {
            Self::Partial(next) => Some(next),
            Self::Complete(_) => None,
        }
    }
}

/// A curried function of arity `N` whose arguments all have type `V`.
///
/// The arity comes from the `[V; N]` parameter of the target, so it is fixed
/// at compile time like any declared parameter list. The accumulated
/// arguments never exceed `N`: arguments supplied after the list is full are
/// dropped.
pub struct VariadicCurried<F, V, const N: usize> {
    function: Rc<F>,
    accumulated: ArrayVec<V, N>,
}

/// Converts a function taking `[V; N]` into its erased curried form.
///
/// # Examples
///
/// ```
/// use fnkit::curry::curry_n;
///
/// let sum_six = curry_n(|values: [i32; 6]| values.iter().sum::<i32>());
///
/// let step = sum_six.apply([1, 2]).partial().unwrap();
/// let step = step.apply([3]).partial().unwrap();
/// assert_eq!(step.apply([4, 5, 6]).complete(), Some(21));
/// ```
pub fn curry_n<F, V, R, const N: usize>(function: F) -> VariadicCurried<F, V, N>
where
    F: Fn([V; N]) -> R,
{
    VariadicCurried {
        function: Rc::new(function),
        accumulated: ArrayVec::new(),
    }
}

/// Converts a function taking `[V; N]` into its erased curried form with
/// some arguments preset.
///
/// Presets beyond `N` are dropped. A preset that fills every parameter makes
/// the next call fire, whatever it supplies.
///
/// # Examples
///
/// ```
/// use fnkit::curry::curry_n_with;
///
/// let add = curry_n_with(|[first, second]: [i32; 2]| first + second, [1]);
/// assert_eq!(add.apply([2]).complete(), Some(3));
/// ```
pub fn curry_n_with<F, V, R, I, const N: usize>(function: F, preset: I) -> VariadicCurried<F, V, N>
where
    F: Fn([V; N]) -> R,
    I: IntoIterator<Item = V>,
{
    VariadicCurried {
        function: Rc::new(function),
        accumulated: preset.into_iter().take(N).collect(),
    }
}

impl<F, V, R, const N: usize> VariadicCurried<F, V, N>
where
    F: Fn([V; N]) -> R,
    V: Clone,
{
    /// Appends `arguments` to the accumulated list and fires the target if
    /// the list is complete.
    ///
    /// The receiver is left untouched, so the same partial application can
    /// start any number of chains.
    pub fn apply<I>(&self, arguments: I) -> Application<Self, R>
    where
        I: IntoIterator<Item = V>,
    {
        let mut accumulated = self.accumulated.clone();
        let remaining = accumulated.remaining_capacity();
        accumulated.extend(arguments.into_iter().take(remaining));

        match accumulated.into_inner() {
            Ok(arguments) => Application::Complete((self.function)(arguments)),
            Err(accumulated) => Application::Partial(Self {
                function: Rc::clone(&self.function),
                accumulated,
            }),
        }
    }
}

impl<F, V, const N: usize> VariadicCurried<F, V, N> {
    /// Number of parameters the target declares.
    #[inline]
    pub const fn arity(&self) -> usize {
        N
    }

    /// The arguments accumulated so far, in call order.
    #[inline]
    pub fn accumulated(&self) -> &[V] {
        &self.accumulated
    }

    /// Number of arguments still needed before the target fires.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.accumulated.remaining_capacity()
    }
}

impl<F, V: Clone, const N: usize> Clone for VariadicCurried<F, V, N> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            accumulated: self.accumulated.clone(),
        }
    }
}

impl<F, V: fmt::Debug, const N: usize> fmt::Debug for VariadicCurried<F, V, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("VariadicCurried")
            .field("arity", &N)
            .field("accumulated", &self.accumulated)
            .finish_non_exhaustive()
    }
}
