//! Typed currying for functions of arity 2 to 5.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// A function whose arity is known from its declared parameter list.
///
/// Implemented for every `Fn(A, B, ..) -> R` with 2 to 5 parameters, with
/// `Args` the parameter tuple. This is what lets [`curry`] infer the
/// parameter types of a plain `fn` item without annotations.
///
/// # Examples
///
/// ```
/// use fnkit::curry::Callable;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// fn arity_of<F: Callable<Args>, Args>(_: &F) -> usize { F::ARITY }
///
/// assert_eq!(arity_of(&add), 2);
/// assert_eq!(add.call_with((1, 2)), 3);
/// ```
pub trait Callable<Args> {
    /// Number of declared parameters.
    const ARITY: usize;

    /// The value produced when the function fires.
    type Output;

    /// Calls the function with a complete argument tuple.
    fn call_with(&self, arguments: Args) -> Self::Output;
}

impl_callable!(2; A, B);
impl_callable!(3; A, B, C);
impl_callable!(4; A, B, C, D);
impl_callable!(5; A, B, C, D, E);

/// A tuple that can be bound ahead of time to a function taking `Args`.
///
/// Implemented for every strict prefix of `Args`, including `()`. A tuple
/// covering every parameter is not a prefix: binding it would leave nothing
/// to curry.
pub trait Prefix<Args> {
    /// Number of elements in the prefix.
    const LENGTH: usize;
}

impl_prefix!([A, B] [] [A]);
impl_prefix!([A, B, C] [] [A] [A, B]);
impl_prefix!([A, B, C, D] [] [A] [A, B] [A, B, C]);
impl_prefix!([A, B, C, D, E] [] [A] [A, B] [A, B, C] [A, B, C, D]);

/// Applies the next batch of arguments to a curried function.
///
/// `Next` is a tuple holding the batch. When the bound arguments plus `Next`
/// cover every parameter, [`Apply::Output`] is the target's return type and
/// `apply` fires the target. Otherwise it is a new [`Curried`] with the
/// batch appended to the bound arguments.
///
/// Batches that would overflow the arity, or whose element types do not
/// match the pending parameters, have no implementation and are rejected at
/// compile time.
pub trait Apply<Next> {
    /// Either the target's result or the next partial application.
    type Output;

    /// Applies `next` after the arguments already bound.
    fn apply(&self, next: Next) -> Self::Output;
}

/// A curried function with `Bound` arguments already applied.
///
/// Created by [`curry`] or [`curry_with`]. The target is shared through
/// `Rc`, so cloning a partial application is cheap apart from the bound
/// arguments themselves, and a partial application can be applied any number
/// of times.
pub struct Curried<F, Args, Bound> {
    pub(super) function: Rc<F>,
    pub(super) bound: Bound,
    pub(super) arguments: PhantomData<fn(Args)>,
}

/// Converts a function of arity 2 to 5 into its curried form.
///
/// # Examples
///
/// ```
/// use fnkit::curry::{Apply, curry};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry(add);
/// let add_five = curried.apply((5,));
/// assert_eq!(add_five.apply((3,)), 8);
/// assert_eq!(add_five.apply((10,)), 15);
/// assert_eq!(curried.apply((1, 2)), 3);
/// ```
pub fn curry<F, Args>(function: F) -> Curried<F, Args, ()>
where
    F: Callable<Args>,
    (): Prefix<Args>,
{
    curry_with(function, ())
}

/// Converts a function into its curried form with some arguments preset.
///
/// `preset` must be a strict prefix of the parameter tuple.
///
/// # Examples
///
/// ```
/// use fnkit::curry::{Apply, curry_with};
///
/// fn greet(greeting: String, name: String, punctuation: char) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let hello = curry_with(greet, ("Hello".to_string(),));
/// assert_eq!(hello.apply(("World".to_string(), '!')), "Hello, World!");
/// ```
pub fn curry_with<F, Args, Bound>(function: F, preset: Bound) -> Curried<F, Args, Bound>
where
    F: Callable<Args>,
    Bound: Prefix<Args>,
{
    Curried {
        function: Rc::new(function),
        bound: preset,
        arguments: PhantomData,
    }
}

impl<F, Args, Bound> Curried<F, Args, Bound>
where
    F: Callable<Args>,
    Bound: Prefix<Args>,
{
    /// Number of parameters the target declares.
    #[inline]
    pub const fn arity(&self) -> usize {
        F::ARITY
    }

    /// Number of arguments already bound.
    #[inline]
    pub const fn bound_count(&self) -> usize {
        Bound::LENGTH
    }

    /// Number of arguments still needed before the target fires.
    #[inline]
    pub const fn remaining(&self) -> usize {
        F::ARITY - Bound::LENGTH
    }

    /// The arguments bound so far.
    #[inline]
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }
}

impl<F, Args, Bound: Clone> Clone for Curried<F, Args, Bound> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            bound: self.bound.clone(),
            arguments: PhantomData,
        }
    }
}

impl<F, Args, Bound: fmt::Debug> fmt::Debug for Curried<F, Args, Bound> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

impl<F, Args, Bound: Clone> Apply<()> for Curried<F, Args, Bound> {
    type Output = Self;

    #[inline]
    fn apply(&self, (): ()) -> Self {
        self.clone()
    }
}

impl_apply!(partial [A, B] [] [A]);
impl_apply!(complete [A, B] [] [A, B]);
impl_apply!(complete [A, B] [A] [B]);

impl_apply!(partial [A, B, C] [] [A]);
impl_apply!(partial [A, B, C] [] [A, B]);
impl_apply!(complete [A, B, C] [] [A, B, C]);
impl_apply!(partial [A, B, C] [A] [B]);
impl_apply!(complete [A, B, C] [A] [B, C]);
impl_apply!(complete [A, B, C] [A, B] [C]);

impl_apply!(partial [A, B, C, D] [] [A]);
impl_apply!(partial [A, B, C, D] [] [A, B]);
impl_apply!(partial [A, B, C, D] [] [A, B, C]);
impl_apply!(complete [A, B, C, D] [] [A, B, C, D]);
impl_apply!(partial [A, B, C, D] [A] [B]);
impl_apply!(partial [A, B, C, D] [A] [B, C]);
impl_apply!(complete [A, B, C, D] [A] [B, C, D]);
impl_apply!(partial [A, B, C, D] [A, B] [C]);
impl_apply!(complete [A, B, C, D] [A, B] [C, D]);
impl_apply!(complete [A, B, C, D] [A, B, C] [D]);

impl_apply!(partial [A, B, C, D, E] [] [A]);
impl_apply!(partial [A, B, C, D, E] [] [A, B]);
impl_apply!(partial [A, B, C, D, E] [] [A, B, C]);
impl_apply!(partial [A, B, C, D, E] [] [A, B, C, D]);
impl_apply!(complete [A, B, C, D, E] [] [A, B, C, D, E]);
impl_apply!(partial [A, B, C, D, E] [A] [B]);
impl_apply!(partial [A, B, C, D, E] [A] [B, C]);
impl_apply!(partial [A, B, C, D, E] [A] [B, C, D]);
impl_apply!(complete [A, B, C, D, E] [A] [B, C, D, E]);
impl_apply!(partial [A, B, C, D, E] [A, B] [C]);
impl_apply!(partial [A, B, C, D, E] [A, B] [C, D]);
impl_apply!(complete [A, B, C, D, E] [A, B] [C, D, E]);
impl_apply!(partial [A, B, C, D, E] [A, B, C] [D]);
impl_apply!(complete [A, B, C, D, E] [A, B, C] [D, E]);
impl_apply!(complete [A, B, C, D, E] [A, B, C, D] [E]);

static_assertions::assert_not_impl_any!(Curried<fn(i32, i32) -> i32, (i32, i32), ()>: Send, Sync);
