//! Currying adapter.
//!
//! Turns a fixed-arity function into a value that accepts its arguments
//! either all at once or split across successive calls. Each call either
//! fires the target, when enough arguments have accumulated, or returns a
//! new partial application holding the extended argument list.
//!
//! # Two tiers
//!
//! - [`curry`] / [`curry_with`]: typed tier for functions of arity 2 to 5.
//!   Every way of splitting the pending parameters into a next batch is a
//!   separate [`Apply`] implementation, so each step is checked at compile
//!   time and the result type tells whether the target fired.
//! - [`curry_n`] / [`curry_n_with`]: erased tier for any arity, including
//!   0, 1 and 6+. Arguments share one type `V` and every call answers with an
//!   [`Application`], either `Partial` or `Complete`.
//!
//! # Examples
//!
//! ## Typed
//!
//! ```
//! use fnkit::curry::{Apply, curry, curry_with};
//!
//! fn volume(width: i32, height: i32, depth: i32) -> i32 {
//!     width * height * depth
//! }
//!
//! let curried = curry(volume);
//! assert_eq!(curried.apply((2,)).apply((3, 4)), 24);
//! assert_eq!(curried.apply((2, 3)).apply((4,)), 24);
//! assert_eq!(curried.apply((2, 3, 4)), 24);
//!
//! let flat = curry_with(volume, (1,));
//! assert_eq!(flat.apply((5, 6)), 30);
//! ```
//!
//! ## Erased
//!
//! ```
//! use fnkit::curry::{Application, curry_n};
//!
//! let add = curry_n(|[first, second]: [i32; 2]| first + second);
//!
//! let Application::Partial(add_one) = add.apply([1]) else { unreachable!() };
//! assert_eq!(add_one.apply([2]).complete(), Some(3));
//!
//! // Extra arguments beyond the arity are dropped.
//! assert_eq!(add.apply([1, 2, 3]).complete(), Some(3));
//! ```
//!
//! # Zero-argument calls
//!
//! Applying an empty batch is a no-op: it returns an equivalent partial
//! application and never fires the target, unless the accumulated list was
//! already complete (arity 0, or a preset covering every parameter in the
//! erased tier).

#[macro_use]
mod macros;
mod typed;
mod variadic;

pub use typed::{Apply, Callable, Curried, Prefix, curry, curry_with};
pub use variadic::{Application, VariadicCurried, curry_n, curry_n_with};
