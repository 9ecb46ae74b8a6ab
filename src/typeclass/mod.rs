//! Type class traits and the `fmap` / `chain` / `ap` / `of` adapters.
//!
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: sequencing computations with dependency
//!
//! Capabilities are opted into by implementing the traits; the free
//! functions [`fmap`], [`chain`], [`ap`] and [`of`] dispatch to them.
//! Values coming from a duck-typed world, where a capability is discovered
//! by probing method names at runtime, go through
//! [`dynamic`](crate::dynamic) instead.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types; [`TypeConstructor`] emulates them
//! with generic associated types.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::typeclass::{chain, fmap, of};
//!
//! let parsed = chain(|text: &str| text.parse::<i32>().ok(), Some("21"));
//! assert_eq!(fmap(|n: i32| n * 2, parsed), Some(42));
//! assert_eq!(of::<Vec<()>, _>(1), vec![1]);
//! ```

mod adapters;
mod applicative;
mod functor;
mod higher;
mod monad;

pub use adapters::{ap, chain, fmap, of};
pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
