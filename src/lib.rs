//! # fnkit
//!
//! Small functional utilities for Rust.
//!
//! ## Overview
//!
//! - **Currying**: [`curry::curry`] turns a fixed-arity function into a value
//!   that accepts its arguments all at once or batch by batch
//! - **Type Classes**: Functor, Applicative and Monad with the free adapters
//!   `fmap`, `chain`, `ap` and `of`
//! - **Dynamic Values**: capability probing for duck-typed foreign values
//! - **Utilities**: arithmetic, array, string, object and nullable helpers
//!
//! ## Feature Flags
//!
//! - `curry`: Currying adapter
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `dynamic`: Capability probing over [`dynamic::Dynamic`] values
//! - `utility`: Data helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! fn add_three(first: i32, second: i32, third: i32) -> i32 {
//!     first + second + third
//! }
//!
//! let curried = curry(add_three);
//! assert_eq!(curried.apply((1,)).apply((2, 3)), 6);
//! assert_eq!(curried.apply((1, 2)).apply((3,)), 6);
//! assert_eq!(curried.apply((1, 2, 3)), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits. The `dynamic` adapters share
/// their names with the typed ones and are left out; import them through
/// [`dynamic`] explicitly.
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "dynamic")]
pub mod dynamic;

#[cfg(feature = "utility")]
pub mod utility;
