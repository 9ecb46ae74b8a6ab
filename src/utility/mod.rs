//! Thin wrappers over built-in operations.
//!
//! - [`math`]: arithmetic, rounding and aggregates
//! - [`array`]: slice ends, ranges, deduplication
//! - [`string`]: trimming, case conversion, splitting
//! - [`object`]: picking, omitting, merging and path lookup on JSON
//! - [`maybe`]: nullable values
//!
//! Helpers that take a piece of data take it last, so they compose with
//! [`curry`](crate::curry) when the `curry` feature is enabled.

pub mod array;
pub mod math;
pub mod maybe;
pub mod object;
pub mod string;
