//! Capability probing for duck-typed foreign values.
//!
//! Rust types opt into `fmap` / `chain` / `ap` / `of` by implementing the
//! traits in [`typeclass`](crate::typeclass). Values that arrive from a
//! dynamically typed ecosystem carry their capabilities as methods instead,
//! under one of several naming conventions. This module models those values
//! as [`Dynamic`] and dispatches by probing, in order:
//!
//! 1. the conventional method name (`map`; `chain`, then `flatMap`; `ap`; `of`),
//! 2. the namespaced string key (`fantasy-land/map`, ...),
//! 3. the namespaced registry symbol.
//!
//! Only objects carry methods. Plain data, JSON arrays included, has no
//! `map` or `flatMap` of its own; wrap it in an [`Object`] to give it some.
//!
//! Dispatch on `Undefined` or `Null` fails with
//! [`CapabilityError::InvalidTarget`]; a value with no matching method fails
//! with [`CapabilityError::UnimplementedCapability`].
//!
//! # Examples
//!
//! ```rust
//! use fnkit::dynamic::{self, CapabilityError, Dynamic, Function, Object};
//! use serde_json::json;
//!
//! // A container whose `map` applies the function to its `value` property.
//! fn just(value: Dynamic) -> Dynamic {
//!     Object::new()
//!         .with("value", value)
//!         .with(
//!             "map",
//!             Function::new(|receiver, arguments| {
//!                 let inner = receiver.get(&"value".into()).cloned().unwrap_or_default();
//!                 match arguments.first().and_then(Dynamic::as_function) {
//!                     Some(function) => just(function.call(&Dynamic::Undefined, vec![inner])),
//!                     None => Dynamic::Undefined,
//!                 }
//!             }),
//!         )
//!         .into()
//! }
//!
//! let double = Function::unary(|value| {
//!     json!(value.as_data().and_then(|data| data.as_i64()).unwrap_or(0) * 2).into()
//! });
//!
//! let mapped = dynamic::fmap(double.clone(), &just(json!(21).into())).unwrap();
//! assert_eq!(mapped.get(&"value".into()), Some(&Dynamic::from(json!(42))));
//!
//! assert!(matches!(
//!     dynamic::fmap(double, &Dynamic::Null),
//!     Err(CapabilityError::InvalidTarget { .. })
//! ));
//! ```

mod adapters;
mod capability;
mod error;
mod value;

pub use adapters::{ap, chain, fmap, of};
pub use capability::{Capability, NAMESPACE};
pub use error::CapabilityError;
pub use value::{Dynamic, Function, Object, PropertyKey, Symbol};
