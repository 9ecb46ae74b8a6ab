//! `fmap` / `chain` / `ap` / `of` over dynamic values.

use super::capability::Capability;
use super::error::CapabilityError;
use super::value::{Dynamic, Function};

fn invoke(
    capability: Capability,
    target: &Dynamic,
    argument: Dynamic,
) -> Result<Dynamic, CapabilityError> {
    let (_, method) = capability.resolve(target)?;
    Ok(method.call(target, vec![argument]))
}

/// Calls the `map` capability of `target` with `function`.
///
/// # Errors
///
/// [`CapabilityError::InvalidTarget`] for a nullish target,
/// [`CapabilityError::UnimplementedCapability`] if `target` has no `map`.
pub fn fmap(function: Function, target: &Dynamic) -> Result<Dynamic, CapabilityError> {
    invoke(Capability::Map, target, function.into())
}

/// Calls the `chain` capability of `target` with `function`, falling back
/// to a `flatMap` method.
///
/// # Errors
///
/// [`CapabilityError::InvalidTarget`] for a nullish target,
/// [`CapabilityError::UnimplementedCapability`] if `target` has neither.
pub fn chain(function: Function, target: &Dynamic) -> Result<Dynamic, CapabilityError> {
    invoke(Capability::Chain, target, function.into())
}

/// Calls the `ap` capability of `target` with the wrapped `functions`.
///
/// # Errors
///
/// [`CapabilityError::InvalidTarget`] for a nullish target,
/// [`CapabilityError::UnimplementedCapability`] if `target` has no `ap`.
pub fn ap(functions: Dynamic, target: &Dynamic) -> Result<Dynamic, CapabilityError> {
    invoke(Capability::Ap, target, functions)
}

/// Lifts `value` through the type representative `representative`.
///
/// Probes the `of` capability first. When none is found and the
/// representative is itself a function, it is called as a constructor with
/// `value`.
///
/// # Errors
///
/// [`CapabilityError::InvalidTarget`] for a nullish representative,
/// [`CapabilityError::UnimplementedCapability`] if it has no `of` and is not
/// callable.
pub fn of(representative: &Dynamic, value: Dynamic) -> Result<Dynamic, CapabilityError> {
    match Capability::Of.resolve(representative) {
        Ok((_, method)) => Ok(method.call(representative, vec![value])),
        Err(error) => match representative {
            Dynamic::Function(constructor) if error.is_unimplemented_capability() => {
                tracing::trace!(constructor = constructor.name(), "lifting through constructor");
                Ok(constructor.call(&Dynamic::Undefined, vec![value]))
            }
            _ => Err(error),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::Object;
    use serde_json::json;

    fn tagged(tag: &'static str) -> Dynamic {
        Object::new()
            .with("map", Function::new(move |_, _| json!(tag).into()))
            .into()
    }

    #[test]
    fn fmap_passes_function_as_single_argument() {
        let target: Dynamic = Object::new()
            .with(
                "map",
                Function::new(|receiver, arguments| {
                    assert!(receiver.as_object().is_some());
                    assert_eq!(arguments.len(), 1);
                    arguments[0].as_function().map_or(Dynamic::Null, |function| {
                        function.call(&Dynamic::Undefined, vec![json!(20).into()])
                    })
                }),
            )
            .into();

        let add_one = Function::unary(|value| {
            json!(value.as_data().and_then(serde_json::Value::as_i64).unwrap_or(0) + 1).into()
        });
        assert_eq!(fmap(add_one, &target), Ok(Dynamic::from(json!(21))));
    }

    #[test]
    fn fmap_uses_resolved_method() {
        let identity = Function::unary(|value| value);
        assert_eq!(fmap(identity, &tagged("hit")), Ok(Dynamic::from(json!("hit"))));
    }

    #[test]
    fn of_prefers_capability_over_constructor() {
        let representative: Dynamic = Object::new()
            .with("of", Function::new(|_, _| json!("from of").into()))
            .into();
        assert_eq!(
            of(&representative, Dynamic::Null),
            Ok(Dynamic::from(json!("from of")))
        );
    }

    #[test]
    fn of_falls_back_to_constructor() {
        let constructor: Dynamic =
            Function::named("Wrap", |_, arguments| json!({ "wrapped": arguments.len() }).into()).into();
        assert_eq!(
            of(&constructor, json!(1).into()),
            Ok(Dynamic::from(json!({ "wrapped": 1 })))
        );
    }

    #[test]
    fn of_on_plain_data_is_unimplemented() {
        assert_eq!(
            of(&json!(1).into(), json!(2).into()),
            Err(CapabilityError::UnimplementedCapability { capability: Capability::Of })
        );
    }

    #[test]
    fn of_on_null_is_invalid_target() {
        assert_eq!(
            of(&Dynamic::Null, json!(2).into()),
            Err(CapabilityError::InvalidTarget { capability: Capability::Of })
        );
    }
}
