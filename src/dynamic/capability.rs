//! Capability names and the key probing order.

use std::fmt;

use super::error::CapabilityError;
use super::value::{Dynamic, Function, PropertyKey, Symbol};

/// Prefix shared by the namespaced string and symbol keys.
pub const NAMESPACE: &str = "fantasy-land";

/// An abstract operation a foreign value may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Functor mapping.
    Map,
    /// Monadic chaining.
    Chain,
    /// Applicative application.
    Ap,
    /// Applicative lifting, looked up on a type representative.
    Of,
}

impl Capability {
    /// Canonical name, also the suffix of the namespaced keys.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Chain => "chain",
            Self::Ap => "ap",
            Self::Of => "of",
        }
    }

    /// Conventional method names, in probing order.
    pub const fn conventional_names(self) -> &'static [&'static str] {
        match self {
            Self::Map => &["map"],
            Self::Chain => &["chain", "flatMap"],
            Self::Ap => &["ap"],
            Self::Of => &["of"],
        }
    }

    /// The namespaced string key, e.g. `fantasy-land/map`.
    pub fn namespaced_key(self) -> String {
        format!("{NAMESPACE}/{}", self.name())
    }

    /// The registry symbol under the namespaced key.
    pub fn symbol(self) -> Symbol {
        Symbol::registered(self.namespaced_key())
    }

    /// Every key that may hold this capability, highest priority first:
    /// conventional names, then the namespaced string key, then the
    /// namespaced symbol.
    pub fn lookup_keys(self) -> impl Iterator<Item = PropertyKey> {
        self.conventional_names()
            .iter()
            .map(|&name| PropertyKey::from(name))
            .chain([
                PropertyKey::Name(self.namespaced_key()),
                PropertyKey::Symbol(self.symbol()),
            ])
    }

    /// Finds the method implementing this capability on `target`.
    ///
    /// A property holding anything other than a function is skipped.
    ///
    /// # Errors
    ///
    /// - [`CapabilityError::InvalidTarget`] if `target` is `Undefined` or `Null`.
    /// - [`CapabilityError::UnimplementedCapability`] if no key holds a function.
    pub fn resolve(self, target: &Dynamic) -> Result<(PropertyKey, Function), CapabilityError> {
        if target.is_nullish() {
            tracing::debug!(capability = %self, found = target.kind(), "invalid capability target");
            return Err(CapabilityError::InvalidTarget { capability: self });
        }

        let resolved = self.lookup_keys().find_map(|key| match target.get(&key) {
            Some(Dynamic::Function(method)) => Some((key, method.clone())),
            _ => None,
        });

        match resolved {
            Some((key, method)) => {
                tracing::trace!(capability = %self, %key, "resolved capability");
                Ok((key, method))
            }
            None => {
                tracing::debug!(capability = %self, found = target.kind(), "capability not implemented");
                Err(CapabilityError::UnimplementedCapability { capability: self })
            }
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
