//! Error type for capability dispatch on dynamic values.

use super::capability::Capability;

/// Failure to dispatch a capability on a dynamic value.
///
/// Both kinds are terminal: dispatch is never retried and the error is never
/// replaced by a default value.
///
/// # Examples
///
/// ```rust
/// use fnkit::dynamic::{Capability, CapabilityError};
///
/// let error = CapabilityError::InvalidTarget { capability: Capability::Map };
/// assert_eq!(format!("{error}"), "map: invalid target, expected a value but found null or undefined");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityError {
    /// The target was `Undefined` or `Null`.
    InvalidTarget {
        /// The capability that was requested.
        capability: Capability,
    },
    /// No conventional, namespaced or symbolic key held a function.
    UnimplementedCapability {
        /// The capability that was requested.
        capability: Capability,
    },
}

impl CapabilityError {
    /// The capability that was requested.
    pub const fn capability(&self) -> Capability {
        match self {
            Self::InvalidTarget { capability } | Self::UnimplementedCapability { capability } => {
                *capability
            }
        }
    }

    /// Returns `true` for [`CapabilityError::InvalidTarget`].
    pub const fn is_invalid_target(&self) -> bool {
        matches!(self, Self::InvalidTarget { .. })
    }

    /// Returns `true` for [`CapabilityError::UnimplementedCapability`].
    pub const fn is_unimplemented_capability(&self) -> bool {
        matches!(self, Self::UnimplementedCapability { .. })
    }
}

impl std::fmt::Display for CapabilityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTarget { capability } => write!(
                formatter,
                "{capability}: invalid target, expected a value but found null or undefined"
            ),
            Self::UnimplementedCapability { capability } => write!(
                formatter,
                "{capability}: target does not implement {capability}"
            ),
        }
    }
}

impl std::error::Error for CapabilityError {}

static_assertions::assert_impl_all!(CapabilityError: std::error::Error, Send, Sync, Copy);
