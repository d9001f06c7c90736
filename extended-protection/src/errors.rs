//! Error types for policy construction.
//!
//! Only two kinds exist and both are raised synchronously while a
//! policy (or service-name collection) is being built. Accessors and
//! rendering never fail.
//!
//! The offending parameter is carried as structured data
//! ([`PolicyParam`]) so callers can match on it without parsing the
//! human-readable message.

use crate::constants::{
    PARAM_CUSTOM_CHANNEL_BINDING, PARAM_CUSTOM_SERVICE_NAMES, PARAM_POLICY_ENFORCEMENT,
    PARAM_SERVICE_NAME,
};

/// Construction parameter named by a [`PolicyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyParam {
    /// The enforcement mode argument.
    PolicyEnforcement,
    /// The custom service-name list or collection.
    CustomServiceNames,
    /// The custom channel binding.
    CustomChannelBinding,
    /// A single entry inside a service-name collection.
    ServiceName,
}

impl PolicyParam {
    /// Stable parameter identifier, e.g. `"policyEnforcement"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyParam::PolicyEnforcement => PARAM_POLICY_ENFORCEMENT,
            PolicyParam::CustomServiceNames => PARAM_CUSTOM_SERVICE_NAMES,
            PolicyParam::CustomChannelBinding => PARAM_CUSTOM_CHANNEL_BINDING,
            PolicyParam::ServiceName => PARAM_SERVICE_NAME,
        }
    }
}

impl std::fmt::Display for PolicyParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for policy construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// An argument was present but not acceptable.
    #[error("Invalid argument '{param}': {reason}")]
    InvalidArgument {
        param: PolicyParam,
        reason: &'static str,
    },

    /// A required argument was absent.
    #[error("Argument '{param}' must not be null")]
    NullArgument { param: PolicyParam },
}

impl PolicyError {
    pub(crate) fn invalid(param: PolicyParam, reason: &'static str) -> Self {
        PolicyError::InvalidArgument { param, reason }
    }

    pub(crate) fn null(param: PolicyParam) -> Self {
        PolicyError::NullArgument { param }
    }

    /// The parameter this error is about.
    pub fn param(&self) -> PolicyParam {
        match self {
            PolicyError::InvalidArgument { param, .. } | PolicyError::NullArgument { param } => {
                *param
            }
        }
    }

    /// `true` for [`PolicyError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PolicyError::InvalidArgument { .. })
    }

    /// `true` for [`PolicyError::NullArgument`].
    pub fn is_null_argument(&self) -> bool {
        matches!(self, PolicyError::NullArgument { .. })
    }
}

// ── Reasons ─────────────────────────────────────────────────────────

/// `Never` was supplied to a form that also takes scenario/binding/names.
pub const REASON_NEVER_NEEDS_ENFORCEMENT_ONLY: &str =
    "use the enforcement-only constructor when enforcement is Never";

/// A service-name list was supplied but held no entries.
pub const REASON_EMPTY_SERVICE_NAMES: &str = "service name list must not be empty";

/// A single service name was empty or whitespace.
pub const REASON_BLANK_SERVICE_NAME: &str = "service name must not be empty or whitespace";
