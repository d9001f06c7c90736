//! Policy types — enforcement modes, scenarios, and construction input.
//!
//! [`PolicyConfig`] is the single input to
//! [`ExtendedProtectionPolicy::from_config`](super::ExtendedProtectionPolicy::from_config).
//! Each optional argument carries an [`Argument`] marker so "absent is
//! fine" and "absent is an error" stay distinct per construction path.

use std::fmt;

use crate::channel_binding::ChannelBinding;
use crate::service_names::ServiceNameCollection;

/// How strictly extended protection is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyEnforcement {
    /// Extended protection is not used.
    Never,
    /// Enforced only when the platform and peer support it.
    WhenSupported,
    /// Always enforced; peers without support are rejected.
    Always,
}

impl PolicyEnforcement {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyEnforcement::Never => "Never",
            PolicyEnforcement::WhenSupported => "WhenSupported",
            PolicyEnforcement::Always => "Always",
        }
    }
}

impl fmt::Display for PolicyEnforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the channel binding was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtectionScenario {
    /// Binding taken directly from the transport in use.
    #[default]
    TransportSelected,
    /// TLS terminated by a trusted proxy; service names are checked
    /// instead of the binding.
    TrustedProxy,
}

impl ProtectionScenario {
    pub fn as_str(self) -> &'static str {
        match self {
            ProtectionScenario::TransportSelected => "TransportSelected",
            ProtectionScenario::TrustedProxy => "TrustedProxy",
        }
    }
}

impl fmt::Display for ProtectionScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence of an optional construction argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Argument<T> {
    /// Not part of this construction form.
    #[default]
    Omitted,
    /// Part of the form; `None` is rejected with `NullArgument`.
    Required(Option<T>),
    /// Part of the form; `None` means absent.
    Nullable(Option<T>),
}

impl<T> Argument<T> {
    /// Whether the argument belongs to the construction form at all.
    pub fn is_supplied(&self) -> bool {
        !matches!(self, Argument::Omitted)
    }
}

/// Source of custom service names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceNameSource {
    /// An already-built collection.
    Collection(ServiceNameCollection),
    /// Raw names, wrapped into a collection during construction.
    Raw(Vec<String>),
}

impl ServiceNameSource {
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            ServiceNameSource::Collection(c) => c.is_empty(),
            ServiceNameSource::Raw(v) => v.is_empty(),
        }
    }
}

/// Input to [`ExtendedProtectionPolicy::from_config`](super::ExtendedProtectionPolicy::from_config).
#[derive(Debug)]
pub struct PolicyConfig<'a> {
    pub enforcement: PolicyEnforcement,
    /// `None` when the form takes no scenario; defaults to
    /// [`ProtectionScenario::TransportSelected`].
    pub scenario: Option<ProtectionScenario>,
    pub channel_binding: Argument<&'a dyn ChannelBinding>,
    pub service_names: Argument<ServiceNameSource>,
}

impl<'a> PolicyConfig<'a> {
    /// Enforcement-only form. The only form that accepts `Never`.
    pub fn enforcement_only(enforcement: PolicyEnforcement) -> Self {
        Self {
            enforcement,
            scenario: None,
            channel_binding: Argument::Omitted,
            service_names: Argument::Omitted,
        }
    }

    /// True when no scenario, binding, or service-name argument is part
    /// of this form.
    pub fn is_enforcement_only(&self) -> bool {
        self.scenario.is_none()
            && !self.channel_binding.is_supplied()
            && !self.service_names.is_supplied()
    }
}
