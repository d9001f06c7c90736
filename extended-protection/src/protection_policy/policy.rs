//! Extended protection policy — validated, immutable settings value.
//!
//! All construction forms funnel into [`ExtendedProtectionPolicy::from_config`].
//! Once built, a policy is never mutated; accessors and rendering are
//! total.

use std::fmt;

use super::types::{Argument, PolicyConfig, PolicyEnforcement, ProtectionScenario, ServiceNameSource};
use crate::channel_binding::{same_binding, ChannelBinding};
use crate::constants::{
    KEY_CUSTOM_CHANNEL_BINDING, KEY_POLICY_ENFORCEMENT, KEY_PROTECTION_SCENARIO,
    KEY_SERVICE_NAMES, NULL_TOKEN, SEGMENT_SEPARATOR,
};
use crate::errors::{
    PolicyError, PolicyParam, REASON_EMPTY_SERVICE_NAMES, REASON_NEVER_NEEDS_ENFORCEMENT_ONLY,
};
use crate::platform;
use crate::service_names::ServiceNameCollection;

/// Channel-binding and service-name enforcement settings.
///
/// The channel binding is borrowed from its owner (normally the TLS
/// stream), so a policy that carries one cannot outlive it.
#[derive(Debug, Clone)]
pub struct ExtendedProtectionPolicy<'a> {
    enforcement: PolicyEnforcement,
    scenario: ProtectionScenario,
    channel_binding: Option<&'a dyn ChannelBinding>,
    service_names: Option<ServiceNameCollection>,
}

impl<'a> ExtendedProtectionPolicy<'a> {
    /// Enforcement-only form.
    ///
    /// Scenario defaults to [`ProtectionScenario::TransportSelected`];
    /// no binding and no service names. This is the only form that
    /// accepts [`PolicyEnforcement::Never`].
    pub fn new(enforcement: PolicyEnforcement) -> Self {
        Self::assemble(enforcement, ProtectionScenario::default(), None, None)
    }

    /// Enforcement plus a custom channel binding.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument(policyEnforcement)` if `enforcement` is `Never`.
    /// - `NullArgument(customChannelBinding)` if `binding` is `None`.
    pub fn with_channel_binding(
        enforcement: PolicyEnforcement,
        binding: Option<&'a dyn ChannelBinding>,
    ) -> Result<Self, PolicyError> {
        Self::from_config(PolicyConfig {
            enforcement,
            scenario: None,
            channel_binding: Argument::Required(binding),
            service_names: Argument::Omitted,
        })
    }

    /// Enforcement, scenario, and an optional prebuilt service-name
    /// collection.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument(policyEnforcement)` if `enforcement` is `Never`.
    /// - `InvalidArgument(customServiceNames)` if `names` is present but empty.
    pub fn with_service_names(
        enforcement: PolicyEnforcement,
        scenario: ProtectionScenario,
        names: Option<ServiceNameCollection>,
    ) -> Result<Self, PolicyError> {
        Self::from_config(PolicyConfig {
            enforcement,
            scenario: Some(scenario),
            channel_binding: Argument::Omitted,
            service_names: Argument::Nullable(names.map(ServiceNameSource::Collection)),
        })
    }

    /// Enforcement, scenario, and an optional raw list of service names.
    /// The list is wrapped into a [`ServiceNameCollection`] in order.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument(policyEnforcement)` if `enforcement` is `Never`.
    /// - `InvalidArgument(customServiceNames)` if `names` is present but empty.
    /// - `InvalidArgument(serviceName)` if any name is blank.
    pub fn with_raw_service_names<I, S>(
        enforcement: PolicyEnforcement,
        scenario: ProtectionScenario,
        names: Option<I>,
    ) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw = names.map(|items| {
            ServiceNameSource::Raw(items.into_iter().map(Into::into).collect())
        });
        Self::from_config(PolicyConfig {
            enforcement,
            scenario: Some(scenario),
            channel_binding: Argument::Omitted,
            service_names: Argument::Nullable(raw),
        })
    }

    /// Validate `config` and build the policy.
    ///
    /// Checks run in order: enforcement, channel binding presence,
    /// service-name emptiness. Nothing is built unless every check passes.
    pub fn from_config(config: PolicyConfig<'a>) -> Result<Self, PolicyError> {
        if config.enforcement == PolicyEnforcement::Never && !config.is_enforcement_only() {
            return Err(rejected(PolicyError::invalid(
                PolicyParam::PolicyEnforcement,
                REASON_NEVER_NEEDS_ENFORCEMENT_ONLY,
            )));
        }

        let channel_binding = match config.channel_binding {
            Argument::Omitted => None,
            Argument::Nullable(binding) => binding,
            Argument::Required(Some(binding)) => Some(binding),
            Argument::Required(None) => {
                return Err(rejected(PolicyError::null(
                    PolicyParam::CustomChannelBinding,
                )))
            }
        };

        let service_names = match config.service_names {
            Argument::Omitted | Argument::Nullable(None) => None,
            Argument::Required(None) => {
                return Err(rejected(PolicyError::null(PolicyParam::CustomServiceNames)))
            }
            Argument::Required(Some(source)) | Argument::Nullable(Some(source)) => {
                if source.is_empty() {
                    return Err(rejected(PolicyError::invalid(
                        PolicyParam::CustomServiceNames,
                        REASON_EMPTY_SERVICE_NAMES,
                    )));
                }
                let collection = match source {
                    ServiceNameSource::Collection(collection) => collection,
                    ServiceNameSource::Raw(raw) => {
                        ServiceNameCollection::new(raw).map_err(rejected)?
                    }
                };
                Some(collection)
            }
        };

        let policy = Self::assemble(
            config.enforcement,
            config.scenario.unwrap_or_default(),
            channel_binding,
            service_names,
        );
        tracing::trace!(
            enforcement = policy.enforcement.as_str(),
            scenario = policy.scenario.as_str(),
            has_channel_binding = policy.channel_binding.is_some(),
            service_names = policy.service_names.as_ref().map_or(0, ServiceNameCollection::len),
            "extended protection policy built"
        );
        Ok(policy)
    }

    fn assemble(
        enforcement: PolicyEnforcement,
        scenario: ProtectionScenario,
        channel_binding: Option<&'a dyn ChannelBinding>,
        service_names: Option<ServiceNameCollection>,
    ) -> Self {
        Self {
            enforcement,
            scenario,
            channel_binding,
            service_names,
        }
    }

    pub fn enforcement(&self) -> PolicyEnforcement {
        self.enforcement
    }

    pub fn scenario(&self) -> ProtectionScenario {
        self.scenario
    }

    pub fn channel_binding(&self) -> Option<&'a dyn ChannelBinding> {
        self.channel_binding
    }

    pub fn service_names(&self) -> Option<&ServiceNameCollection> {
        self.service_names.as_ref()
    }

    /// Whether the host platform supports extended protection at all.
    /// Queried on every call.
    pub fn os_supports_extended_protection() -> bool {
        platform::os_supports_extended_protection()
    }
}

fn rejected(err: PolicyError) -> PolicyError {
    tracing::debug!(
        param = err.param().as_str(),
        null_argument = err.is_null_argument(),
        "extended protection policy rejected: {err}"
    );
    err
}

/// Bindings compare by identity, everything else by value.
impl PartialEq for ExtendedProtectionPolicy<'_> {
    fn eq(&self, other: &Self) -> bool {
        let bindings_match = match (self.channel_binding, other.channel_binding) {
            (None, None) => true,
            (Some(a), Some(b)) => same_binding(a, b),
            _ => false,
        };
        self.enforcement == other.enforcement
            && self.scenario == other.scenario
            && bindings_match
            && self.service_names == other.service_names
    }
}

impl Eq for ExtendedProtectionPolicy<'_> {}

impl fmt::Display for ExtendedProtectionPolicy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KEY_PROTECTION_SCENARIO}={}", self.scenario)?;
        write!(f, "{SEGMENT_SEPARATOR}{KEY_POLICY_ENFORCEMENT}={}", self.enforcement)?;

        write!(f, "{SEGMENT_SEPARATOR}{KEY_CUSTOM_CHANNEL_BINDING}=")?;
        match self.channel_binding {
            Some(binding) => write!(f, "{binding}")?,
            None => f.write_str(NULL_TOKEN)?,
        }

        write!(f, "{SEGMENT_SEPARATOR}{KEY_SERVICE_NAMES}=")?;
        match &self.service_names {
            Some(names) => write!(f, "{names}"),
            None => f.write_str(NULL_TOKEN),
        }
    }
}
