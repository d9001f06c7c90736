//! Policy settings — serde configuration surface.
//!
//! Hosts keep extended protection settings in their JSON configuration:
//!
//! ```json
//! {
//!   "policyEnforcement": "Always",
//!   "protectionScenario": "TrustedProxy",
//!   "customServiceNames": ["HTTP/www.example.com"]
//! }
//! ```
//!
//! Settings never carry a channel binding; bindings only exist for a
//! live connection. Building a policy from settings runs the same
//! validation as the constructors.

use serde::ser::SerializeStruct;

use crate::errors::PolicyError;
use crate::protection_policy::{ExtendedProtectionPolicy, PolicyEnforcement, ProtectionScenario};

/// Errors from loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Settings rejected: {0}")]
    Policy(#[from] PolicyError),
}

/// Serializable policy settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PolicySettings {
    pub policy_enforcement: PolicyEnforcement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_scenario: Option<ProtectionScenario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_service_names: Option<Vec<String>>,
}

impl PolicySettings {
    /// Parse settings from JSON. Does not validate policy rules.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a policy.
    ///
    /// With neither scenario nor names set, the enforcement-only form is
    /// used (so `Never` is accepted). Otherwise the raw-list form is
    /// used with the scenario defaulting to `TransportSelected`.
    pub fn into_policy(self) -> Result<ExtendedProtectionPolicy<'static>, PolicyError> {
        if self.protection_scenario.is_none() && self.custom_service_names.is_none() {
            return Ok(ExtendedProtectionPolicy::new(self.policy_enforcement));
        }
        ExtendedProtectionPolicy::with_raw_service_names(
            self.policy_enforcement,
            self.protection_scenario.unwrap_or_default(),
            self.custom_service_names,
        )
    }
}

/// Snapshot of a policy's settings. The channel binding is dropped.
impl From<&ExtendedProtectionPolicy<'_>> for PolicySettings {
    fn from(policy: &ExtendedProtectionPolicy<'_>) -> Self {
        let names = policy
            .service_names()
            .map(|names| names.iter().map(str::to_string).collect::<Vec<_>>());
        let scenario = match (&names, policy.scenario()) {
            (None, ProtectionScenario::TransportSelected) => None,
            (_, scenario) => Some(scenario),
        };
        Self {
            policy_enforcement: policy.enforcement(),
            protection_scenario: scenario,
            custom_service_names: names,
        }
    }
}

/// Parse JSON settings and build the policy in one step.
pub fn load_policy(json: &str) -> Result<ExtendedProtectionPolicy<'static>, SettingsError> {
    let settings = PolicySettings::from_json(json)?;
    let policy = settings.into_policy()?;
    tracing::debug!(%policy, "extended protection policy loaded from settings");
    Ok(policy)
}

/// Serializes every field; the binding as its display string.
impl serde::Serialize for ExtendedProtectionPolicy<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExtendedProtectionPolicy", 4)?;
        state.serialize_field("policyEnforcement", &self.enforcement())?;
        state.serialize_field("protectionScenario", &self.scenario())?;
        state.serialize_field(
            "customChannelBinding",
            &self.channel_binding().map(|binding| binding.to_string()),
        )?;
        state.serialize_field("customServiceNames", &self.service_names())?;
        state.end()
    }
}
