//! Policy constants — rendering tokens and parameter identifiers.
//!
//! The rendering tokens are part of the diagnostic format consumed by
//! log scrapers on the negotiation side. Changing any of them is a
//! breaking change; `tests/conformance/display_format.rs` pins them.

/// Token rendered for an absent channel binding or service-name list.
pub const NULL_TOKEN: &str = "<null>";

/// Separator between service names in the rendered policy.
pub const SERVICE_NAME_SEPARATOR: &str = ", ";

/// Separator between `Key=Value` segments in the rendered policy.
pub const SEGMENT_SEPARATOR: &str = "; ";

/// Segment keys, in rendering order.
pub const KEY_PROTECTION_SCENARIO: &str = "ProtectionScenario";
pub const KEY_POLICY_ENFORCEMENT: &str = "PolicyEnforcement";
pub const KEY_CUSTOM_CHANNEL_BINDING: &str = "CustomChannelBinding";
pub const KEY_SERVICE_NAMES: &str = "ServiceNames";

/// Parameter identifiers carried by construction errors.
pub const PARAM_POLICY_ENFORCEMENT: &str = "policyEnforcement";
pub const PARAM_CUSTOM_SERVICE_NAMES: &str = "customServiceNames";
pub const PARAM_CUSTOM_CHANNEL_BINDING: &str = "customChannelBinding";
pub const PARAM_SERVICE_NAME: &str = "serviceName";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_tokens_are_stable() {
        assert_eq!(NULL_TOKEN, "<null>");
        assert_eq!(SERVICE_NAME_SEPARATOR, ", ");
        assert_eq!(SEGMENT_SEPARATOR, "; ");
        assert_eq!(KEY_PROTECTION_SCENARIO, "ProtectionScenario");
        assert_eq!(KEY_POLICY_ENFORCEMENT, "PolicyEnforcement");
        assert_eq!(KEY_CUSTOM_CHANNEL_BINDING, "CustomChannelBinding");
        assert_eq!(KEY_SERVICE_NAMES, "ServiceNames");
    }

    #[test]
    fn parameter_identifiers_are_stable() {
        assert_eq!(PARAM_POLICY_ENFORCEMENT, "policyEnforcement");
        assert_eq!(PARAM_CUSTOM_SERVICE_NAMES, "customServiceNames");
        assert_eq!(PARAM_CUSTOM_CHANNEL_BINDING, "customChannelBinding");
        assert_eq!(PARAM_SERVICE_NAME, "serviceName");
    }
}
