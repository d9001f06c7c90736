//! Conformance: Rendered Policy Format
//!
//! Format:
//! `ProtectionScenario=<s>; PolicyEnforcement=<e>; CustomChannelBinding=<b>; ServiceNames=<n>`
//!
//! `<null>` stands in for an absent binding or name list. Names are
//! joined with ", " in insertion order.

use std::fmt;

use extended_protection::protection_policy::{
    ExtendedProtectionPolicy, PolicyEnforcement, ProtectionScenario,
};
use extended_protection::{ChannelBinding, ChannelBindingKind, ChannelBindingToken, ServiceNameCollection};

struct NamedBinding(&'static str);

impl fmt::Display for NamedBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl ChannelBinding for NamedBinding {
    fn size(&self) -> usize {
        0
    }

    fn release(&mut self) -> bool {
        false
    }
}

/// Collection with two names, no binding.
#[test]
fn conformance_render_with_service_names() {
    let names = ServiceNameCollection::new(["Test1", "Test2"]).unwrap();
    let policy = ExtendedProtectionPolicy::with_service_names(
        PolicyEnforcement::Always,
        ProtectionScenario::TransportSelected,
        Some(names),
    )
    .unwrap();

    assert_eq!(
        policy.to_string(),
        "ProtectionScenario=TransportSelected; PolicyEnforcement=Always; CustomChannelBinding=<null>; ServiceNames=Test1, Test2"
    );
}

/// Raw list renders identically to the equivalent collection.
#[test]
fn conformance_render_raw_list_matches_collection() {
    let from_raw = ExtendedProtectionPolicy::with_raw_service_names(
        PolicyEnforcement::Always,
        ProtectionScenario::TransportSelected,
        Some(["Test1", "Test2"]),
    )
    .unwrap();
    let from_collection = ExtendedProtectionPolicy::with_service_names(
        PolicyEnforcement::Always,
        ProtectionScenario::TransportSelected,
        Some(ServiceNameCollection::new(["Test1", "Test2"]).unwrap()),
    )
    .unwrap();
    assert_eq!(from_raw.to_string(), from_collection.to_string());
}

/// Neither binding nor names.
#[test]
fn conformance_render_enforcement_only() {
    let policy = ExtendedProtectionPolicy::new(PolicyEnforcement::Always);
    assert_eq!(
        policy.to_string(),
        format!(
            "ProtectionScenario={}; PolicyEnforcement=Always; CustomChannelBinding=<null>; ServiceNames=<null>",
            policy.scenario()
        )
    );
    assert_eq!(
        policy.to_string(),
        "ProtectionScenario=TransportSelected; PolicyEnforcement=Always; CustomChannelBinding=<null>; ServiceNames=<null>"
    );
}

/// Binding segment is the binding's own display output, verbatim.
#[test]
fn conformance_render_binding_verbatim() {
    let binding = NamedBinding("tests::MockCustomChannelBinding");
    let policy =
        ExtendedProtectionPolicy::with_channel_binding(PolicyEnforcement::Always, Some(&binding))
            .unwrap();

    let expected = format!(
        "ProtectionScenario={}; PolicyEnforcement=Always; CustomChannelBinding={}; ServiceNames=<null>",
        policy.scenario(),
        binding
    );
    assert_eq!(policy.to_string(), expected);
}

/// Token bindings render kind and size only.
#[test]
fn conformance_render_token_binding() {
    let token = ChannelBindingToken::new(ChannelBindingKind::Endpoint, vec![0xEE; 48]);
    let policy =
        ExtendedProtectionPolicy::with_channel_binding(PolicyEnforcement::WhenSupported, Some(&token))
            .unwrap();
    assert_eq!(
        policy.to_string(),
        "ProtectionScenario=TransportSelected; PolicyEnforcement=WhenSupported; CustomChannelBinding=ChannelBindingToken(kind=Endpoint, size=48); ServiceNames=<null>"
    );
}

/// No trailing separator after a single name.
#[test]
fn conformance_render_single_name_no_trailing_separator() {
    let policy = ExtendedProtectionPolicy::with_raw_service_names(
        PolicyEnforcement::Always,
        ProtectionScenario::TrustedProxy,
        Some(["HTTP/www.example.com"]),
    )
    .unwrap();
    let rendered = policy.to_string();
    assert!(rendered.ends_with("ServiceNames=HTTP/www.example.com"));
    assert!(!rendered.ends_with(", "));
}

/// Rendering is pure: repeated calls produce identical output.
#[test]
fn conformance_render_is_deterministic() {
    let policy = ExtendedProtectionPolicy::with_raw_service_names(
        PolicyEnforcement::Always,
        ProtectionScenario::TrustedProxy,
        Some(["a", "b", "c"]),
    )
    .unwrap();
    assert_eq!(policy.to_string(), policy.to_string());
    assert!(policy.to_string().ends_with("ServiceNames=a, b, c"));
}
