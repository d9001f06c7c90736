//! Conformance: Error Kind and Parameter Mapping
//!
//! | Condition | Kind | Parameter |
//! |-----------|------|-----------|
//! | `Never` with scenario/binding/names | InvalidArgument | `policyEnforcement` |
//! | Empty service-name list | InvalidArgument | `customServiceNames` |
//! | Missing required binding | NullArgument | `customChannelBinding` |
//! | Blank service name | InvalidArgument | `serviceName` |

use extended_protection::protection_policy::{
    ExtendedProtectionPolicy, PolicyEnforcement, ProtectionScenario,
};
use extended_protection::{PolicyError, PolicyParam};

#[test]
fn conformance_never_maps_to_policy_enforcement() {
    let err = ExtendedProtectionPolicy::with_service_names(
        PolicyEnforcement::Never,
        ProtectionScenario::TransportSelected,
        None,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        PolicyError::InvalidArgument {
            param: PolicyParam::PolicyEnforcement,
            ..
        }
    ));
}

#[test]
fn conformance_empty_list_maps_to_custom_service_names() {
    let err = ExtendedProtectionPolicy::with_raw_service_names(
        PolicyEnforcement::Always,
        ProtectionScenario::TransportSelected,
        Some(Vec::<&str>::new()),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        PolicyError::InvalidArgument {
            param: PolicyParam::CustomServiceNames,
            ..
        }
    ));
}

#[test]
fn conformance_null_binding_maps_to_custom_channel_binding() {
    let err = ExtendedProtectionPolicy::with_channel_binding(PolicyEnforcement::Always, None)
        .unwrap_err();
    assert_eq!(
        err,
        PolicyError::NullArgument {
            param: PolicyParam::CustomChannelBinding
        }
    );
}

#[test]
fn conformance_blank_name_maps_to_service_name() {
    let err = ExtendedProtectionPolicy::with_raw_service_names(
        PolicyEnforcement::Always,
        ProtectionScenario::TransportSelected,
        Some(["\t"]),
    )
    .unwrap_err();
    assert_eq!(err.param(), PolicyParam::ServiceName);
}

/// Display text embeds the parameter but callers should match on `param()`.
#[test]
fn conformance_error_display_stable() {
    let cases: Vec<(PolicyError, &str)> = vec![
        (
            ExtendedProtectionPolicy::with_channel_binding(PolicyEnforcement::Always, None)
                .unwrap_err(),
            "Argument 'customChannelBinding' must not be null",
        ),
        (
            ExtendedProtectionPolicy::with_raw_service_names(
                PolicyEnforcement::Always,
                ProtectionScenario::TransportSelected,
                Some(Vec::<String>::new()),
            )
            .unwrap_err(),
            "Invalid argument 'customServiceNames': service name list must not be empty",
        ),
    ];

    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "PolicyError display drift detected");
    }
}

#[test]
fn conformance_policy_error_is_std_error() {
    let err = ExtendedProtectionPolicy::with_channel_binding(PolicyEnforcement::Always, None)
        .unwrap_err();
    let _: &dyn std::error::Error = &err;
}

#[test]
fn conformance_policy_error_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PolicyError>();
}
