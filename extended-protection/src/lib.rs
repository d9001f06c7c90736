//! Extended Protection — channel-binding and service-name policy.
//!
//! Extended protection defends integrated authentication against
//! credential relay by tying the authentication exchange to the
//! transport channel (channel binding) or, behind a TLS-terminating
//! proxy, to an allow-list of service principal names. This crate
//! provides the immutable policy value a negotiation layer consumes;
//! the negotiation itself lives elsewhere.
//!
//! # Module Map
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`constants`] | Rendering tokens, parameter identifiers |
//! | [`errors`] | `PolicyError`, `PolicyParam` |
//! | [`channel_binding`] | `ChannelBinding` trait, `ChannelBindingToken` |
//! | [`service_names`] | `ServiceNameCollection`, SPN normalization |
//! | [`protection_policy`] | `ExtendedProtectionPolicy` and its construction types |
//! | [`platform`] | OS capability query |
//! | [`settings`] | Serde configuration surface (feature `serde`) |
//!
//! # Example
//!
//! ```
//! use extended_protection::protection_policy::{
//!     ExtendedProtectionPolicy, PolicyEnforcement, ProtectionScenario,
//! };
//!
//! let policy = ExtendedProtectionPolicy::with_raw_service_names(
//!     PolicyEnforcement::Always,
//!     ProtectionScenario::TransportSelected,
//!     Some(["Test1", "Test2"]),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     policy.to_string(),
//!     "ProtectionScenario=TransportSelected; PolicyEnforcement=Always; \
//!      CustomChannelBinding=<null>; ServiceNames=Test1, Test2"
//! );
//! ```

/// Rendering tokens and parameter identifiers.
pub mod constants;

/// Error types for policy construction.
pub mod errors;

/// Channel binding capability.
pub mod channel_binding;

/// Custom service-name collection.
pub mod service_names;

/// The extended protection policy value.
pub mod protection_policy;

/// Platform capability query.
pub mod platform;

/// Serializable policy settings.
/// Requires the `serde` feature: `cargo test --features serde`.
#[cfg(feature = "serde")]
pub mod settings;

pub use channel_binding::{ChannelBinding, ChannelBindingKind, ChannelBindingToken};
pub use errors::{PolicyError, PolicyParam};
pub use protection_policy::{ExtendedProtectionPolicy, PolicyEnforcement, ProtectionScenario};
pub use service_names::ServiceNameCollection;
