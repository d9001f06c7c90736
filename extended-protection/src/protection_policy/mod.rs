//! Extended protection policy — what a negotiation layer should enforce.
//!
//! A policy combines an enforcement mode, a protection scenario, an
//! optional borrowed channel binding, and optional custom service
//! names. It carries configuration only: no IO, no clocks, no global
//! state, and no security property beyond construction-time validation.

pub mod policy;
pub mod types;

// Re-export the policy value and its construction types.
pub use policy::ExtendedProtectionPolicy;
pub use types::{Argument, PolicyConfig, PolicyEnforcement, ProtectionScenario, ServiceNameSource};
