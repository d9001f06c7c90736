//! Conformance harness — diagnostic format and error surface.
//!
//! Pins the parts of this crate that other components parse or match
//! on:
//! - Rendered policy string (log scrapers, support tooling)
//! - Error kinds and parameter identifiers (caller diagnostics)

mod display_format;
mod error_param_mapping;
