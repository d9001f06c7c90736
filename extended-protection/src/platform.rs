//! Platform capability query.
//!
//! Extended protection needs channel-binding support from the native
//! security provider. Every desktop/server target this crate builds for
//! has it; bare WASM and other targets without a security provider do
//! not.

/// Whether the host platform supports extended protection.
///
/// Side-effect free and not cached; the answer is fixed at compile
/// time, so it is stable for the life of the process.
pub fn os_supports_extended_protection() -> bool {
    cfg!(any(unix, windows))
}
