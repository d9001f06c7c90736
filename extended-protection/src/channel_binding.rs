//! Channel binding — opaque transport-derived capability.
//!
//! The TLS layer produces channel-binding data (RFC 5929) and owns it.
//! A policy only borrows a binding so it can be printed and handed to
//! the authentication layer; it never allocates or releases one.
//! Releasing requires `&mut self`, which the borrow held by a policy
//! rules out.

use std::fmt;

use zeroize::Zeroizing;

/// Which RFC 5929 binding type the data represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelBindingKind {
    #[default]
    Unknown,
    /// `tls-unique`
    Unique,
    /// `tls-server-end-point`
    Endpoint,
}

impl ChannelBindingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChannelBindingKind::Unknown => "Unknown",
            ChannelBindingKind::Unique => "Unique",
            ChannelBindingKind::Endpoint => "Endpoint",
        }
    }
}

impl fmt::Display for ChannelBindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Externally owned channel-binding capability.
///
/// `Display` output is used verbatim in the rendered policy, so
/// implementations MUST NOT print binding bytes.
pub trait ChannelBinding: fmt::Display + Send + Sync {
    /// Size of the binding data in bytes.
    fn size(&self) -> usize;

    /// Binding type. Defaults to [`ChannelBindingKind::Unknown`].
    fn kind(&self) -> ChannelBindingKind {
        ChannelBindingKind::Unknown
    }

    /// Release the underlying data. Returns `true` if something was
    /// released by this call.
    fn release(&mut self) -> bool;
}

impl fmt::Debug for dyn ChannelBinding + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelBinding")
            .field("kind", &self.kind())
            .field("size", &self.size())
            .finish()
    }
}

/// Identity comparison: two bindings are the same only if they are the
/// same object. Binding contents are never compared.
pub fn same_binding(a: &dyn ChannelBinding, b: &dyn ChannelBinding) -> bool {
    std::ptr::addr_eq(a as *const dyn ChannelBinding, b as *const dyn ChannelBinding)
}

/// Binding bytes are wiped when dropped, including on release.
type BindingBytes = Zeroizing<Vec<u8>>;

/// Owned binding bytes, e.g. copied out of a TLS session.
pub struct ChannelBindingToken {
    kind: ChannelBindingKind,
    data: Option<BindingBytes>,
}

impl ChannelBindingToken {
    pub fn new(kind: ChannelBindingKind, data: Vec<u8>) -> Self {
        Self {
            kind,
            data: Some(Zeroizing::new(data)),
        }
    }

    /// `true` once [`ChannelBinding::release`] has run.
    pub fn is_released(&self) -> bool {
        self.data.is_none()
    }

    /// Borrow the binding bytes, if not yet released.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.data.as_ref().map(|bytes| bytes.as_slice())
    }
}

impl ChannelBinding for ChannelBindingToken {
    fn size(&self) -> usize {
        self.data.as_ref().map_or(0, |bytes| bytes.len())
    }

    fn kind(&self) -> ChannelBindingKind {
        self.kind
    }

    fn release(&mut self) -> bool {
        // Dropping the taken buffer zeroizes it.
        self.data.take().is_some()
    }
}

impl fmt::Display for ChannelBindingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChannelBindingToken(kind={}, size={})",
            self.kind,
            self.size()
        )
    }
}

impl fmt::Debug for ChannelBindingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelBindingToken")
            .field("kind", &self.kind)
            .field("size", &self.size())
            .field("released", &self.is_released())
            .finish()
    }
}
