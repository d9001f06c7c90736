//! Service names — ordered, normalized, duplicate-filtering SPN list.
//!
//! Service principal names take one of the forms
//!
//! ```text
//! prefix/host
//! prefix/host:port
//! prefix/host/distinguisher
//! prefix/host:port/distinguisher
//! ```
//!
//! Entries are normalized on insertion (IDN hosts are converted to
//! their ASCII form) and compared ASCII case-insensitively, so
//! `HTTP/Bücher.example` and `http/xn--bcher-kva.example` are the same
//! name. Insertion order is preserved; it is what the rendered policy
//! prints.

use std::fmt;

use crate::constants::SERVICE_NAME_SEPARATOR;
use crate::errors::{PolicyError, PolicyParam, REASON_BLANK_SERVICE_NAME};

/// Ordered collection of custom service names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct ServiceNameCollection {
    names: Vec<String>,
}

impl ServiceNameCollection {
    /// Build a collection from an ordered sequence of names.
    ///
    /// Each name is normalized and appended unless an equal name is
    /// already present. An empty sequence yields an empty collection;
    /// whether that is acceptable is up to the consumer.
    ///
    /// # Errors
    ///
    /// [`PolicyError::InvalidArgument`] naming `serviceName` if any
    /// entry is empty or whitespace-only.
    pub fn new<I, S>(items: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collection = Self::default();
        collection.extend_checked(items)?;
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Whether `name` (after normalization) is present, ignoring ASCII case.
    pub fn contains(&self, name: &str) -> bool {
        let probe = normalize_service_name(name);
        self.contains_normalized(&probe)
    }

    /// New collection with `name` appended if not already present.
    /// `self` is left untouched.
    pub fn merge(&self, name: impl Into<String>) -> Result<Self, PolicyError> {
        self.merge_all(std::iter::once(name))
    }

    /// New collection with every name in `names` appended if not
    /// already present. `self` is left untouched.
    pub fn merge_all<I, S>(&self, names: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut merged = self.clone();
        merged.extend_checked(names)?;
        Ok(merged)
    }

    fn contains_normalized(&self, normalized: &str) -> bool {
        self.names
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(normalized))
    }

    fn extend_checked<I, S>(&mut self, items: I) -> Result<(), PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            let name: String = item.into();
            if name.trim().is_empty() {
                return Err(PolicyError::invalid(
                    PolicyParam::ServiceName,
                    REASON_BLANK_SERVICE_NAME,
                ));
            }
            let normalized = normalize_service_name(&name);
            if !self.contains_normalized(&normalized) {
                self.names.push(normalized);
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ServiceNameCollection {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl fmt::Display for ServiceNameCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(SERVICE_NAME_SEPARATOR)?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for ServiceNameCollection {
    type Error = PolicyError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<ServiceNameCollection> for Vec<String> {
    fn from(collection: ServiceNameCollection) -> Self {
        collection.names
    }
}

// ── Normalization ───────────────────────────────────────────────────

enum HostKind {
    Dns(String),
    Ip,
    Unknown,
}

fn classify_host(host: &str) -> HostKind {
    if host.is_empty() {
        return HostKind::Unknown;
    }
    match url::Host::parse(host) {
        Ok(url::Host::Domain(ascii)) if is_dns_name(&ascii) => HostKind::Dns(ascii),
        Ok(url::Host::Ipv4(_)) | Ok(url::Host::Ipv6(_)) => HostKind::Ip,
        _ => HostKind::Unknown,
    }
}

fn is_dns_name(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() || host.len() > 253 {
        return false;
    }
    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    })
}

/// Normalize the host part of a service principal name.
///
/// DNS hosts are converted to lowercase ASCII (IDN labels become
/// punycode). If the result differs from `input` only by ASCII case,
/// `input` is returned as given. Anything that does not parse as
/// `prefix/host[:port][/distinguisher]` with a DNS host (including IP
/// literal hosts and non-numeric ports) is returned unchanged.
pub fn normalize_service_name(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }
    let Some(slash) = input.find('/') else {
        return input.to_string();
    };
    let prefix = &input[..=slash];
    let rest = &input[slash + 1..];
    if rest.trim().is_empty() {
        return input.to_string();
    }

    let mut host = rest;
    let mut port = "";
    let mut distinguisher = "";
    let mut kind = classify_host(rest);

    if matches!(kind, HostKind::Unknown) {
        let host_and_port = match rest.find('/') {
            Some(next) => {
                distinguisher = &rest[next..];
                &rest[..next]
            }
            None => rest,
        };
        host = host_and_port;
        if let Some(colon) = host_and_port.rfind(':') {
            if host_and_port[colon + 1..].parse::<u16>().is_err() {
                return input.to_string();
            }
            host = &host_and_port[..colon];
            port = &host_and_port[colon..];
        }
        kind = classify_host(host);
    }

    let HostKind::Dns(ascii_host) = kind else {
        return input.to_string();
    };

    let normalized = format!("{prefix}{ascii_host}{port}{distinguisher}");
    if normalized.eq_ignore_ascii_case(input) {
        input.to_string()
    } else {
        normalized
    }
}
