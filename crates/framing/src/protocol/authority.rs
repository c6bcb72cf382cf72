//! URI authority value types.
//!
//! [`UriAuthority`] models the `[userinfo@]host[:port]` component of a URI or a
//! `Host` header, and [`HttpHost`] pairs an authority with a scheme to describe
//! an explicit connection target.
//!
//! Both types are immutable once built. Host and user info are stored exactly as
//! supplied: percent-encoded octets are never decoded and the rendered form is
//! not case-folded, so the value can be written back to the wire unchanged.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::ensure;
use crate::protocol::MalformedTarget;

/// Sentinel accepted by the port-taking constructors meaning "no explicit port".
pub const NO_PORT: i32 = -1;

/// Returns the well-known port of `scheme`, if it has one.
///
/// Only `http` (80) and `https` (443) are known, compared case-insensitively.
pub fn default_port(scheme: &str) -> Option<u16> {
    if scheme.eq_ignore_ascii_case("http") {
        Some(80)
    } else if scheme.eq_ignore_ascii_case("https") {
        Some(443)
    } else {
        None
    }
}

/// The authority component of a URI: `[userinfo@]host[:port]`.
///
/// Equality and hashing compare the user info exactly, the host ignoring ASCII
/// case and the explicit port exactly. Without a scheme the type can't know which
/// port is the default one, so `host` and `host:80` are different authorities;
/// use [`UriAuthority::eq_in_scheme`] when the scheme is known.
#[derive(Debug, Clone)]
pub struct UriAuthority {
    user_info: Option<String>,
    host: String,
    port: Option<u16>,
}

impl UriAuthority {
    /// Creates an authority with neither user info nor port.
    pub fn new<H: Into<String>>(host: H) -> Result<Self, MalformedTarget> {
        Self::build(None, host.into(), None)
    }

    /// Creates an authority with an explicit port, [`NO_PORT`] meaning none.
    pub fn with_port<H: Into<String>>(host: H, port: i32) -> Result<Self, MalformedTarget> {
        Self::build(None, host.into(), check_port(port)?)
    }

    pub fn with_user_info<U: Into<String>, H: Into<String>>(user_info: U, host: H) -> Result<Self, MalformedTarget> {
        Self::build(Some(user_info.into()), host.into(), None)
    }

    pub fn with_user_info_and_port<U: Into<String>, H: Into<String>>(
        user_info: U,
        host: H,
        port: i32,
    ) -> Result<Self, MalformedTarget> {
        Self::build(Some(user_info.into()), host.into(), check_port(port)?)
    }

    fn build(user_info: Option<String>, host: String, port: Option<u16>) -> Result<Self, MalformedTarget> {
        ensure!(!host.is_empty(), MalformedTarget::EmptyHost);
        Ok(Self { user_info, host, port })
    }

    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port, `None` when the scheme default applies.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The explicit port, or the default port of `scheme` when none was given.
    pub fn effective_port(&self, scheme: &str) -> Option<u16> {
        self.port.or_else(|| default_port(scheme))
    }

    /// Compares two authorities in the context of `scheme`, so that an explicit
    /// default port equals an absent one.
    pub fn eq_in_scheme(&self, other: &UriAuthority, scheme: &str) -> bool {
        self.user_info == other.user_info
            && self.host.eq_ignore_ascii_case(&other.host)
            && self.effective_port(scheme) == other.effective_port(scheme)
    }

    /// Renders `host[:port]`, dropping the user info.
    ///
    /// This is the form that may appear on the wire, in a `Host` header or an
    /// absolute-form request target.
    pub fn host_and_port(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }

    /// Like [`UriAuthority::host_and_port`], but omits the port when it is the
    /// well-known port of `scheme`.
    pub fn host_and_port_in_scheme(&self, scheme: &str) -> String {
        match self.port {
            Some(port) if default_port(scheme) != Some(port) => format!("{}:{}", self.host, port),
            _ => self.host.clone(),
        }
    }
}

fn check_port(port: i32) -> Result<Option<u16>, MalformedTarget> {
    if port == NO_PORT {
        return Ok(None);
    }
    match u16::try_from(port) {
        Ok(port) if port > 0 => Ok(Some(port)),
        _ => Err(MalformedTarget::invalid_port(port)),
    }
}

fn parse_port(port: &str) -> Result<Option<u16>, MalformedTarget> {
    // "host:" is allowed by RFC 3986 and means the default port
    if port.is_empty() {
        return Ok(None);
    }
    ensure!(port.bytes().all(|b| b.is_ascii_digit()), MalformedTarget::invalid_port(port));
    match port.parse::<u16>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(MalformedTarget::invalid_port(port)),
    }
}

impl PartialEq for UriAuthority {
    fn eq(&self, other: &Self) -> bool {
        self.user_info == other.user_info && self.host.eq_ignore_ascii_case(&other.host) && self.port == other.port
    }
}

impl Eq for UriAuthority {}

impl Hash for UriAuthority {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_info.hash(state);
        for b in self.host.bytes() {
            b.to_ascii_lowercase().hash(state);
        }
        self.port.hash(state);
    }
}

impl fmt::Display for UriAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user_info) = &self.user_info {
            write!(f, "{user_info}@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// Parses `[userinfo@]host[:port]`, including bracketed IPv6 literals.
impl FromStr for UriAuthority {
    type Err = MalformedTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ensure!(
            !s.bytes().any(|b| b.is_ascii_whitespace() || b.is_ascii_control() || matches!(b, b'/' | b'?' | b'#')),
            MalformedTarget::invalid_authority(s)
        );

        // '@' can't appear in the host, the last one ends the user info
        let (user_info, host_port) = match s.rfind('@') {
            Some(at) => (Some(&s[..at]), &s[at + 1..]),
            None => (None, s),
        };

        let (host, port) = if host_port.starts_with('[') {
            let end = host_port.find(']').ok_or_else(|| MalformedTarget::invalid_authority(s))?;
            let (host, rest) = host_port.split_at(end + 1);
            match rest.strip_prefix(':') {
                Some(port) => (host, parse_port(port)?),
                None if rest.is_empty() => (host, None),
                None => return Err(MalformedTarget::invalid_authority(s)),
            }
        } else {
            match host_port.split_once(':') {
                Some((_, port)) if port.contains(':') => return Err(MalformedTarget::invalid_authority(s)),
                Some((host, port)) => (host, parse_port(port)?),
                None => (host_port, None),
            }
        };

        Self::build(user_info.map(str::to_string), host.to_string(), port)
    }
}

/// An explicit connection target: a scheme plus an authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpHost {
    scheme: String,
    authority: UriAuthority,
}

impl HttpHost {
    /// Creates a host from its parts, an empty scheme defaults to `http`.
    pub fn new(scheme: &str, host: &str, port: i32) -> Result<Self, MalformedTarget> {
        Ok(Self::from_authority(scheme, UriAuthority::with_port(host, port)?))
    }

    pub fn from_authority(scheme: &str, authority: UriAuthority) -> Self {
        let scheme = if scheme.is_empty() { "http".to_string() } else { scheme.to_ascii_lowercase() };
        Self { scheme, authority }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &UriAuthority {
        &self.authority
    }

    pub fn into_authority(self) -> UriAuthority {
        self.authority
    }
}

impl fmt::Display for HttpHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority.host_and_port_in_scheme(&self.scheme))
    }
}
