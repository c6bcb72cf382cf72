//! Utility macros and functions for the framing crate.
//!
//! This module provides helpers used internally by the protocol types and the
//! head codecs.

use http::{HeaderMap, HeaderName, HeaderValue, Version};

use crate::protocol::ParseError;

/// A macro for early returns with an error if a condition is not met.
///
/// This is similar to the `assert!` macro, but returns an error instead of panicking.
///
/// # Example
///
/// ```ignore
/// ensure!(!host.is_empty(), MalformedTarget::EmptyHost);
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;

/// Maps the minor version reported by `httparse` to an HTTP/1.x version.
pub(crate) fn http_version(version: Option<u8>) -> Result<Version, ParseError> {
    match version {
        Some(0) => Ok(Version::HTTP_10),
        Some(1) => Ok(Version::HTTP_11),
        // http2 and http3 currently not support
        v => Err(ParseError::InvalidVersion(v)),
    }
}

/// Builds a header map from parsed headers, appending every value in wire
/// order so repeated headers are all kept.
pub(crate) fn header_map(headers: &[httparse::Header<'_>]) -> Result<HeaderMap, ParseError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for header in headers {
        let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(ParseError::invalid_header)?;
        let value = HeaderValue::from_bytes(header.value).map_err(ParseError::invalid_header)?;
        map.append(name, value);
    }
    Ok(map)
}
