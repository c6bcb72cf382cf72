//! HTTP request header handling implementation.
//!
//! This module provides [`RequestHeader`], the head of a request: its method,
//! its normalized [`RequestTarget`], the protocol version and the header list.
//! The target is only ever replaced as a whole, so scheme, authority, path and
//! query can't get out of sync.

use http::request::Parts;
use http::{HeaderMap, Method, Request, StatusCode, Uri, Version};

use crate::ensure;
use crate::utils::{header_map, http_version};
use crate::protocol::{HttpHost, MalformedTarget, MessageView, ParseError, RequestTarget, UriAuthority};

/// Represents an HTTP request header.
///
/// The request-target rendered on the request line is origin-form unless
/// [`RequestHeader::set_absolute_request_uri`] asks for absolute-form, which is
/// what a client talking to a forward proxy sends.
#[derive(Debug, Clone)]
pub struct RequestHeader {
    method: Method,
    target: RequestTarget,
    version: Version,
    headers: HeaderMap,
    absolute_request_uri: bool,
}

/// Parses a method token, an empty token is rejected.
pub fn parse_method(method: &str) -> Result<Method, MalformedTarget> {
    ensure!(!method.is_empty(), MalformedTarget::InvalidMethod);
    Method::from_bytes(method.as_bytes()).map_err(|_| MalformedTarget::InvalidMethod)
}

impl RequestHeader {
    /// Creates an HTTP/1.1 request header without any header field.
    pub fn new(method: Method, target: RequestTarget) -> Self {
        Self { method, target, version: Version::HTTP_11, headers: HeaderMap::new(), absolute_request_uri: false }
    }

    /// Creates a request header for `uri`, see [`RequestTarget::from_uri`].
    pub fn from_uri(method: Method, uri: &str) -> Result<Self, MalformedTarget> {
        let target = RequestTarget::from_uri(&method, uri)?;
        Ok(Self::new(method, target))
    }

    /// Creates a request header for an explicit connection target, see
    /// [`RequestTarget::from_host_and_path`].
    pub fn with_host(method: Method, host: &HttpHost, path: &str) -> Result<Self, MalformedTarget> {
        let target = RequestTarget::from_host_and_path(host, path)?;
        Ok(Self::new(method, target))
    }

    /// Returns this header with the protocol version replaced.
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Returns a reference to the request's HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn target(&self) -> &RequestTarget {
        &self.target
    }

    pub fn scheme(&self) -> Option<&str> {
        self.target.scheme()
    }

    pub fn authority(&self) -> Option<&UriAuthority> {
        self.target.authority()
    }

    /// Returns the request path, without the query.
    pub fn path(&self) -> &str {
        self.target.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.target.query()
    }

    /// Returns the request's HTTP version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns a reference to the request's headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a mutable reference to the request's headers.
    ///
    /// Use `append` to add a header, `insert` drops the values already present
    /// for that name.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn is_absolute_request_uri(&self) -> bool {
        self.absolute_request_uri
    }

    pub fn set_absolute_request_uri(&mut self, absolute_request_uri: bool) {
        self.absolute_request_uri = absolute_request_uri;
    }

    /// Returns the request-target to write on the request line.
    pub fn request_uri(&self) -> String {
        self.target.to_request_target(self.absolute_request_uri)
    }

    /// Returns the full URI of this request, see [`RequestTarget::to_uri_string`].
    pub fn uri_string(&self) -> String {
        self.target.to_uri_string()
    }

    pub fn uri(&self) -> Result<Uri, MalformedTarget> {
        self.target.to_uri()
    }

    /// Replaces the whole target, returning the previous one.
    pub fn replace_target(&mut self, target: RequestTarget) -> RequestTarget {
        std::mem::replace(&mut self.target, target)
    }

    /// Replaces the target with the one built from `uri`.
    ///
    /// The current target is kept untouched when `uri` is malformed.
    pub fn set_uri(&mut self, uri: &str) -> Result<(), MalformedTarget> {
        let target = RequestTarget::from_uri(&self.method, uri)?;
        self.replace_target(target);
        Ok(())
    }

    /// Attaches a body, converting this header into a full `http::Request<T>`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTarget::InvalidUri` when the target can't be
    /// represented as an `http::Uri`.
    pub fn body<T>(self, body: T) -> Result<Request<T>, MalformedTarget> {
        let uri = self.target.to_uri()?;
        let mut request = Request::new(body);
        *request.method_mut() = self.method;
        *request.uri_mut() = uri;
        *request.version_mut() = self.version;
        *request.headers_mut() = self.headers;
        Ok(request)
    }
}

impl MessageView for RequestHeader {
    #[inline]
    fn is_request(&self) -> bool {
        true
    }

    #[inline]
    fn method(&self) -> Option<&Method> {
        Some(&self.method)
    }

    #[inline]
    fn status(&self) -> Option<StatusCode> {
        None
    }

    #[inline]
    fn version(&self) -> Version {
        self.version
    }

    #[inline]
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Converts request parts into a RequestHeader.
impl TryFrom<Parts> for RequestHeader {
    type Error = MalformedTarget;

    fn try_from(parts: Parts) -> Result<Self, Self::Error> {
        let target = RequestTarget::from_http_uri(&parts.method, &parts.uri)?;
        Ok(Self { method: parts.method, target, version: parts.version, headers: parts.headers, absolute_request_uri: false })
    }
}

/// Converts a bodyless request into a RequestHeader.
impl TryFrom<Request<()>> for RequestHeader {
    type Error = MalformedTarget;

    fn try_from(request: Request<()>) -> Result<Self, Self::Error> {
        let (parts, ()) = request.into_parts();
        Self::try_from(parts)
    }
}

/// Converts a parsed HTTP request into a RequestHeader.
///
/// The request line is resolved into a [`RequestTarget`] and every header is
/// appended in wire order, so repeated headers are all kept.
impl<'headers, 'buf> TryFrom<httparse::Request<'headers, 'buf>> for RequestHeader {
    type Error = ParseError;

    fn try_from(req: httparse::Request<'headers, 'buf>) -> Result<Self, Self::Error> {
        let method = parse_method(req.method.ok_or(MalformedTarget::InvalidMethod)?)?;

        let version = http_version(req.version)?;
        let target = RequestTarget::from_uri(&method, req.path.ok_or(MalformedTarget::Empty)?)?;
        let headers = header_map(req.headers)?;

        Ok(Self { method, target, version, headers, absolute_request_uri: false })
    }
}
