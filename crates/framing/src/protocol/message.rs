use http::{HeaderMap, Method, Request, Response, StatusCode, Version};

/// The read surface of an HTTP message head needed to frame its body.
///
/// A request reports a method and never a status, a response reports a status
/// and never a method. Headers are an `http::HeaderMap` filled with `append`, so
/// every value of a repeated header is kept in order.
pub trait MessageView {
    /// Returns true for requests, false for responses
    fn is_request(&self) -> bool;

    /// The request method, `None` for responses
    fn method(&self) -> Option<&Method>;

    /// The response status, `None` for requests
    fn status(&self) -> Option<StatusCode>;

    fn version(&self) -> Version;

    fn headers(&self) -> &HeaderMap;
}

impl<B> MessageView for Request<B> {
    #[inline]
    fn is_request(&self) -> bool {
        true
    }

    #[inline]
    fn method(&self) -> Option<&Method> {
        Some(Request::method(self))
    }

    #[inline]
    fn status(&self) -> Option<StatusCode> {
        None
    }

    #[inline]
    fn version(&self) -> Version {
        Request::version(self)
    }

    #[inline]
    fn headers(&self) -> &HeaderMap {
        Request::headers(self)
    }
}

impl<B> MessageView for Response<B> {
    #[inline]
    fn is_request(&self) -> bool {
        false
    }

    #[inline]
    fn method(&self) -> Option<&Method> {
        None
    }

    #[inline]
    fn status(&self) -> Option<StatusCode> {
        Some(Response::status(self))
    }

    #[inline]
    fn version(&self) -> Version {
        Response::version(self)
    }

    #[inline]
    fn headers(&self) -> &HeaderMap {
        Response::headers(self)
    }
}

/// How the body of a message is delimited on the connection.
///
/// - `Length`: exactly this many bytes follow the head
/// - `Chunked`: the body uses the chunked transfer-coding
/// - `UntilClose`: the body ends when the connection closes
/// - `Undefined`: the head doesn't delimit the body, only legal for responses
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FramingDecision {
    /// Body with a known length in bytes
    Length(u64),
    /// Body using chunked transfer encoding
    Chunked,
    /// Body read until the connection is closed
    UntilClose,
    /// Body not explicitly delimited by the message head
    Undefined,
}

impl FramingDecision {
    /// Returns the explicit length, if any
    #[inline]
    pub fn length(&self) -> Option<u64> {
        match self {
            FramingDecision::Length(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the body uses chunked transfer encoding
    #[inline]
    pub fn is_chunked(&self) -> bool {
        matches!(self, FramingDecision::Chunked)
    }

    /// Returns true if there is no body at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, FramingDecision::Length(0))
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, FramingDecision::Undefined)
    }

    /// Resolves an `Undefined` decision against the connection state.
    ///
    /// On a connection that will be closed after this message the body is read
    /// until close, otherwise the decision stays `Undefined` and the transport has
    /// to give up on the message.
    pub fn resolve(self, connection_closable: bool) -> Self {
        match self {
            FramingDecision::Undefined if connection_closable => FramingDecision::UntilClose,
            decision => decision,
        }
    }
}
