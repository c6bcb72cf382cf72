//! Decoder for HTTP response heads.
//!
//! Framing a response depends on the request it answers: a response to `HEAD`
//! or a `2xx` to `CONNECT` has no body whatever its headers say. The decoder is
//! therefore created for one request method at a time.

use bytes::{Buf, BytesMut};
use http::{Method, Response, StatusCode};
use httparse::{Error, Status};
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::{MAX_HEADER_BYTES, MAX_HEADER_NUM};
use crate::ensure;
use crate::protocol::{FramingDecision, ParseError, ResponseHead, body_forbidden, determine_length};
use crate::utils::{header_map, http_version};

/// Decoder for HTTP response heads implementing the [`Decoder`] trait.
///
/// Yields the parsed [`ResponseHead`] together with the [`FramingDecision`] of
/// the body following it. `Undefined` is left to the caller, who knows whether
/// the connection may be read until close, see [`FramingDecision::resolve`].
#[derive(Debug, Clone)]
pub struct ResponseDecoder {
    request_method: Method,
}

impl ResponseDecoder {
    /// Creates a decoder for the response to a request sent with `request_method`.
    pub fn new(request_method: Method) -> Self {
        Self { request_method }
    }

    pub fn request_method(&self) -> &Method {
        &self.request_method
    }
}

impl Decoder for ResponseDecoder {
    type Item = (ResponseHead, FramingDecision);
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADER_NUM];
        let mut resp = httparse::Response::new(&mut headers);

        let parsed_result = resp.parse(&src[..]).map_err(|e| match e {
            Error::TooManyHeaders => ParseError::too_many_headers(MAX_HEADER_NUM),
            e => ParseError::invalid_header(e),
        });

        match parsed_result? {
            Status::Complete(body_offset) => {
                trace!(header_size = body_offset, "parsed response head");
                ensure!(body_offset <= MAX_HEADER_BYTES, ParseError::too_large_header(body_offset, MAX_HEADER_BYTES));

                let status = resp
                    .code
                    .and_then(|code| StatusCode::from_u16(code).ok())
                    .ok_or(ParseError::InvalidStatus(resp.code))?;

                let mut head = Response::new(());
                *head.status_mut() = status;
                *head.version_mut() = http_version(resp.version)?;
                *head.headers_mut() = header_map(resp.headers)?;

                let forbidden = body_forbidden(&self.request_method, status);
                // framing headers are still validated for a bodiless response,
                // they only describe the representation it would have had
                let framing = match determine_length(&head, forbidden)? {
                    _ if forbidden => FramingDecision::Length(0),
                    framing => framing,
                };

                src.advance(body_offset);
                Ok(Some((head, framing)))
            }
            Status::Partial => {
                ensure!(src.len() <= MAX_HEADER_BYTES, ParseError::too_large_header(src.len(), MAX_HEADER_BYTES));
                Ok(None)
            }
        }
    }
}
