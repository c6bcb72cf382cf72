//! Body length determination for HTTP/1.x messages.
//!
//! Implements the message body length rules of
//! [RFC 9112 section 6.3](https://www.rfc-editor.org/rfc/rfc9112.html#name-message-body-length)
//! as a pure function over a message head. The precedence is:
//!
//! 1. `Transfer-Encoding` ending in `chunked` wins over any `Content-Length`
//! 2. otherwise all `Content-Length` values must agree on a single length
//! 3. otherwise a request has no body, a response is either empty (when its
//!    body is forbidden) or undefined
//!
//! Anything ambiguous is reported as a [`ProtocolViolation`] and never guessed,
//! two processors disagreeing on the framing of a message is what request
//! smuggling exploits.

use http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};
use http::{HeaderMap, Method, StatusCode};
use tracing::{trace, warn};

use crate::ensure;
use crate::protocol::{FramingDecision, MessageView, ProtocolViolation};

const CHUNKED: &str = "chunked";

/// Determines how the body of `message` is delimited.
///
/// `body_forbidden` is only consulted for responses without any framing
/// header, see [`body_forbidden`] for how a transport computes it.
///
/// The result depends on the current headers only and is never cached, call it
/// again after mutating the headers.
///
/// # Errors
///
/// Returns `ProtocolViolation` if:
/// - `chunked` is not the final transfer-coding
/// - the final transfer-coding is not `chunked`
/// - a `Content-Length` value is not a non-negative integer
/// - `Content-Length` values disagree
pub fn determine_length<M: MessageView + ?Sized>(
    message: &M,
    body_forbidden: bool,
) -> Result<FramingDecision, ProtocolViolation> {
    let result = decide(message, body_forbidden);
    match &result {
        Ok(decision) => trace!(framing = ?decision, request = message.is_request(), "determined body framing"),
        Err(e) => warn!(cause = %e, request = message.is_request(), "ambiguous body framing"),
    }
    result
}

fn decide<M: MessageView + ?Sized>(message: &M, body_forbidden: bool) -> Result<FramingDecision, ProtocolViolation> {
    let headers = message.headers();

    if transfer_encoding_chunked(headers)? {
        return Ok(FramingDecision::Chunked);
    }

    if let Some(length) = content_length(headers)? {
        return Ok(FramingDecision::Length(length));
    }

    // a request body delimited by connection close is illegal
    if message.is_request() || body_forbidden {
        Ok(FramingDecision::Length(0))
    } else {
        Ok(FramingDecision::Undefined)
    }
}

/// Returns true if a response to `request_method` with `status` must not carry
/// a body: any 1xx, 204 and 304 response, every response to `HEAD` and a 2xx
/// response to `CONNECT`.
pub fn body_forbidden(request_method: &Method, status: StatusCode) -> bool {
    status.is_informational()
        || status == StatusCode::NO_CONTENT
        || status == StatusCode::NOT_MODIFIED
        || *request_method == Method::HEAD
        || (*request_method == Method::CONNECT && status.is_success())
}

/// Inspects every `Transfer-Encoding` value.
///
/// Returns `Ok(true)` when the coding list ends in `chunked` and `Ok(false)` when
/// there is no coding at all, empty values count as absent.
fn transfer_encoding_chunked(headers: &HeaderMap) -> Result<bool, ProtocolViolation> {
    let mut last_coding = None;
    let mut chunked = false;

    for value in headers.get_all(TRANSFER_ENCODING) {
        let value = value.to_str().map_err(|_| ProtocolViolation::invalid_header_value(TRANSFER_ENCODING))?;
        for coding in value.split(',') {
            let coding = coding.split_once(';').map_or(coding, |(name, _params)| name).trim_ascii();
            if coding.is_empty() {
                continue;
            }
            ensure!(!chunked, ProtocolViolation::ChunkedNotFinal);
            chunked = coding.eq_ignore_ascii_case(CHUNKED);
            last_coding = Some(coding);
        }
    }

    match last_coding {
        None => Ok(false),
        Some(_) if chunked => Ok(true),
        Some(coding) => Err(ProtocolViolation::unsupported_transfer_coding(coding.to_ascii_lowercase())),
    }
}

/// Collects every `Content-Length` value, a comma separated value counts as
/// several occurrences. All occurrences must carry the same length.
fn content_length(headers: &HeaderMap) -> Result<Option<u64>, ProtocolViolation> {
    let mut length = None;

    for value in headers.get_all(CONTENT_LENGTH) {
        let value = value.to_str().map_err(|_| ProtocolViolation::invalid_content_length("value can't to_str"))?;
        for item in value.split(',') {
            let current = parse_length(item)?;
            match length {
                Some(first) if first != current => {
                    return Err(ProtocolViolation::ConflictingContentLength { first, second: current });
                }
                _ => length = Some(current),
            }
        }
    }

    Ok(length)
}

fn parse_length(value: &str) -> Result<u64, ProtocolViolation> {
    let trimmed = value.trim_ascii();
    ensure!(!trimmed.is_empty(), ProtocolViolation::invalid_content_length("empty value"));
    ensure!(
        trimmed.bytes().all(|b| b.is_ascii_digit()),
        ProtocolViolation::invalid_content_length(format!("value {trimmed} is not a non-negative integer"))
    );
    trimmed
        .parse::<u64>()
        .map_err(|_| ProtocolViolation::invalid_content_length(format!("value {trimmed} is not u64")))
}
