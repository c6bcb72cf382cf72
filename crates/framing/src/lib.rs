//! The wire-framing core of the micro HTTP/1.x engine
//!
//! This crate holds the two decisions every HTTP/1.x implementation has to get
//! bit-exact, because getting them wrong opens the door to request smuggling and
//! response splitting:
//!
//! - **Body length determination**: given a message head, how is its body
//!   delimited on the connection? A fixed length, the chunked coding, the end of
//!   the connection, or nothing at all.
//! - **Request-target resolution**: turning a request's target into
//!   `(scheme, authority, path, query)` and rendering it back in origin-form or
//!   absolute-form.
//!
//! Socket I/O, TLS, connection pooling and body payload codecs live in the
//! surrounding layers, they call into this crate through [`protocol`] and
//! [`codec`].
//!
//! # Example
//!
//! ```
//! use http::{Method, Response, StatusCode};
//! use micro_http_framing::protocol::{body_forbidden, determine_length, FramingDecision, RequestHeader};
//!
//! // a request without framing headers has no body
//! let request = RequestHeader::from_uri(Method::GET, "http://somehost/stuff?x=1").unwrap();
//! assert_eq!(determine_length(&request, false), Ok(FramingDecision::Length(0)));
//! assert_eq!(request.request_uri(), "/stuff?x=1");
//!
//! // a response without framing headers is read until close, unless it can't have a body
//! let response = Response::builder()
//!     .status(StatusCode::OK)
//!     .header(http::header::SERVER, "micro-http")
//!     .body(())
//!     .unwrap();
//! let forbidden = body_forbidden(&Method::GET, response.status());
//! let framing = determine_length(&response, forbidden).unwrap();
//! assert_eq!(framing, FramingDecision::Undefined);
//! assert_eq!(framing.resolve(true), FramingDecision::UntilClose);
//! ```
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - [`protocol`]: authorities, request targets, the message model, the body
//!   length engine and the error types
//! - [`codec`]: request and response head decoders and the request head encoder
//!
//! # Error Handling
//!
//! The crate uses custom error types that implement `std::error::Error`:
//!
//! - [`protocol::ProtocolViolation`]: self-contradictory framing headers, the
//!   connection can't be trusted afterwards
//! - [`protocol::MalformedTarget`]: invalid request-target or authority
//! - [`protocol::ParseError`]: head decoding errors
//! - [`protocol::SendError`]: head encoding errors
//!
//! # Limitations
//!
//! - HTTP/1.0 and HTTP/1.1 only
//! - Maximum header size: 8KB
//! - Maximum number of headers: 64

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
