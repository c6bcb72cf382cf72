//! HTTP response header handling implementation.
//!
//! Response heads are plain `http::Response<()>` values: the status code, the
//! version and the header list are all the framing logic needs, and
//! [`MessageView`](crate::protocol::MessageView) is implemented for every
//! `http::Response<B>`.

use http::Response;

/// Type alias for HTTP response headers.
///
/// This type represents the header portion of an HTTP response, using
/// `http::Response<()>` with an empty body placeholder.
pub type ResponseHead = Response<()>;
