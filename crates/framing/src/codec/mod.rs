//! HTTP head codecs built on the framing and request-target engines.
//!
//! The codecs only deal with message heads. Once a head is decoded, the
//! transport reads the body the way the returned
//! [`FramingDecision`](crate::protocol::FramingDecision) says: a fixed number of
//! bytes, a chunked sequence or, for responses, until the connection closes.
//!
//! # Components
//!
//! - [`RequestDecoder`]: decodes request heads on the server side
//! - [`ResponseDecoder`]: decodes response heads on the client side
//! - [`RequestEncoder`]: encodes request heads on the client side
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_http_framing::codec::RequestDecoder;
//! use micro_http_framing::protocol::FramingDecision;
//! use tokio_util::codec::Decoder;
//!
//! let mut buffer = BytesMut::from("POST /upload HTTP/1.1\r\nHost: example.org\r\nContent-Length: 5\r\n\r\nhello");
//! let (header, framing) = RequestDecoder::new().decode(&mut buffer).unwrap().unwrap();
//!
//! assert_eq!(header.path(), "/upload");
//! assert_eq!(framing, FramingDecision::Length(5));
//! assert_eq!(&buffer[..], b"hello");
//! ```

mod request_decoder;
mod request_encoder;
mod response_decoder;

pub use request_decoder::MAX_HEADER_BYTES;
pub use request_decoder::MAX_HEADER_NUM;
pub use request_decoder::RequestDecoder;
pub use request_encoder::RequestEncoder;
pub use response_decoder::ResponseDecoder;
