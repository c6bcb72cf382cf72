//! Core HTTP protocol abstractions for message framing.
//!
//! This module holds the two decision engines every HTTP/1.x layer depends on
//! for correctness, together with the message types they operate on.
//!
//! # Architecture
//!
//! - **Authorities** (`authority`): URI authority value types
//!   - [`UriAuthority`]: `[userinfo@]host[:port]`
//!   - [`HttpHost`]: a scheme plus an authority, an explicit connection target
//!
//! - **Request targets** (`target`): request-target resolution
//!   - [`RequestTarget`]: normalized `(scheme, authority, path, query)`
//!
//! - **Message Model** (`message`, `request`, `response`)
//!   - [`MessageView`]: what the framing engine reads from a message head
//!   - [`FramingDecision`]: how a message body is delimited
//!   - [`RequestHeader`]: a request head owning its target
//!   - [`ResponseHead`]: response heads
//!
//! - **Body length** (`content_length`)
//!   - [`determine_length`]: the framing decision for a message head
//!   - [`body_forbidden`]: whether a response may carry a body at all
//!
//! - **Error Handling** (`error`)
//!   - [`ProtocolViolation`]: self-contradictory framing headers
//!   - [`MalformedTarget`]: invalid request-target or authority
//!   - [`ParseError`]: decoding a head from the wire failed
//!   - [`SendError`]: encoding a head failed
//!
//! Every operation here is pure and synchronous. A framing decision is never
//! cached, it has to be computed again after the headers change.

mod authority;
pub use authority::HttpHost;
pub use authority::NO_PORT;
pub use authority::UriAuthority;
pub use authority::default_port;

mod target;
pub use target::RequestTarget;

mod message;
pub use message::FramingDecision;
pub use message::MessageView;

mod request;
pub use request::RequestHeader;
pub use request::parse_method;

mod response;
pub use response::ResponseHead;

mod content_length;
pub use content_length::body_forbidden;
pub use content_length::determine_length;

mod error;
pub use error::MalformedTarget;
pub use error::ParseError;
pub use error::ProtocolViolation;
pub use error::SendError;
