use std::io;
use thiserror::Error;

/// The framing headers of a message are self-contradictory or unparsable.
///
/// A message carrying one of these can't be framed safely, the transport is
/// expected to abort the connection instead of trying to resynchronize.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolViolation {
    #[error("chunked must be the final transfer-coding")]
    ChunkedNotFinal,

    #[error("unsupported final transfer-coding: {coding}")]
    UnsupportedTransferCoding { coding: String },

    #[error("invalid content-length header: {reason}")]
    InvalidContentLength { reason: String },

    #[error("conflicting content-length headers: {first} and {second}")]
    ConflictingContentLength { first: u64, second: u64 },

    #[error("header {name} has a non visible-ascii value")]
    InvalidHeaderValue { name: String },
}

impl ProtocolViolation {
    pub fn unsupported_transfer_coding<S: ToString>(coding: S) -> Self {
        Self::UnsupportedTransferCoding { coding: coding.to_string() }
    }

    pub fn invalid_content_length<S: ToString>(str: S) -> Self {
        Self::InvalidContentLength { reason: str.to_string() }
    }

    pub fn invalid_header_value<S: ToString>(name: S) -> Self {
        Self::InvalidHeaderValue { name: name.to_string() }
    }
}

/// A request-target or authority that violates the request-target grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedTarget {
    #[error("request target is empty")]
    Empty,

    #[error("invalid http method")]
    InvalidMethod,

    #[error("request target path {path} starts with multiple slashes")]
    MultipleLeadingSlashes { path: String },

    #[error("asterisk-form target is only allowed for OPTIONS, not {method}")]
    AsteriskForm { method: String },

    #[error("relative request target {target} must start with '/'")]
    RelativePath { target: String },

    #[error("authority-form request target {target} is not supported")]
    AuthorityForm { target: String },

    #[error("authority host is empty")]
    EmptyHost,

    #[error("invalid port: {port}")]
    InvalidPort { port: String },

    #[error("invalid authority: {reason}")]
    InvalidAuthority { reason: String },

    #[error("invalid uri: {reason}")]
    InvalidUri { reason: String },
}

impl MalformedTarget {
    pub fn multiple_leading_slashes<S: ToString>(path: S) -> Self {
        Self::MultipleLeadingSlashes { path: path.to_string() }
    }

    pub fn relative_path<S: ToString>(target: S) -> Self {
        Self::RelativePath { target: target.to_string() }
    }

    pub fn authority_form<S: ToString>(target: S) -> Self {
        Self::AuthorityForm { target: target.to_string() }
    }

    pub fn invalid_port<S: ToString>(port: S) -> Self {
        Self::InvalidPort { port: port.to_string() }
    }

    pub fn invalid_authority<S: ToString>(str: S) -> Self {
        Self::InvalidAuthority { reason: str.to_string() }
    }

    pub fn invalid_uri<S: ToString>(str: S) -> Self {
        Self::InvalidUri { reason: str.to_string() }
    }
}

/// Errors raised while decoding a message head from the wire.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("header number exceed the limit {max_num}")]
    TooManyHeaders { max_num: usize },

    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("invalid http version: {0:?}")]
    InvalidVersion(Option<u8>),

    #[error("invalid http status code: {0:?}")]
    InvalidStatus(Option<u16>),

    #[error("framing error: {source}")]
    Protocol {
        #[from]
        source: ProtocolViolation,
    },

    #[error("request target error: {source}")]
    Target {
        #[from]
        source: MalformedTarget,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHeader { current_size, max_size }
    }

    pub fn too_many_headers(max_num: usize) -> Self {
        Self::TooManyHeaders { max_num }
    }

    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }
}

/// Errors raised while encoding a request head.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("unsupported http version: {version}")]
    UnsupportedVersion { version: String },

    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("request target error: {source}")]
    Target {
        #[from]
        source: MalformedTarget,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn unsupported_version<S: ToString>(version: S) -> Self {
        Self::UnsupportedVersion { version: version.to_string() }
    }

    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }
}
