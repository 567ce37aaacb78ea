use std::error::Error as StdError;
use std::fmt;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};

const BODY_PREVIEW_MAX_LENGTH: usize = 1024;

/// Errors produced by a dispatched call.
///
/// Every failure is returned to the immediate caller; nothing is logged,
/// swallowed or retried internally. Callers branch on the variant (or on the
/// [`Fault`] classification for HTTP failures) to decide what to do next.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum Error {
    /// The request body could not be encoded as JSON.
    ///
    /// Local and non-retryable; nothing was sent over the wire.
    #[display("could not serialize request body: {_0}")]
    Serialization(serde_json::Error),

    /// The target URL could not be parsed, so no request was constructed.
    #[display("invalid url '{url}': {source}")]
    #[from(skip)]
    InvalidUrl {
        /// The URL as supplied by the caller.
        url: String,
        /// The underlying parse failure.
        source: url::ParseError,
    },

    /// The exchange could not complete: network failure, expired deadline,
    /// cancellation or TLS trouble.
    #[display("could not execute {method} request: {source}")]
    #[from(skip)]
    Transport {
        /// The HTTP method of the failed request, for diagnostics.
        method: Method,
        /// The underlying transport failure.
        source: reqwest::Error,
    },

    /// The response status was outside the success range (>= 400).
    Status(StatusError),

    /// A success-range response carried a body that is not valid JSON or
    /// does not match the expected shape.
    ///
    /// Nothing partially decoded is returned; `path` names the JSON location
    /// that failed.
    #[display("malformed json body at '{path}': {source}")]
    #[from(skip)]
    Decode {
        /// JSON path of the first mismatch.
        path: String,
        /// The underlying deserialization failure.
        source: serde_json::Error,
    },
}

impl Error {
    /// The classified HTTP failure, when the error is a [`Error::Status`].
    pub fn as_status(&self) -> Option<&StatusError> {
        match self {
            Self::Status(error) => Some(error),
            _ => None,
        }
    }

    /// The response status code, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        self.as_status().map(|error| error.status)
    }

    /// Whether this is a 4xx response.
    pub fn is_client_fault(&self) -> bool {
        self.as_status()
            .is_some_and(|error| error.fault == Fault::Client)
    }

    /// Whether this is a response with status >= 500.
    pub fn is_server_fault(&self) -> bool {
        self.as_status()
            .is_some_and(|error| error.fault == Fault::Server)
    }
}

/// Classification of a failed HTTP exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Fault {
    /// The 4xx range: the request was understood and refused.
    #[display("client fault")]
    Client,
    /// Status >= 500: the server failed to process the request.
    #[display("server fault")]
    Server,
}

/// A response outside the success range, with its transport metadata.
///
/// The header and status always reflect the failing response. The body is
/// read best-effort: when reading it fails, `body` is empty and the read
/// failure chains as this error's [`source`](StdError::source).
#[derive(Debug)]
pub struct StatusError {
    /// Client or server fault, per the status range.
    pub fault: Fault,
    /// Response status code.
    pub status: StatusCode,
    /// Response header map.
    pub header: HeaderMap,
    /// Raw response body; empty when reading it failed.
    pub body: Bytes,
    pub(crate) read_error: Option<reqwest::Error>,
}

impl StatusError {
    /// The secondary failure raised while reading the response body, if any.
    pub fn read_error(&self) -> Option<&reqwest::Error> {
        self.read_error.as_ref()
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ({})", self.fault, self.status)?;
        if self.read_error.is_some() {
            return write!(formatter, ": could not read response body");
        }
        if self.body.is_empty() {
            return Ok(());
        }
        let preview = String::from_utf8_lossy(&self.body);
        match preview.char_indices().nth(BODY_PREVIEW_MAX_LENGTH) {
            Some((offset, _)) => write!(formatter, ": {}... (truncated)", &preview[..offset]),
            None => write!(formatter, ": {preview}"),
        }
    }
}

impl StdError for StatusError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.read_error
            .as_ref()
            .map(|error| error as &(dyn StdError + 'static))
    }
}
