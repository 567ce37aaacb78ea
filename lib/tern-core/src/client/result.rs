use std::fmt;

use http::{HeaderMap, StatusCode};

/// Capability contract for response types.
///
/// The dispatcher decodes the response body into a fresh, caller-defined value
/// and then stamps the transport metadata onto it through these two setters.
/// Both are called exactly once per successful call, after decoding, and never
/// again.
///
/// The easiest way to satisfy the contract is to embed a [`ResponseParts`]
/// under `#[serde(skip)]` and delegate to it:
///
/// ```rust
/// use http::{HeaderMap, StatusCode};
/// use serde::Deserialize;
/// use tern_core::{ResponseMeta, ResponseParts};
///
/// #[derive(Debug, Default, Deserialize)]
/// struct Product {
///     #[serde(skip)]
///     parts: ResponseParts,
///     id: u32,
///     title: String,
/// }
///
/// impl ResponseMeta for Product {
///     fn set_header(&mut self, header: HeaderMap) {
///         self.parts.set_header(header);
///     }
///     fn set_status(&mut self, status: StatusCode) {
///         self.parts.set_status(status);
///     }
/// }
/// ```
pub trait ResponseMeta {
    /// Stores the response header map.
    fn set_header(&mut self, header: HeaderMap);

    /// Stores the response status code.
    fn set_status(&mut self, status: StatusCode);
}

/// Transport metadata of a completed call: response header and status code.
///
/// Response types embed this (skipped during deserialization) and delegate
/// their [`ResponseMeta`] implementation to it. The default value is an empty
/// header map with status `200 OK`; both fields are overwritten by the
/// dispatcher before the value reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseParts {
    /// Response header map, exactly as received.
    pub header: HeaderMap,
    /// Response status code.
    pub status: StatusCode,
}

impl Default for ResponseParts {
    fn default() -> Self {
        Self {
            header: HeaderMap::new(),
            status: StatusCode::OK,
        }
    }
}

impl ResponseMeta for ResponseParts {
    fn set_header(&mut self, header: HeaderMap) {
        self.header = header;
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }
}

impl fmt::Display for ResponseParts {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "header: {:?}, status: {}",
            self.header, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;
    use http::HeaderValue;

    use super::*;

    #[test]
    fn test_default_parts_are_empty_with_status_ok() {
        let parts = ResponseParts::default();

        assert!(parts.header.is_empty());
        assert_eq!(parts.status, StatusCode::OK);
    }

    #[test]
    fn test_setters_overwrite_parts() {
        let mut parts = ResponseParts::default();
        let mut header = HeaderMap::new();
        header.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        parts.set_header(header.clone());
        parts.set_status(StatusCode::CREATED);

        assert_eq!(parts.header, header);
        assert_eq!(parts.status, StatusCode::CREATED);
    }

    #[test]
    fn test_display_shows_status() {
        let mut parts = ResponseParts::default();
        parts.set_status(StatusCode::NO_CONTENT);

        assert_eq!(parts.to_string(), "header: {}, status: 204 No Content");
    }
}
