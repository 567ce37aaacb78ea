use std::fmt;
use std::time::Duration;

use http::header::COOKIE;
use http::{HeaderName, HeaderValue};
use reqwest::Request;

/// An ordered, infallible mutation of an outgoing request.
///
/// Options are applied strictly in the order they were supplied, after the
/// request has been constructed and before it is sent. They may add or
/// override anything on the request; when two options touch the same header,
/// the later one wins only to the extent the header semantics say so
/// (header addition accumulates values, it does not overwrite).
pub struct RequestOption(Box<dyn FnOnce(&mut Request) + Send>);

impl RequestOption {
    /// Wraps a custom mutation into an option.
    ///
    /// ```rust
    /// use tern_core::RequestOption;
    ///
    /// let opt = RequestOption::new(|request| {
    ///     *request.version_mut() = http::Version::HTTP_11;
    /// });
    /// ```
    pub fn new(apply: impl FnOnce(&mut Request) + Send + 'static) -> Self {
        Self(Box::new(apply))
    }

    pub(crate) fn apply(self, request: &mut Request) {
        (self.0)(request);
    }
}

impl fmt::Debug for RequestOption {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("RequestOption")
    }
}

/// Appends a header to the request.
///
/// Appending never overwrites: two options for the same name leave both
/// values on the sent request.
///
/// ```rust
/// use http::{HeaderName, HeaderValue};
/// use tern_core::with_header;
///
/// let opt = with_header(
///     HeaderName::from_static("x-api-key"),
///     HeaderValue::from_static("secret"),
/// );
/// ```
pub fn with_header(name: HeaderName, value: HeaderValue) -> RequestOption {
    RequestOption::new(move |request| {
        request.headers_mut().append(name, value);
    })
}

/// Attaches a cookie to the request.
///
/// The `name=value` pair is appended to the `Cookie` header, joined with
/// `"; "` when one is already present, so cookie options accumulate in call
/// order.
pub fn with_cookie(cookie: Cookie) -> RequestOption {
    RequestOption::new(move |request| {
        let pair = cookie.header_pair();
        let headers = request.headers_mut();
        let joined = match headers.get(COOKIE).and_then(|value| value.to_str().ok()) {
            Some(existing) => format!("{existing}; {pair}"),
            None => pair,
        };
        if let Ok(value) = HeaderValue::from_str(&joined) {
            headers.insert(COOKIE, value);
        }
    })
}

/// Sets a deadline for the whole exchange.
///
/// An expired deadline aborts the in-flight call and surfaces as
/// [`Error::Transport`](crate::Error::Transport).
pub fn with_timeout(timeout: Duration) -> RequestOption {
    RequestOption::new(move |request| {
        *request.timeout_mut() = Some(timeout);
    })
}

/// A cookie to send with a request, as a name/value pair.
///
/// Name and value are sanitized on construction: the name keeps only HTTP
/// token characters, the value only valid cookie octets (RFC 6265). This
/// keeps the option itself infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    name: String,
    value: String,
}

impl Cookie {
    /// Builds a cookie, sanitizing the name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().chars().filter(is_token_char).collect();
        let value = value.into().chars().filter(is_cookie_octet).collect();
        Self { name, value }
    }

    /// Cookie name after sanitization.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cookie value after sanitization.
    pub fn value(&self) -> &str {
        &self.value
    }

    fn header_pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}={}", self.name, self.value)
    }
}

// RFC 7230 token characters, valid in a cookie name.
fn is_token_char(value: &char) -> bool {
    matches!(value,
        '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~')
        || value.is_ascii_alphanumeric()
}

// RFC 6265 cookie-octet: printable US-ASCII minus controls, whitespace,
// double quote, comma, semicolon and backslash.
fn is_cookie_octet(value: &char) -> bool {
    matches!(value, '\u{21}' | '\u{23}'..='\u{2B}' | '\u{2D}'..='\u{3A}' | '\u{3C}'..='\u{5B}' | '\u{5D}'..='\u{7E}')
}
