//! # Tern Core
//!
//! Issue JSON REST calls and decode the responses into your own types, with
//! HTTP failures uniformly classified into typed errors.
//!
//! Each call is one request/response exchange on a shared, connection-pooling
//! transport: the body is serialized once, [`RequestOption`]s customize the
//! outgoing request in order, and the status code decides the outcome.
//! Success-range responses (< 400) decode into a caller-defined type that
//! implements [`ResponseMeta`]; 4xx and 5xx responses come back as an
//! [`Error::Status`] carrying the response's header, status and raw body.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use http::{HeaderMap, StatusCode};
//! use serde::Deserialize;
//! use tern_core::{ResponseMeta, ResponseParts};
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Product {
//!     #[serde(skip)]
//!     parts: ResponseParts,
//!     id: u32,
//!     title: String,
//! }
//!
//! impl ResponseMeta for Product {
//!     fn set_header(&mut self, header: HeaderMap) {
//!         self.parts.set_header(header);
//!     }
//!     fn set_status(&mut self, status: StatusCode) {
//!         self.parts.set_status(status);
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), tern_core::Error> {
//! let product: Product = tern_core::get("https://api.example.com/products/1", []).await?;
//! assert_eq!(product.parts.status, StatusCode::OK);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error classification
//!
//! ```rust,no_run
//! use tern_core::{Error, Fault};
//! # use http::{HeaderMap, StatusCode};
//! # use serde::Deserialize;
//! # use tern_core::{ResponseMeta, ResponseParts};
//! # #[derive(Debug, Default, Deserialize)]
//! # struct Product {
//! #     #[serde(skip)]
//! #     parts: ResponseParts,
//! # }
//! # impl ResponseMeta for Product {
//! #     fn set_header(&mut self, header: HeaderMap) { self.parts.set_header(header); }
//! #     fn set_status(&mut self, status: StatusCode) { self.parts.set_status(status); }
//! # }
//!
//! # async fn example() {
//! let result: Result<Product, Error> = tern_core::get("https://api.example.com/nope", []).await;
//! match result {
//!     Ok(product) => println!("got {product:?}"),
//!     Err(Error::Status(status)) if status.fault == Fault::Client => {
//!         eprintln!("rejected: {}", status.status);
//!     }
//!     Err(Error::Status(status)) => eprintln!("server broke: {}", status.status),
//!     Err(other) => eprintln!("call failed: {other}"),
//! }
//! # }
//! ```
//!
//! ## Cancellation and deadlines
//!
//! The futures returned by the verb functions are lazy and abort the exchange
//! when dropped, so they compose with `tokio::time::timeout` or `select!`.
//! For a per-request deadline, pass [`with_timeout`]; an expired deadline
//! surfaces promptly as [`Error::Transport`].
//!
//! Out of scope by design: retries, streaming bodies, content types other
//! than JSON, and authentication flows. Layer those on top if you need them.

mod client;

pub use self::client::{
    Cookie, Error, Fault, RequestOption, ResponseMeta, ResponseParts, StatusError, delete, get,
    patch, post, put, with_cookie, with_header, with_timeout,
};
