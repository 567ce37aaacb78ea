//! Typed JSON REST calls with classified errors.
//!
//! This module provides:
//!
//! - [`get`], [`post`], [`put`], [`patch`], [`delete`] - the per-verb entry
//!   points over the single generic dispatch routine
//! - [`ResponseMeta`] / [`ResponseParts`] - the contract a response type
//!   satisfies so transport metadata can be stamped onto it
//! - [`RequestOption`] with [`with_header`], [`with_cookie`] and
//!   [`with_timeout`] - ordered request customization
//! - [`Error`] / [`Fault`] / [`StatusError`] - the failure taxonomy

mod call;
pub use self::call::{delete, get, patch, post, put};

mod error;
pub use self::error::{Error, Fault, StatusError};

mod option;
pub use self::option::{Cookie, RequestOption, with_cookie, with_header, with_timeout};

mod result;
pub use self::result::{ResponseMeta, ResponseParts};
