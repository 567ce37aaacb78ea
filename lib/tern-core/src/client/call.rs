use std::sync::LazyLock;

use bytes::Bytes;
use headers::{ContentType, HeaderMapExt};
use http::Method;
use reqwest::{Body, Client, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::error::{Error, Fault, StatusError};
use super::option::RequestOption;
use super::result::ResponseMeta;

// Shared default transport: thread-safe and connection-pooling, reused by
// every call in the process.
static CLIENT: LazyLock<Client> = LazyLock::new(Client::new);

/// Issues a GET request and decodes the JSON response into `T`.
///
/// GET carries no request body; the entity is the JSON encoding of "no
/// value" (`null`).
///
/// ```rust,no_run
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
///
/// # async fn example() -> Result<(), tern_core::Error> {
/// let product: Product = tern_core::get("https://api.example.com/products/1", []).await?;
/// assert_eq!(product.parts.status, StatusCode::OK);
/// # Ok(())
/// # }
/// ```
pub async fn get<T, O>(url: &str, options: O) -> Result<T, Error>
where
    T: ResponseMeta + DeserializeOwned,
    O: IntoIterator<Item = RequestOption>,
{
    dispatch::<T, (), O>(Method::GET, url, None, options).await
}

/// Issues a POST request with a JSON body and decodes the response into `T`.
pub async fn post<T, B, O>(url: &str, body: &B, options: O) -> Result<T, Error>
where
    T: ResponseMeta + DeserializeOwned,
    B: Serialize + ?Sized,
    O: IntoIterator<Item = RequestOption>,
{
    dispatch(Method::POST, url, Some(body), options).await
}

/// Issues a PUT request with a JSON body and decodes the response into `T`.
pub async fn put<T, B, O>(url: &str, body: &B, options: O) -> Result<T, Error>
where
    T: ResponseMeta + DeserializeOwned,
    B: Serialize + ?Sized,
    O: IntoIterator<Item = RequestOption>,
{
    dispatch(Method::PUT, url, Some(body), options).await
}

/// Issues a PATCH request with a JSON body and decodes the response into `T`.
pub async fn patch<T, B, O>(url: &str, body: &B, options: O) -> Result<T, Error>
where
    T: ResponseMeta + DeserializeOwned,
    B: Serialize + ?Sized,
    O: IntoIterator<Item = RequestOption>,
{
    dispatch(Method::PATCH, url, Some(body), options).await
}

/// Issues a DELETE request with a JSON body and decodes the response into `T`.
pub async fn delete<T, B, O>(url: &str, body: &B, options: O) -> Result<T, Error>
where
    T: ResponseMeta + DeserializeOwned,
    B: Serialize + ?Sized,
    O: IntoIterator<Item = RequestOption>,
{
    dispatch(Method::DELETE, url, Some(body), options).await
}

// The core routine: serialize, construct, apply options, execute, triage by
// status, decode and stamp. Exactly one round trip; the response body is
// consumed or dropped on every path.
async fn dispatch<T, B, O>(
    method: Method,
    url: &str,
    body: Option<&B>,
    options: O,
) -> Result<T, Error>
where
    T: ResponseMeta + DeserializeOwned,
    B: Serialize + ?Sized,
    O: IntoIterator<Item = RequestOption>,
{
    // An absent body still serializes, as `null`: bodiless verbs share the
    // same request construction as the others.
    let payload = serde_json::to_vec(&body).map_err(Error::Serialization)?;

    let target = Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_owned(),
        source,
    })?;

    let mut request = Request::new(method.clone(), target);
    request.headers_mut().typed_insert(ContentType::json());
    *request.body_mut() = Some(Body::from(payload));

    // Options run after construction, in call order, so they can override
    // anything set above.
    for option in options {
        option.apply(&mut request);
    }

    debug!(?request, "sending...");
    let response = CLIENT
        .execute(request)
        .await
        .map_err(|source| Error::Transport {
            method: method.clone(),
            source,
        })?;
    debug!(?response, "...receiving");

    let status = response.status();
    match status.as_u16() {
        500.. => Err(fault(Fault::Server, response).await),
        400..=499 => Err(fault(Fault::Client, response).await),
        _ => {
            let header = response.headers().clone();
            let bytes = response
                .bytes()
                .await
                .map_err(|source| Error::Transport { method, source })?;

            let deserializer = &mut serde_json::Deserializer::from_slice(&bytes);
            let mut result: T =
                serde_path_to_error::deserialize(deserializer).map_err(|err| Error::Decode {
                    path: err.path().to_string(),
                    source: err.into_inner(),
                })?;

            result.set_header(header);
            result.set_status(status);
            Ok(result)
        }
    }
}

// Builds the classified error for a 4xx/5xx response. The body read is
// best-effort: a failure leaves the body empty and chains as the error's
// source.
async fn fault(fault: Fault, response: Response) -> Error {
    let status = response.status();
    let header = response.headers().clone();
    let (body, read_error) = match response.bytes().await {
        Ok(bytes) => (bytes, None),
        Err(error) => (Bytes::new(), Some(error)),
    };

    Error::Status(StatusError {
        fault,
        status,
        header,
        body,
        read_error,
    })
}
