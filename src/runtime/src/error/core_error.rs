// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{BoxError, ServiceError};
use bytes::Bytes;
use http::HeaderMap;
use std::error::Error as StdError;

/// The error returned by every Pinpoint operation.
///
/// A call can fail before the request leaves the process (the input cannot
/// be bound to a HTTP request or serialized), in the transport, in the
/// service, or while decoding the response. The predicates below tell these
/// apart. Service failures carry a [ServiceError] with the code, message,
/// and request id the service reported. When the code is recognized the
/// typed exception is also attached, see [as_inner][Error::as_inner].
///
/// # Example
/// ```
/// use pinpoint_runtime::error::{Error, ServiceError};
/// fn describe(result: Result<(), Error>) -> String {
///     match result {
///         Ok(()) => "ok".to_string(),
///         Err(e) => match e.service_error() {
///             Some(s) => format!("rejected with {}", s.code()),
///             None if e.is_io() => "network problem".to_string(),
///             None => format!("failed: {e}"),
///         },
///     }
/// }
/// let e = Error::service(ServiceError::new("NotFoundException"));
/// assert_eq!(describe(Err(e)), "rejected with NotFoundException");
/// ```
#[derive(Debug)]
pub struct Error {
    repr: Repr,
    source: Option<BoxError>,
}

#[derive(Debug)]
enum Repr {
    Binding,
    Serialization,
    Deserialization,
    Io,
    Http {
        status: u16,
        headers: HeaderMap,
        payload: Bytes,
    },
    Service(Box<ServiceError>),
    Other,
}

impl Error {
    fn new(repr: Repr, source: Option<BoxError>) -> Self {
        Self { repr, source }
    }

    /// A failure reported by the service.
    ///
    /// # Example
    /// ```
    /// use pinpoint_runtime::error::{Error, ServiceError};
    /// let error = Error::service(ServiceError::new("NotFoundException"));
    /// assert_eq!(error.service_error().map(|e| e.code()), Some("NotFoundException"));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        Self::new(Repr::Service(Box::new(error)), None)
    }

    /// A failure reported by the service, with the typed exception attached.
    pub fn service_with_source<T: Into<BoxError>>(error: ServiceError, source: T) -> Self {
        Self::new(Repr::Service(Box::new(error)), Some(source.into()))
    }

    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Deserialization, Some(source.into()))
    }

    /// Encoding the request body failed, for example on a non-finite number.
    ///
    /// # Example
    /// ```
    /// use pinpoint_runtime::error::Error;
    /// let error = Error::ser("NaN is not a JSON number");
    /// assert!(error.is_serialization());
    /// ```
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Serialization, Some(source.into()))
    }

    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Binding, Some(source.into()))
    }

    /// A non-success HTTP response that the service did not describe.
    ///
    /// # Example
    /// ```
    /// use pinpoint_runtime::error::Error;
    /// let error = Error::http(502, http::HeaderMap::new(), bytes::Bytes::from_static(b"Bad Gateway"));
    /// assert_eq!(error.http_status_code(), Some(502));
    /// assert!(error.is_transport() && !error.is_io());
    /// ```
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: Bytes) -> Self {
        let repr = Repr::Http {
            status: status_code,
            headers,
            payload,
        };
        Self::new(repr, None)
    }

    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Io, Some(source.into()))
    }

    /// Anything that fits none of the other categories.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self::new(Repr::Other, Some(source.into()))
    }

    /// The service payload, present for every failure the service reported,
    /// recognized or not.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.repr {
            Repr::Service(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// The response body is not valid JSON, or a member has the wrong type.
    /// Unknown and missing members are not errors.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.repr, Repr::Deserialization)
    }

    /// The request body could not be encoded. Retrying will not help.
    pub fn is_serialization(&self) -> bool {
        matches!(self.repr, Repr::Serialization)
    }

    /// The input could not be turned into a HTTP request. Check the
    /// configured endpoint and any header values.
    pub fn is_binding(&self) -> bool {
        matches!(self.repr, Repr::Binding)
    }

    /// The request was not sent or the response was not received.
    pub fn is_io(&self) -> bool {
        matches!(self.repr, Repr::Io)
    }

    /// Either [is_io][Error::is_io] or a HTTP failure without a service
    /// payload.
    pub fn is_transport(&self) -> bool {
        matches!(self.repr, Repr::Io | Repr::Http { .. })
    }

    pub fn http_status_code(&self) -> Option<u16> {
        match &self.repr {
            Repr::Http { status, .. } => Some(*status),
            Repr::Service(e) => e.http_status_code(),
            _ => None,
        }
    }

    /// Response headers. The `x-amzn-RequestId` header identifies the call
    /// when talking to support.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.repr {
            Repr::Http { headers, .. } => Some(headers),
            Repr::Service(e) => e.headers(),
            _ => None,
        }
    }

    /// The raw body of a HTTP failure without a service payload.
    pub fn http_payload(&self) -> Option<&Bytes> {
        match &self.repr {
            Repr::Http { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Walks the source chain looking for a `T`.
    ///
    /// Typed service exceptions are found this way.
    ///
    /// # Example
    /// ```
    /// use pinpoint_runtime::error::{Error, ServiceError};
    /// let error = Error::service_with_source(
    ///     ServiceError::new("QuotaException"),
    ///     std::io::Error::other("simulated"),
    /// );
    /// assert!(error.as_inner::<std::io::Error>().is_some());
    /// ```
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        let first: &(dyn StdError + 'static) = self.source.as_deref()?;
        std::iter::successors(Some(first), |&e| e.source()).find_map(|e| e.downcast_ref::<T>())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match &self.repr {
            Repr::Binding => "cannot build the HTTP request",
            Repr::Serialization => "cannot encode the request body",
            Repr::Deserialization => "cannot decode the response body",
            Repr::Io => "cannot reach the service",
            Repr::Other => "request failed",
            Repr::Http {
                status, payload, ..
            } => {
                return match std::str::from_utf8(payload) {
                    Ok(text) => write!(f, "HTTP {status}: {text}"),
                    Err(_) => write!(f, "HTTP {status}: {payload:?}"),
                };
            }
            Repr::Service(e) => {
                return write!(
                    f,
                    "service error {}: {}",
                    e.code(),
                    e.message().unwrap_or("no message")
                );
            }
        };
        match &self.source {
            Some(source) => write!(f, "{what}: {source}"),
            None => f.write_str(what),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[derive(Debug, thiserror::Error)]
    #[error("leaf error")]
    struct LeafError;

    #[derive(Debug, thiserror::Error)]
    #[error("middle error")]
    struct MiddleError(#[source] LeafError);

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("req-1"));
        headers
    }

    #[test]
    fn service() {
        let service = ServiceError::new("NotFoundException")
            .set_message("NOT FOUND")
            .set_http_status_code(404_u16)
            .set_headers(headers());
        let error = Error::service(service);
        assert!(error.source().is_none(), "{error:?}");
        let got = error.service_error().expect("service error is set");
        assert_eq!(got.code(), "NotFoundException");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("NotFoundException"), "{error}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn service_with_source() {
        let error =
            Error::service_with_source(ServiceError::new("WeirdException"), MiddleError(LeafError));
        assert!(error.service_error().is_some(), "{error:?}");
        assert!(error.as_inner::<MiddleError>().is_some(), "{error:?}");
        assert!(error.as_inner::<LeafError>().is_some(), "{error:?}");
        assert!(error.as_inner::<std::io::Error>().is_none(), "{error:?}");
    }

    #[test]
    fn as_inner_without_source() {
        let error = Error::service(ServiceError::new("NotFoundException"));
        assert!(error.as_inner::<LeafError>().is_none(), "{error:?}");
    }

    #[test]
    fn deser() {
        let error = Error::deser(LeafError);
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.source().and_then(|e| e.downcast_ref::<LeafError>()).is_some());
        assert!(error.to_string().contains("leaf error"), "{error}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn ser() {
        let error = Error::ser(LeafError);
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("leaf error"), "{error}");
    }

    #[test]
    fn binding() {
        let error = Error::binding(LeafError);
        assert!(error.is_binding(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.to_string().contains("leaf error"), "{error}");
    }

    #[test]
    fn http() {
        let error = Error::http(502, headers(), bytes::Bytes::from_static(b"Bad Gateway"));
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"Bad Gateway"))
        );
        assert!(error.to_string().contains("HTTP 502"), "{error}");
        assert!(error.to_string().contains("Bad Gateway"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io(std::io::Error::other("connection reset"));
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
        assert!(error.as_inner::<std::io::Error>().is_some(), "{error:?}");
    }

    #[test]
    fn other() {
        let error = Error::other(LeafError);
        assert!(error.to_string().contains("leaf error"), "{error}");
        assert!(!error.is_binding(), "{error:?}");
    }

    #[test]
    fn is_shareable() {
        static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
    }
}
