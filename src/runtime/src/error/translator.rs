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

use super::{BoxError, Error, ServiceError};
use bytes::Bytes;
use http::HeaderMap;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use wire::{JsonReader, Unmarshaller};

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// The code given to error responses that carry a message but no code.
pub const UNKNOWN_ERROR_CODE: &str = "UnknownError";

/// The placeholder returned by [ErrorResponse::field] for missing fields.
pub const MISSING_FIELD: &str = "null";

/// A service error response, as received from the transport.
///
/// The error code is found in the `x-amzn-ErrorType` header, or failing that
/// in the `__type` or `code` fields of the body.
#[derive(Clone, Debug)]
pub struct ErrorResponse {
    status: u16,
    headers: HeaderMap,
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    body: Map<String, Value>,
    payload: Bytes,
}

impl ErrorResponse {
    pub fn from_http(status: u16, headers: HeaderMap, payload: Bytes) -> Self {
        let body = match serde_json::from_slice::<Value>(&payload) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let code = header_str(&headers, ERROR_TYPE_HEADER)
            .and_then(|h| h.split(':').next())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .or_else(|| {
                body_str(&body, &["__type"])
                    .and_then(|t| t.rsplit('#').next())
                    .filter(|c| !c.is_empty())
            })
            .or_else(|| body_str(&body, &["code", "Code"]))
            .map(str::to_string);
        let message = body_str(&body, &["message", "Message", "errorMessage"]).map(str::to_string);
        let request_id = header_str(&headers, REQUEST_ID_HEADER).map(str::to_string);
        Self {
            status,
            headers,
            code,
            message,
            request_id,
            body,
            payload,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The error code, if the response includes one.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The request id from the `x-amzn-RequestId` header.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The error body. Empty if the payload is not a JSON object.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Returns the text of a body field.
    ///
    /// Strings are returned as-is, other values as their JSON text. Missing
    /// fields, and fields set to `null`, return [MISSING_FIELD].
    ///
    /// # Example
    /// ```
    /// use pinpoint_runtime::error::translator::ErrorResponse;
    /// let response = ErrorResponse::from_http(
    ///     404,
    ///     http::HeaderMap::new(),
    ///     bytes::Bytes::from_static(br#"{"RequestID":"abc-123","Count":3}"#),
    /// );
    /// assert_eq!(response.field("RequestID"), "abc-123");
    /// assert_eq!(response.field("Count"), "3");
    /// assert_eq!(response.field("Missing"), "null");
    /// ```
    pub fn field(&self, key: &str) -> String {
        match self.body.get(key) {
            None | Some(Value::Null) => MISSING_FIELD.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
        }
    }

    /// Runs `unmarshaller` over the error body.
    pub fn unmarshall_body<U>(&self, unmarshaller: &U) -> wire::Result<Option<U::Value>>
    where
        U: Unmarshaller + ?Sized,
    {
        let mut reader = JsonReader::from_value(Value::Object(self.body.clone()));
        unmarshaller.unmarshall(&mut reader)
    }

    /// The generic [ServiceError] for this response.
    ///
    /// A response with a message but no code gets [UNKNOWN_ERROR_CODE]. A
    /// response with neither returns `None`.
    pub fn to_service_error(&self) -> Option<ServiceError> {
        let code = match (&self.code, &self.message) {
            (Some(code), _) => code.as_str(),
            (None, Some(_)) => UNKNOWN_ERROR_CODE,
            (None, None) => return None,
        };
        let mut error = ServiceError::new(code)
            .set_http_status_code(self.status)
            .set_headers(self.headers.clone());
        if let Some(m) = &self.message {
            error = error.set_message(m);
        }
        if let Some(id) = &self.request_id {
            error = error.set_request_id(id);
        }
        Some(error)
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn body_str<'a>(body: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| body.get(*k).and_then(Value::as_str))
}

/// Converts an error response into a typed error.
pub trait ErrorTranslator: Send + Sync + std::fmt::Debug {
    /// Returns true if this translator handles the given error code.
    ///
    /// Codes are compared exactly.
    fn matches(&self, code: &str) -> bool;

    fn translate(&self, response: &ErrorResponse) -> BoxError;
}

/// A typed service error created from an error response.
pub trait ServiceException: std::error::Error + Send + Sync + Sized + 'static {
    /// The error code handled by this type, for example `NotFoundException`.
    const ERROR_CODE: &'static str;

    fn from_response(response: &ErrorResponse) -> Self;
}

/// An [ErrorTranslator] creating a [ServiceException].
pub struct ExceptionTranslator<E>(PhantomData<fn() -> E>);

impl<E> ExceptionTranslator<E> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for ExceptionTranslator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for ExceptionTranslator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ExceptionTranslator")
            .field(&std::any::type_name::<E>())
            .finish()
    }
}

impl<E: ServiceException> ErrorTranslator for ExceptionTranslator<E> {
    fn matches(&self, code: &str) -> bool {
        code == E::ERROR_CODE
    }

    fn translate(&self, response: &ErrorResponse) -> BoxError {
        Box::new(E::from_response(response))
    }
}

/// An ordered list of translators.
///
/// # Example
/// ```
/// use pinpoint_runtime::error::translator::*;
/// let translators = ErrorTranslators::new();
/// let response = ErrorResponse::from_http(
///     400,
///     http::HeaderMap::new(),
///     bytes::Bytes::from_static(br#"{"__type":"svc#WeirdException","message":"odd"}"#),
/// );
/// let error = translators.translate(response);
/// let service = error.service_error().expect("a service error");
/// assert_eq!(service.code(), "WeirdException");
/// assert_eq!(service.message(), Some("odd"));
/// ```
#[derive(Debug, Default)]
pub struct ErrorTranslators {
    translators: Vec<Box<dyn ErrorTranslator>>,
}

impl ErrorTranslators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a translator. Earlier translators take precedence.
    pub fn with<T: ErrorTranslator + 'static>(mut self, translator: T) -> Self {
        self.translators.push(Box::new(translator));
        self
    }

    /// Appends the translator for a [ServiceException].
    pub fn exception<E: ServiceException>(self) -> Self {
        self.with(ExceptionTranslator::<E>::new())
    }

    /// Converts an error response into an [Error].
    ///
    /// The error always carries a [ServiceError]. If a translator matches the
    /// error code, the typed error is available via [Error::as_inner].
    /// Responses without an error code never match a translator. If they
    /// carry a message it is kept in a generic [ServiceError], otherwise they
    /// are reported as HTTP errors.
    pub fn translate(&self, response: ErrorResponse) -> Error {
        let Some(service) = response.to_service_error() else {
            tracing::debug!(status = response.status, "error response without an error code");
            return Error::http(response.status, response.headers, response.payload);
        };
        if response.code.is_none() {
            return Error::service(service);
        }
        match self.translators.iter().find(|t| t.matches(service.code())) {
            Some(t) => Error::service_with_source(service, t.translate(&response)),
            None => {
                tracing::debug!(code = service.code(), "no typed error for the error code");
                Error::service(service)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded, request id {request_id}")]
    struct QuotaException {
        request_id: String,
    }

    impl ServiceException for QuotaException {
        const ERROR_CODE: &'static str = "QuotaException";
        fn from_response(response: &ErrorResponse) -> Self {
            Self {
                request_id: response.field("RequestID"),
            }
        }
    }

    fn response(headers: &[(&'static str, &'static str)], body: serde_json::Value) -> ErrorResponse {
        let mut map = HeaderMap::new();
        for (k, v) in headers {
            map.insert(*k, HeaderValue::from_static(*v));
        }
        ErrorResponse::from_http(400, map, Bytes::from(body.to_string()))
    }

    #[test_case(&[("x-amzn-errortype", "QuotaException:http://internal/")], json!({}) ; "header with suffix")]
    #[test_case(&[("x-amzn-errortype", "QuotaException")], json!({"code": "Other"}) ; "header wins")]
    #[test_case(&[], json!({"__type": "com.amazonaws.pinpoint#QuotaException"}) ; "type with namespace")]
    #[test_case(&[], json!({"__type": "QuotaException"}) ; "type")]
    #[test_case(&[], json!({"code": "QuotaException"}) ; "lowercase code")]
    #[test_case(&[], json!({"Code": "QuotaException"}) ; "code")]
    fn code(headers: &[(&'static str, &'static str)], body: serde_json::Value) {
        let response = response(headers, body);
        assert_eq!(response.code(), Some("QuotaException"));
    }

    #[test_case(json!({"message": "m"}))]
    #[test_case(json!({"Message": "m"}))]
    #[test_case(json!({"errorMessage": "m"}))]
    fn message(body: serde_json::Value) {
        assert_eq!(response(&[], body).message(), Some("m"));
    }

    #[test]
    fn field() {
        let response = response(
            &[],
            json!({"RequestID": "abc-123", "Count": 3, "Flag": false, "Empty": null}),
        );
        assert_eq!(response.field("RequestID"), "abc-123");
        assert_eq!(response.field("Count"), "3");
        assert_eq!(response.field("Flag"), "false");
        assert_eq!(response.field("Empty"), MISSING_FIELD);
        assert_eq!(response.field("requestid"), MISSING_FIELD);
    }

    #[test]
    fn not_json() {
        let response = ErrorResponse::from_http(502, HeaderMap::new(), Bytes::from_static(b"<html>"));
        assert!(response.body().is_empty());
        assert_eq!(response.code(), None);
        assert_eq!(response.field("RequestID"), MISSING_FIELD);
    }

    #[test]
    fn unmarshall_body() -> anyhow::Result<()> {
        let response = response(&[], json!({"Message": "m", "RequestID": "r"}));
        let got = response.unmarshall_body(&wire::MapCodec(wire::StringCodec))?;
        let want: std::collections::BTreeMap<String, String> = [("Message", "m"), ("RequestID", "r")]
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .into_iter()
            .collect();
        assert_eq!(got, Some(want));

        // The body is always an object.
        let got = response.unmarshall_body(&wire::ListCodec(wire::StringCodec))?;
        assert_eq!(got, None);
        Ok(())
    }

    #[test]
    fn translate_typed() {
        let translators = ErrorTranslators::new().exception::<QuotaException>();
        let response = response(
            &[
                ("x-amzn-errortype", "QuotaException"),
                ("x-amzn-requestid", "hdr-1"),
            ],
            json!({"Message": "too many", "RequestID": "abc-123"}),
        );
        let error = translators.translate(response);
        let typed = error.as_inner::<QuotaException>().expect("typed error");
        assert_eq!(typed.request_id, "abc-123");
        let service = error.service_error().expect("service error");
        assert_eq!(service.code(), "QuotaException");
        assert_eq!(service.message(), Some("too many"));
        assert_eq!(service.request_id(), Some("hdr-1"));
        assert_eq!(error.http_status_code(), Some(400));
    }

    #[test]
    fn translate_first_match() {
        #[derive(Debug)]
        struct Never;
        impl ErrorTranslator for Never {
            fn matches(&self, _code: &str) -> bool {
                false
            }
            fn translate(&self, _response: &ErrorResponse) -> BoxError {
                unreachable!("never matches")
            }
        }
        let translators = ErrorTranslators::new()
            .with(Never)
            .exception::<QuotaException>()
            .with(ExceptionTranslator::<QuotaException>::new());
        let error = translators.translate(response(&[], json!({"code": "QuotaException"})));
        assert!(error.as_inner::<QuotaException>().is_some(), "{error:?}");
    }

    #[test]
    fn translate_unknown_code() {
        let translators = ErrorTranslators::new().exception::<QuotaException>();
        let error = translators.translate(response(&[], json!({"code": "WeirdException"})));
        assert!(error.as_inner::<QuotaException>().is_none(), "{error:?}");
        let service = error.service_error().expect("service error");
        assert_eq!(service.code(), "WeirdException");
    }

    #[test]
    fn translate_near_miss_code() {
        let translators = ErrorTranslators::new().exception::<QuotaException>();
        let error = translators.translate(response(&[], json!({"code": "quotaexception"})));
        assert!(error.as_inner::<QuotaException>().is_none(), "{error:?}");
    }

    #[test]
    fn translate_without_code() {
        let translators = ErrorTranslators::new().exception::<QuotaException>();
        let response = ErrorResponse::from_http(
            503,
            HeaderMap::new(),
            Bytes::from_static(b"Service Unavailable"),
        );
        let error = translators.translate(response);
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(503));
        assert_eq!(
            error.http_payload(),
            Some(&Bytes::from_static(b"Service Unavailable"))
        );
    }

    #[test]
    fn translate_message_without_code() {
        let translators = ErrorTranslators::new().exception::<QuotaException>();
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-9"));
        let response = ErrorResponse::from_http(
            502,
            headers,
            Bytes::from_static(br#"{"message":"upstream timed out"}"#),
        );
        let error = translators.translate(response);
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.as_inner::<QuotaException>().is_none(), "{error:?}");
        let service = error.service_error().expect("a service error");
        assert_eq!(service.code(), UNKNOWN_ERROR_CODE);
        assert_eq!(service.message(), Some("upstream timed out"));
        assert_eq!(service.request_id(), Some("req-9"));
        assert_eq!(error.http_status_code(), Some(502));
    }
}
