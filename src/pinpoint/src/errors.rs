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

//! Typed errors returned by the service.
//!
//! Failed calls return an [Error][crate::Error]. When the error code matches
//! one of the types in this module, the typed error is available through
//! [Error::as_inner][crate::Error::as_inner]:
//!
//! ```
//! # use pinpoint_sdk::errors::NotFoundException;
//! # fn handle(error: pinpoint_sdk::Error) {
//! if let Some(e) = error.as_inner::<NotFoundException>() {
//!     println!("not found, request id {}", e.request_id);
//! }
//! # }
//! ```

use crate::model::MessageBody;
use runtime::error::translator::{ErrorResponse, ErrorTranslators, MISSING_FIELD, ServiceException};
use std::sync::LazyLock;
use wire::Shape;

macro_rules! exception {
    ($(#[$meta:meta])* $name:ident = $status:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, thiserror::Error)]
        #[error("{error_code} ({status}): {message}, request id {request_id}", status = $status)]
        #[non_exhaustive]
        pub struct $name {
            /// The error code, as reported by the service.
            pub error_code: String,
            pub message: String,
            /// The `RequestID` from the error body.
            pub request_id: String,
            /// The structured error body, if the response included one.
            pub body: Option<MessageBody>,
        }

        impl $name {
            /// The HTTP status code used by the service for this error.
            pub const HTTP_STATUS: u16 = $status;
        }

        impl ServiceException for $name {
            const ERROR_CODE: &'static str = stringify!($name);

            fn from_response(response: &ErrorResponse) -> Self {
                Self {
                    error_code: response.code().unwrap_or(Self::ERROR_CODE).to_string(),
                    message: response.message().unwrap_or(MISSING_FIELD).to_string(),
                    request_id: response.field("RequestID"),
                    body: message_body(response),
                }
            }
        }
    };
}

exception! {
    /// The request is malformed or contains invalid values.
    BadRequestException = 400
}

exception! {
    /// The caller is not allowed to perform the operation.
    ForbiddenException = 403
}

exception! {
    /// The resource does not exist.
    NotFoundException = 404
}

exception! {
    /// The operation is not supported for the resource.
    MethodNotAllowedException = 405
}

exception! {
    /// The caller is sending too many requests.
    TooManyRequestsException = 429
}

exception! {
    /// The service failed to process the request.
    InternalServerErrorException = 500
}

fn message_body(response: &ErrorResponse) -> Option<MessageBody> {
    response
        .unmarshall_body(MessageBody::codec())
        .unwrap_or_else(|e| {
            tracing::debug!("cannot decode the error body: {e}");
            None
        })
}

/// The translators for the typed errors of the service.
///
/// Translators are tried in registration order. Error codes without a typed
/// error produce a generic [ServiceError][runtime::error::ServiceError].
pub fn translators() -> &'static ErrorTranslators {
    static TRANSLATORS: LazyLock<ErrorTranslators> = LazyLock::new(|| {
        ErrorTranslators::new()
            .exception::<BadRequestException>()
            .exception::<ForbiddenException>()
            .exception::<InternalServerErrorException>()
            .exception::<MethodNotAllowedException>()
            .exception::<NotFoundException>()
            .exception::<TooManyRequestsException>()
    });
    &TRANSLATORS
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue};
    use serde_json::json;
    use test_case::test_case;

    fn response(status: u16, body: serde_json::Value) -> ErrorResponse {
        ErrorResponse::from_http(status, HeaderMap::new(), Bytes::from(body.to_string()))
    }

    fn check<E: ServiceException + std::fmt::Debug>(status: u16) -> anyhow::Result<()> {
        let response = response(
            status,
            json!({"__type": E::ERROR_CODE, "Message": "oops", "RequestID": "abc-123"}),
        );
        let error = translators().translate(response);
        assert!(error.as_inner::<E>().is_some(), "{error:?}");
        let service = error.service_error().expect("a service error");
        assert_eq!(service.code(), E::ERROR_CODE);
        assert_eq!(service.http_status_code(), Some(status));
        Ok(())
    }

    #[test_case(400, check::<BadRequestException>)]
    #[test_case(403, check::<ForbiddenException>)]
    #[test_case(404, check::<NotFoundException>)]
    #[test_case(405, check::<MethodNotAllowedException>)]
    #[test_case(429, check::<TooManyRequestsException>)]
    #[test_case(500, check::<InternalServerErrorException>)]
    fn typed(status: u16, check: fn(u16) -> anyhow::Result<()>) -> anyhow::Result<()> {
        check(status)
    }

    #[test]
    fn not_found() {
        let response = response(
            404,
            json!({"code": "NotFoundException", "Message": "no such app", "RequestID": "abc-123"}),
        );
        let error = translators().translate(response);
        let got = error
            .as_inner::<NotFoundException>()
            .expect("a NotFoundException");
        assert_eq!(got.error_code, "NotFoundException");
        assert_eq!(got.message, "no such app");
        assert_eq!(got.request_id, "abc-123");
        assert_eq!(
            got.body,
            Some(
                MessageBody::new()
                    .set_message("no such app")
                    .set_request_id("abc-123")
            )
        );
        let display = got.to_string();
        assert!(display.contains("404"), "{display}");
        assert!(display.contains("abc-123"), "{display}");
    }

    #[test]
    fn missing_fields() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-errortype", HeaderValue::from_static("BadRequestException"));
        let response = ErrorResponse::from_http(400, headers, Bytes::new());
        let error = translators().translate(response);
        let got = error
            .as_inner::<BadRequestException>()
            .expect("a BadRequestException");
        assert_eq!(got.request_id, MISSING_FIELD);
        assert_eq!(got.message, MISSING_FIELD);
        assert_eq!(got.body, Some(MessageBody::new()));
    }

    #[test]
    fn unknown_code() {
        let response = response(418, json!({"__type": "WeirdException", "message": "odd"}));
        let error = translators().translate(response);
        assert!(error.as_inner::<NotFoundException>().is_none(), "{error:?}");
        let service = error.service_error().expect("a service error");
        assert_eq!(service.code(), "WeirdException");
        assert_eq!(service.message(), Some("odd"));
    }

    #[test]
    fn shared() {
        assert!(std::ptr::eq(translators(), translators()));
    }
}
