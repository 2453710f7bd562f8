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

use crate::Result;
use runtime::config::ClientConfig;
use runtime::operation::Operation;
use runtime::transport::HttpTransport;
use tracing::{Span, field};

/// A client for the campaigns and messaging service.
///
/// The client assembles requests, sends them with the application-provided
/// [HttpTransport], and decodes the responses. Each operation is a method on
/// this type, see the [operations][crate::operations] module for the request
/// types.
///
/// # Example
/// ```
/// # use pinpoint_sdk::client::Pinpoint;
/// # use pinpoint_sdk::operations::GetGcmChannelRequest;
/// # fn sample<T: pinpoint_sdk::HttpTransport>(transport: T) -> pinpoint_sdk::Result<()> {
/// let client = Pinpoint::new(transport);
/// let channel = client.get_gcm_channel(GetGcmChannelRequest::new().set_application_id("my-app"))?;
/// println!("enabled={:?}", channel.enabled);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Pinpoint<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: HttpTransport> Pinpoint<T> {
    /// Creates a client with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(ClientConfig::new(), transport)
    }

    pub fn with_config(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn execute<O: Operation>(&self, operation: &O) -> Result<O::Output> {
        let span = tracing::info_span!(
            "pinpoint",
            operation = O::NAME,
            http.request.method = field::Empty,
            url.full = field::Empty,
            http.response.status_code = field::Empty,
            error_type = field::Empty,
        );
        let _enter = span.enter();
        let result = self.call(operation, &span);
        if let Err(e) = &result {
            span.record("error_type", error_type(e));
            tracing::debug!("{} failed: {e}", O::NAME);
        }
        result
    }

    fn call<O: Operation>(&self, operation: &O, span: &Span) -> Result<O::Output> {
        let request = operation.request()?.build(&self.config)?;
        span.record("http.request.method", request.method().as_str());
        span.record("url.full", request.uri().to_string().as_str());
        if self.config.tracing_enabled() {
            tracing::debug!(
                body = %String::from_utf8_lossy(request.body()),
                "sending request"
            );
        }
        let response = self.transport.send(request)?;
        span.record("http.response.status_code", response.status().as_u16());
        if self.config.tracing_enabled() {
            tracing::debug!(
                body = %String::from_utf8_lossy(response.body()),
                "received response"
            );
        }
        runtime::response::parse::<O>(response, crate::errors::translators())
    }
}

fn error_type(error: &crate::Error) -> &'static str {
    if let Some(e) = error.service_error() {
        return if e.http_status_code().is_some_and(|c| c >= 500) {
            "SERVER_ERROR"
        } else {
            "CLIENT_ERROR"
        };
    }
    match error {
        e if e.is_binding() => "CLIENT_REQUEST_ERROR",
        e if e.is_serialization() => "CLIENT_REQUEST_ERROR",
        e if e.is_deserialization() => "CLIENT_RESPONSE_DECODE_ERROR",
        e if e.is_io() => "CLIENT_CONNECTION_ERROR",
        e if e.is_transport() => "HTTP_ERROR",
        _ => "CLIENT_UNKNOWN_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime::error::Error;
    use test_case::test_case;

    #[test_case(Error::binding("bad"), "CLIENT_REQUEST_ERROR")]
    #[test_case(Error::ser("bad"), "CLIENT_REQUEST_ERROR")]
    #[test_case(Error::deser("bad"), "CLIENT_RESPONSE_DECODE_ERROR")]
    #[test_case(Error::io("bad"), "CLIENT_CONNECTION_ERROR")]
    #[test_case(Error::http(502, http::HeaderMap::new(), bytes::Bytes::new()), "HTTP_ERROR")]
    #[test_case(Error::service(runtime::error::ServiceError::new("X").set_http_status_code(404_u16)), "CLIENT_ERROR")]
    #[test_case(Error::service(runtime::error::ServiceError::new("X").set_http_status_code(503_u16)), "SERVER_ERROR")]
    #[test_case(Error::other("bad"), "CLIENT_UNKNOWN_ERROR")]
    fn error_types(error: Error, want: &str) {
        assert_eq!(error_type(&error), want);
    }
}
