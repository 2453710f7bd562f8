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
use crate::config::ClientConfig;
use crate::error::{BindingError, Error};
use crate::query_parameter::QueryParameter;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use http::{HeaderMap, Method};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use wire::Marshaller;

/// The content type of every request.
pub const CONTENT_TYPE_JSON: &str = "application/x-amz-json-1.0";

// Path segments and query values escape everything but RFC 3986 unreserved
// characters. Spaces become `%20`, never `+`.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Builds the HTTP request for an operation.
///
/// # Example
/// ```
/// use pinpoint_runtime::config::ClientConfig;
/// use pinpoint_runtime::request::RequestBuilder;
/// let request = RequestBuilder::new(http::Method::GET, "/v1/apps/{application-id}/segments")
///     .path_param("application-id", Some("my app"))
///     .query("page-size", &Some("10".to_string()))?
///     .build(&ClientConfig::new())?;
/// assert_eq!(
///     request.uri().to_string(),
///     "https://pinpoint.us-east-1.amazonaws.com/v1/apps/my%20app/segments?page-size=10"
/// );
/// # Ok::<(), pinpoint_runtime::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Starts a request from a path template with `{name}` placeholders.
    pub fn new(method: Method, template: &str) -> Self {
        Self {
            method,
            path: template.to_string(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path, with any placeholders substituted so far.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Substitutes the `{name}` placeholder with the percent-encoded value.
    ///
    /// Absent values are substituted with the empty string, the service
    /// rejects such requests.
    pub fn path_param(mut self, name: &str, value: Option<&str>) -> Self {
        let encoded = value
            .map(|v| utf8_percent_encode(v, UNRESERVED).to_string())
            .unwrap_or_default();
        self.path = self.path.replace(&format!("{{{name}}}"), &encoded);
        self
    }

    /// Adds a query parameter. Absent values are skipped.
    pub fn query<T: QueryParameter>(mut self, name: &str, value: &T) -> Result<Self> {
        value.append_to(name, &mut self.query).map_err(|source| {
            Error::binding(BindingError::Query {
                name: name.to_string(),
                source,
            })
        })?;
        Ok(self)
    }

    /// Adds a header.
    pub fn header(mut self, name: &'static str, value: &str) -> Result<Self> {
        let value = HeaderValue::from_str(value)
            .map_err(|source| Error::binding(BindingError::Header { name, source }))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Sets the body to the JSON representation of `value`.
    ///
    /// An absent value produces an empty body.
    pub fn json_body<M>(mut self, marshaller: &M, value: Option<&M::Value>) -> Result<Self>
    where
        M: Marshaller + ?Sized,
    {
        let payload = match value {
            Some(v) => wire::to_vec(marshaller, v).map_err(Error::ser)?,
            None => Vec::new(),
        };
        self.body = Some(Bytes::from(payload));
        Ok(self)
    }

    /// Creates the HTTP request, relative to the configured endpoint.
    pub fn build(self, config: &ClientConfig) -> Result<http::Request<Bytes>> {
        let endpoint = config.endpoint();
        let invalid = |problem: String| {
            Error::binding(BindingError::Endpoint {
                endpoint: endpoint.clone(),
                problem,
            })
        };
        let mut url = url::Url::parse(&endpoint).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("the URL cannot be a base".to_string()));
        }
        let path = format!("{}{}", url.path().trim_end_matches('/'), self.path);
        url.set_path(&path);
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}={}",
                        utf8_percent_encode(k, UNRESERVED),
                        utf8_percent_encode(v, UNRESERVED)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        let mut builder = http::Request::builder()
            .method(self.method)
            .uri(url.as_str())
            .header(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        builder = builder.header(USER_AGENT, config.user_agent());
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        builder
            .body(self.body.unwrap_or_default())
            .map_err(|e| Error::binding(BindingError::Request(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use wire::{BoolCodec, StringCodec};
    type TestResult = anyhow::Result<()>;

    #[test]
    fn path_params() {
        let builder = RequestBuilder::new(
            Method::GET,
            "/v1/apps/{application-id}/campaigns/{campaign-id}/versions/{version}",
        )
        .path_param("application-id", Some("app-1"))
        .path_param("campaign-id", Some("a/b c"))
        .path_param("version", None);
        assert_eq!(builder.path(), "/v1/apps/app-1/campaigns/a%2Fb%20c/versions/");
        assert_eq!(builder.method(), Method::GET);
    }

    #[test]
    fn build() -> TestResult {
        let request = RequestBuilder::new(Method::PUT, "/v1/apps/{application-id}/settings")
            .path_param("application-id", Some("app-1"))
            .query("token", &Some("t 1".to_string()))?
            .query("page-size", &None::<String>)?
            .header("x-custom", "value")?
            .json_body(&BoolCodec, Some(&true))?
            .build(&ClientConfig::new().set_user_agent("app/1"))?;
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(
            request.uri().to_string(),
            "https://pinpoint.us-east-1.amazonaws.com/v1/apps/app-1/settings?token=t%201"
        );
        let headers = request.headers();
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some(CONTENT_TYPE_JSON)
        );
        assert_eq!(
            headers.get(USER_AGENT).and_then(|v| v.to_str().ok()),
            Some(format!("app/1 {}", crate::config::DEFAULT_USER_AGENT).as_str())
        );
        assert_eq!(
            headers.get("x-custom").and_then(|v| v.to_str().ok()),
            Some("value")
        );
        assert_eq!(request.body(), &Bytes::from_static(b"true"));
        Ok(())
    }

    #[test_case("t 1", "t%201")]
    #[test_case("a+b", "a%2Bb")]
    #[test_case("x=1&y", "x%3D1%26y")]
    #[test_case("caf\u{e9}", "caf%C3%A9")]
    #[test_case("-_.~", "-_.~")]
    fn query_values(value: &str, want: &str) -> TestResult {
        let request = RequestBuilder::new(Method::GET, "/v1/apps")
            .query("token", &Some(value.to_string()))?
            .query("page-size", &Some(5))?
            .build(&ClientConfig::new().set_endpoint("http://localhost"))?;
        assert_eq!(
            request.uri().to_string(),
            format!("http://localhost/v1/apps?token={want}&page-size=5")
        );
        Ok(())
    }

    #[test]
    fn absent_body() -> TestResult {
        let builder = RequestBuilder::new(Method::POST, "/v1/apps")
            .json_body(&StringCodec, None)?;
        assert_eq!(builder.body(), Some(&Bytes::new()));
        let request = RequestBuilder::new(Method::GET, "/v1/apps").build(&ClientConfig::new())?;
        assert!(request.body().is_empty());
        Ok(())
    }

    #[test]
    fn body_serialization_error() {
        let err = RequestBuilder::new(Method::POST, "/v1/apps")
            .json_body(&wire::DoubleCodec, Some(&f64::NAN))
            .unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[test_case("http://localhost:8080", "http://localhost:8080/v1/apps")]
    #[test_case("http://localhost:8080/", "http://localhost:8080/v1/apps")]
    #[test_case("https://proxy.example.com/pinpoint/", "https://proxy.example.com/pinpoint/v1/apps")]
    fn endpoints(endpoint: &str, want: &str) -> TestResult {
        let config = ClientConfig::new().set_endpoint(endpoint);
        let request = RequestBuilder::new(Method::GET, "/v1/apps").build(&config)?;
        assert_eq!(request.uri().to_string(), want);
        Ok(())
    }

    #[test_case("not a url")]
    #[test_case("mailto:someone@example.com")]
    fn bad_endpoint(endpoint: &str) {
        let config = ClientConfig::new().set_endpoint(endpoint);
        let err = RequestBuilder::new(Method::GET, "/v1/apps")
            .build(&config)
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains(endpoint), "{err}");
    }

    #[test]
    fn bad_header() {
        let err = RequestBuilder::new(Method::GET, "/v1/apps")
            .header("x-custom", "bad\r\nvalue")
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }
}
