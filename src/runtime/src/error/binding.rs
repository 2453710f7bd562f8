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

/// A failure to map an operation input to a HTTP request.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum BindingError {
    /// The configured endpoint is not a valid base URL.
    #[error("the endpoint `{endpoint}` is not a valid base URL: {problem}")]
    Endpoint {
        endpoint: String,
        problem: String,
    },

    /// A header value contains characters not allowed in HTTP headers.
    #[error("the value for header `{name}` is invalid")]
    Header {
        name: &'static str,
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    /// A query parameter cannot be formatted.
    #[error("cannot format the query parameter `{name}`")]
    Query {
        name: String,
        #[source]
        source: crate::query_parameter::QueryValueError,
    },

    /// The assembled request is not a valid HTTP request.
    #[error("cannot assemble the HTTP request")]
    Request(#[source] http::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = BindingError::Endpoint {
            endpoint: "not a url".to_string(),
            problem: "relative URL without a base".to_string(),
        };
        let got = e.to_string();
        assert!(got.contains("not a url"), "{got}");
        assert!(got.contains("relative URL"), "{got}");

        let source = http::HeaderValue::from_str("bad\nvalue").unwrap_err();
        let e = BindingError::Header {
            name: "x-custom",
            source,
        };
        assert!(e.to_string().contains("x-custom"), "{e}");
        assert!(std::error::Error::source(&e).is_some(), "{e:?}");
    }
}
