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

const LOGGING_VAR: &str = "PINPOINT_RUST_LOGGING";
const DEFAULT_REGION: &str = "us-east-1";

/// The default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("pinpoint-rust/", env!("CARGO_PKG_VERSION"));

/// Configure a client.
///
/// A client for the service is configured with a default endpoint, derived
/// from the region. The defaults should work for most applications. Some
/// applications may need to override the endpoint, e.g. to use a proxy or a
/// local test server.
///
/// # Example
/// ```
/// use pinpoint_runtime::config::ClientConfig;
/// let config = ClientConfig::new().set_region("eu-west-1");
/// assert_eq!(config.endpoint(), "https://pinpoint.eu-west-1.amazonaws.com");
/// let config = config.set_endpoint("http://localhost:8080");
/// assert_eq!(config.endpoint(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    endpoint: Option<String>,
    region: Option<String>,
    user_agent: Option<String>,
    tracing: bool,
}

impl ClientConfig {
    /// Returns a default [ClientConfig].
    pub fn new() -> Self {
        Self::default()
    }

    /// The endpoint, either the configured override or the regional default.
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(e) => e.clone(),
            None => format!("https://pinpoint.{}.amazonaws.com", self.region()),
        }
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// The `User-Agent` header value, including any application prefix.
    pub fn user_agent(&self) -> String {
        match &self.user_agent {
            Some(prefix) => format!("{prefix} {DEFAULT_USER_AGENT}"),
            None => DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Returns true if request and response payloads are logged.
    ///
    /// Enabled via [enable_tracing][ClientConfig::enable_tracing], or by
    /// setting the `PINPOINT_RUST_LOGGING` environment variable to `true`.
    pub fn tracing_enabled(&self) -> bool {
        if self.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    /// Sets an endpoint that overrides the default endpoint for the service.
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the region used to compute the default endpoint.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets a prefix for the `User-Agent` header, identifying the application.
    pub fn set_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent = Some(v.into());
        self
    }

    /// Enables tracing.
    pub fn enable_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Disables tracing.
    pub fn disable_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }
}
