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
use bytes::Bytes;

/// Sends HTTP requests on behalf of a client.
///
/// The runtime does not ship an implementation. Applications provide one
/// backed by their HTTP stack of choice.
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Sends `request` and returns the complete response.
    ///
    /// Implementations return [Error::io][crate::error::Error::io] for
    /// connection problems. Responses with error status codes are returned
    /// as `Ok`, the runtime translates them.
    fn send(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

