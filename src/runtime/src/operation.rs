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

//! The contract between the service crates and the runtime.

use crate::Result;
use crate::request::RequestBuilder;
use wire::WireReader;

/// A single service operation.
///
/// Service crates implement this trait for each request type. The runtime
/// uses it to assemble the HTTP request and to decode a successful response.
pub trait Operation {
    /// The decoded result of a successful call.
    type Output: Default;

    /// The name of the operation in the service definition.
    const NAME: &'static str;

    /// Maps the request fields to the path, query, headers and body.
    fn request(&self) -> Result<RequestBuilder>;

    /// Decodes the body of a successful response.
    fn response(reader: &mut dyn WireReader) -> wire::Result<Self::Output>;
}
