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

//! Decodes HTTP responses into operation results or errors.

use crate::Result;
use crate::error::Error;
use crate::error::translator::{ErrorResponse, ErrorTranslators};
use crate::operation::Operation;
use bytes::Bytes;
use wire::JsonReader;

/// Converts the HTTP response for `O` into its output or an error.
///
/// Successful responses with an empty body produce `O::Output::default()`.
/// Other status codes are converted by `translators`.
pub fn parse<O: Operation>(
    response: http::Response<Bytes>,
    translators: &ErrorTranslators,
) -> Result<O::Output> {
    let (parts, body) = response.into_parts();
    if !parts.status.is_success() {
        tracing::debug!(
            operation = O::NAME,
            status = parts.status.as_u16(),
            "the service returned an error"
        );
        let response = ErrorResponse::from_http(parts.status.as_u16(), parts.headers, body);
        return Err(translators.translate(response));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::Output::default());
    }
    let mut reader = JsonReader::from_slice(&body).map_err(Error::deser)?;
    O::response(&mut reader).map_err(Error::deser)
}
