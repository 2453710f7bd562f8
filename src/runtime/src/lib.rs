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

//! Pinpoint Client Libraries for Rust - Runtime.
//!
//! This crate contains the types and functions shared by the service client:
//! the error model, the translation of service error responses into typed
//! errors, request building, client configuration, and the transport seam.
//! Unless otherwise noted, these are **not** intended for general use.

/// The error types returned by the client library.
pub mod error;

/// Client configuration.
pub mod config;

/// The contract between a request type and the client.
pub mod operation;

/// Build HTTP requests from operation inputs.
pub mod request;

/// Render operation inputs as query string pairs.
pub mod query_parameter;

/// Convert HTTP responses into operation outputs or errors.
pub mod response;

/// The HTTP transport seam.
pub mod transport;

/// An alias of [std::result::Result] where the error is always [Error][crate::error::Error].
pub type Result<T> = std::result::Result<T, crate::error::Error>;
