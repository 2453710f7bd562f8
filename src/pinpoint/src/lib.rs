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

//! Pinpoint Client Libraries for Rust - Campaigns and Messaging
//!
//! This crate contains the types and functions to manage the campaigns,
//! segments, endpoints, channels and journeys of a customer engagement
//! application. Most applications will use the [Pinpoint][client::Pinpoint]
//! client, and the request types in [operations].
//!
//! The client does not include an HTTP stack. Applications provide an
//! implementation of [HttpTransport].
//!
//! Failed calls return an [Error]. Service errors with a known error code
//! carry one of the types in [errors].

pub use runtime::Result;
pub use runtime::config::ClientConfig;
pub use runtime::error::Error;
pub use runtime::transport::HttpTransport;

/// The client for the service.
pub mod client;

pub mod errors;

pub mod model;

pub mod operations;
