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

mod binding;
mod core_error;
mod service_error;
pub use binding::*;
pub use core_error::*;
pub use service_error::*;

/// Map service error responses to typed errors.
///
/// Each service registers one translator per typed error. A response whose
/// code matches none of them becomes a generic [ServiceError].
pub mod translator;

/// The boxed error type used for error sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
