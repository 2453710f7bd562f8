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

//! The request and response objects of the service.
//!
//! Every type is declared with [wire::shape!], so it has a shared
//! [ObjectCodec][wire::ObjectCodec] and the `to_json` / `from_json` helpers
//! of [Shape][wire::Shape].

mod campaigns;
pub use campaigns::*;
mod channels;
pub use channels::*;
mod endpoints;
pub use endpoints::*;
mod import_jobs;
pub use import_jobs::*;
mod journeys;
pub use journeys::*;
mod messages;
pub use messages::*;
mod segments;
pub use segments::*;
mod settings;
pub use settings::*;
