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

//! Wire protocol for the Pinpoint Client Libraries for Rust.
//!
//! Every request and response in the service model is a JSON document whose
//! field names are the exact, case-sensitive names from the service
//! definition (`ApplicationId`, `NextToken`, ...). This crate implements the
//! machinery shared by all of them:
//!
//! - [WireWriter] and [WireReader], the event-level JSON collaborators.
//! - [Marshaller] and [Unmarshaller], the protocol every codec implements.
//! - Codecs for scalars, and the [ListCodec], [MapCodec] and [Nullable]
//!   decorators for collections.
//! - [Shape] and [ObjectCodec], which turn a declarative field table into
//!   the object marshalling and unmarshalling algorithms. The [shape!] macro
//!   declares a domain object together with its field table.
//!
//! # Example
//! ```
//! use pinpoint_wire::{BoolCodec, Shape, StringCodec};
//!
//! pinpoint_wire::shape! {
//!     /// Credentials for a channel.
//!     pub struct ChannelRequest = "ChannelRequest" {
//!         pub client_id: String => "ClientId" as StringCodec,
//!         pub client_secret: String => "ClientSecret" as StringCodec,
//!         pub enabled: bool => "Enabled" as BoolCodec,
//!     }
//! }
//!
//! let request = ChannelRequest::new().set_client_id("id1").set_enabled(true);
//! let json = request.to_json()?;
//! assert_eq!(json, r#"{"ClientId":"id1","Enabled":true}"#);
//! let roundtrip = ChannelRequest::from_json(json.as_bytes())?;
//! assert_eq!(roundtrip, Some(request));
//! # Ok::<(), pinpoint_wire::WireError>(())
//! ```

mod codec;
pub use codec::*;
mod composite;
pub use composite::*;
mod error;
pub use error::*;
mod reader;
pub use reader::*;
mod shape;
pub use shape::*;
mod writer;
pub use writer::*;

/// An alias of [std::result::Result] where the error is always [WireError].
pub type Result<T> = std::result::Result<T, WireError>;

/// Serializes `value` to a compact JSON byte vector.
pub fn to_vec<M>(marshaller: &M, value: &M::Value) -> Result<Vec<u8>>
where
    M: Marshaller + ?Sized,
{
    let mut writer = JsonWriter::new(Vec::new());
    marshaller.marshall(value, &mut writer)?;
    writer.finish()
}

/// Serializes `value` to a compact JSON string.
pub fn to_string<M>(marshaller: &M, value: &M::Value) -> Result<String>
where
    M: Marshaller + ?Sized,
{
    let bytes = to_vec(marshaller, value)?;
    // The writer only emits UTF-8.
    String::from_utf8(bytes).map_err(|e| WireError::InvalidValue(e.to_string()))
}

/// Parses `payload` and unmarshalls a single value from it.
pub fn from_slice<U>(unmarshaller: &U, payload: &[u8]) -> Result<Option<U::Value>>
where
    U: Unmarshaller + ?Sized,
{
    let mut reader = JsonReader::from_slice(payload)?;
    unmarshaller.unmarshall(&mut reader)
}

#[doc(hidden)]
pub mod __private {
    pub use pastey::paste;
}
