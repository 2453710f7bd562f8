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

use crate::{Result, Scalar, WireReader, WireWriter};
use bytes::Bytes;
use time::OffsetDateTime;

/// Writes values of a given type to a [WireWriter].
///
/// Marshallers are stateless. A single instance is shared by every caller,
/// on every thread.
pub trait Marshaller: Send + Sync {
    type Value;

    /// Writes exactly one wire value.
    fn marshall(&self, value: &Self::Value, writer: &mut dyn WireWriter) -> Result<()>;

    /// Returns true if `value` must not be written as a collection element.
    ///
    /// Lists and maps skip absent elements instead of writing `null`.
    fn is_absent(&self, _value: &Self::Value) -> bool {
        false
    }
}

/// Reads values of a given type from a [WireReader].
pub trait Unmarshaller: Send + Sync {
    type Value;

    /// Consumes exactly one wire value.
    ///
    /// Returns `None` when the wire value is `null`, or when it does not have
    /// the expected structure and the codec tolerates that.
    fn unmarshall(&self, reader: &mut dyn WireReader) -> Result<Option<Self::Value>>;
}

macro_rules! scalar_codec {
    ($(#[$attr:meta])* $name:ident: $ty:ty, $to_scalar:expr, $read:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl Marshaller for $name {
            type Value = $ty;
            fn marshall(&self, value: &$ty, writer: &mut dyn WireWriter) -> Result<()> {
                let to_scalar: fn(&$ty) -> Scalar<'_> = $to_scalar;
                writer.value(to_scalar(value))
            }
        }

        impl Unmarshaller for $name {
            type Value = $ty;
            fn unmarshall(&self, reader: &mut dyn WireReader) -> Result<Option<$ty>> {
                if reader.next_null()? {
                    return Ok(None);
                }
                reader.$read().map(Some)
            }
        }
    };
}

scalar_codec!(
    /// The codec for `String` fields.
    StringCodec: String,
    |v| Scalar::String(v.as_str()),
    next_string
);
scalar_codec!(
    /// The codec for `bool` fields.
    BoolCodec: bool,
    |v| Scalar::Bool(*v),
    next_bool
);
scalar_codec!(
    /// The codec for 32-bit integer fields.
    IntegerCodec: i32,
    |v| Scalar::Integer(i64::from(*v)),
    next_i32
);
scalar_codec!(
    /// The codec for 64-bit integer fields.
    LongCodec: i64,
    |v| Scalar::Integer(*v),
    next_i64
);
scalar_codec!(
    /// The codec for double precision fields.
    DoubleCodec: f64,
    |v| Scalar::Float(*v),
    next_f64
);
scalar_codec!(
    /// The codec for date and time fields.
    ///
    /// The wire representation is epoch seconds, with millisecond precision.
    TimestampCodec: OffsetDateTime,
    |v| Scalar::Timestamp(*v),
    next_timestamp
);
scalar_codec!(
    /// The codec for binary fields, sent as base64 strings.
    BlobCodec: Bytes,
    |v| Scalar::Blob(&v[..]),
    next_blob
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JsonReader, WireError, from_slice, to_string};
    use serde_json::json;
    use test_case::test_case;
    use time::macros::datetime;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn string() -> TestResult {
        assert_eq!(to_string(&StringCodec, &"a\u{1F600}\"b".to_string())?, "\"a\u{1F600}\\\"b\"");
        assert_eq!(from_slice(&StringCodec, br#""abc""#)?, Some("abc".to_string()));
        Ok(())
    }

    #[test]
    fn scalars() -> TestResult {
        assert_eq!(to_string(&BoolCodec, &false)?, "false");
        assert_eq!(to_string(&IntegerCodec, &-42)?, "-42");
        assert_eq!(to_string(&LongCodec, &(1_i64 << 53))?, "9007199254740992");
        assert_eq!(to_string(&DoubleCodec, &2.5)?, "2.5");
        assert_eq!(from_slice(&BoolCodec, b"true")?, Some(true));
        assert_eq!(from_slice(&IntegerCodec, b"\"17\"")?, Some(17));
        assert_eq!(from_slice(&LongCodec, b"9007199254740992")?, Some(1_i64 << 53));
        assert_eq!(from_slice(&DoubleCodec, b"0.125")?, Some(0.125));
        Ok(())
    }

    #[test]
    fn timestamp() -> TestResult {
        let t = datetime!(2023-11-14 22:13:20.123 UTC);
        let json = to_string(&TimestampCodec, &t)?;
        assert_eq!(json, "1700000000.123");
        assert_eq!(from_slice(&TimestampCodec, json.as_bytes())?, Some(t));

        let err = from_slice(&TimestampCodec, b"1e300").unwrap_err();
        assert!(matches!(err, WireError::InvalidValue(_)), "{err:?}");
        Ok(())
    }

    #[test]
    fn blob() -> TestResult {
        let b = Bytes::from_static(b"\x00\x01\xfe\xff");
        let json = to_string(&BlobCodec, &b)?;
        assert_eq!(json, r#""AAH+/w==""#);
        assert_eq!(from_slice(&BlobCodec, json.as_bytes())?, Some(b));
        Ok(())
    }

    #[test_case(&StringCodec)]
    #[test_case(&BoolCodec)]
    #[test_case(&IntegerCodec)]
    #[test_case(&LongCodec)]
    #[test_case(&DoubleCodec)]
    #[test_case(&TimestampCodec)]
    #[test_case(&BlobCodec)]
    fn null_is_absent<U: Unmarshaller>(codec: &U) -> TestResult {
        let mut reader = JsonReader::from_value(json!(null));
        assert!(codec.unmarshall(&mut reader)?.is_none());
        Ok(())
    }

    #[test]
    fn container_is_error() {
        let err = from_slice(&StringCodec, b"{}").unwrap_err();
        assert!(matches!(err, WireError::UnexpectedToken { .. }), "{err:?}");
    }

    #[test]
    fn never_absent() {
        assert!(!StringCodec.is_absent(&String::new()));
        assert!(!IntegerCodec.is_absent(&0));
    }
}
