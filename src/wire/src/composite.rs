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

use crate::{Marshaller, Result, Token, Unmarshaller, WireReader, WireWriter};
use std::collections::BTreeMap;

/// Decorates an element codec to handle ordered lists.
///
/// Absent elements are skipped when writing, the wire never carries a `null`
/// list element. When reading, a `null` element is dropped unless the element
/// codec is [Nullable].
///
/// # Example
/// ```
/// use pinpoint_wire::{ListCodec, StringCodec, from_slice, to_string};
/// let codec = ListCodec(StringCodec);
/// let got = from_slice(&codec, br#"["a", null, "b"]"#)?;
/// assert_eq!(got, Some(vec!["a".to_string(), "b".to_string()]));
/// assert_eq!(to_string(&codec, &vec!["c".to_string()])?, r#"["c"]"#);
/// # Ok::<(), pinpoint_wire::WireError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListCodec<E>(pub E);

impl<E: Marshaller> Marshaller for ListCodec<E> {
    type Value = Vec<E::Value>;

    fn marshall(&self, value: &Self::Value, writer: &mut dyn WireWriter) -> Result<()> {
        writer.begin_array()?;
        for element in value.iter().filter(|e| !self.0.is_absent(e)) {
            self.0.marshall(element, writer)?;
        }
        writer.end_array()
    }
}

impl<E: Unmarshaller> Unmarshaller for ListCodec<E> {
    type Value = Vec<E::Value>;

    fn unmarshall(&self, reader: &mut dyn WireReader) -> Result<Option<Self::Value>> {
        let token = reader.peek()?;
        if token != Token::BeginArray {
            tracing::trace!(%token, "expected an array, skipping value");
            reader.skip_value()?;
            return Ok(None);
        }
        let mut list = Vec::new();
        reader.begin_array()?;
        while reader.has_next()? {
            if let Some(element) = self.0.unmarshall(reader)? {
                list.push(element);
            }
        }
        reader.end_array()?;
        Ok(Some(list))
    }
}

/// Decorates a value codec to handle string-keyed maps.
///
/// The keys are data, not field names, they are never matched against the
/// fields of any shape. Entries with absent values are skipped when writing
/// and when reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapCodec<E>(pub E);

impl<E: Marshaller> Marshaller for MapCodec<E> {
    type Value = BTreeMap<String, E::Value>;

    fn marshall(&self, value: &Self::Value, writer: &mut dyn WireWriter) -> Result<()> {
        writer.begin_object()?;
        for (key, v) in value.iter().filter(|(_, v)| !self.0.is_absent(v)) {
            writer.name(key)?;
            self.0.marshall(v, writer)?;
        }
        writer.end_object()
    }
}

impl<E: Unmarshaller> Unmarshaller for MapCodec<E> {
    type Value = BTreeMap<String, E::Value>;

    fn unmarshall(&self, reader: &mut dyn WireReader) -> Result<Option<Self::Value>> {
        let token = reader.peek()?;
        if token != Token::BeginObject {
            tracing::trace!(%token, "expected a map, skipping value");
            reader.skip_value()?;
            return Ok(None);
        }
        let mut map = BTreeMap::new();
        reader.begin_object()?;
        while reader.has_next()? {
            let key = reader.next_name()?;
            if let Some(v) = self.0.unmarshall(reader)? {
                map.insert(key, v);
            }
        }
        reader.end_object()?;
        Ok(Some(map))
    }
}

/// Decorates a codec so `None` is a first-class value.
///
/// A `None` is absent, so lists and maps of nullable elements drop it on
/// write. On read, a `null` becomes `Some(None)`, keeping list positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nullable<E>(pub E);

impl<E: Marshaller> Marshaller for Nullable<E> {
    type Value = Option<E::Value>;

    fn marshall(&self, value: &Self::Value, writer: &mut dyn WireWriter) -> Result<()> {
        match value {
            Some(v) => self.0.marshall(v, writer),
            None => writer.null_value(),
        }
    }

    fn is_absent(&self, value: &Self::Value) -> bool {
        match value {
            Some(v) => self.0.is_absent(v),
            None => true,
        }
    }
}

impl<E: Unmarshaller> Unmarshaller for Nullable<E> {
    type Value = Option<E::Value>;

    fn unmarshall(&self, reader: &mut dyn WireReader) -> Result<Option<Self::Value>> {
        if reader.next_null()? {
            return Ok(Some(None));
        }
        Ok(self.0.unmarshall(reader)?.map(Some))
    }
}
