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
use std::collections::HashMap;
use std::marker::PhantomData;

/// A domain object with a wire representation.
///
/// Implementations are generated by the [shape!][crate::shape] macro. Each
/// type owns a single [ObjectCodec], created on first use and shared for the
/// life of the program.
pub trait Shape: Default + Send + Sync + 'static {
    /// The name of the shape in the service definition.
    const NAME: &'static str;

    /// Returns the codec for this type. Every call returns the same instance.
    fn codec() -> &'static ObjectCodec<Self>;

    /// Serializes the object to a JSON string.
    fn to_json(&self) -> Result<String> {
        crate::to_string(Self::codec(), self)
    }

    /// Serializes the object to JSON bytes.
    fn to_json_bytes(&self) -> Result<Vec<u8>> {
        crate::to_vec(Self::codec(), self)
    }

    /// Deserializes an object from JSON.
    ///
    /// Returns `None` if the payload is valid JSON but not an object.
    fn from_json(payload: &[u8]) -> Result<Option<Self>> {
        crate::from_slice(Self::codec(), payload)
    }
}

trait FieldHandler<T> {
    fn write(&self, name: &'static str, object: &T, writer: &mut dyn WireWriter) -> Result<()>;
    fn read(&self, object: &mut T, reader: &mut dyn WireReader) -> Result<()>;
}

struct Accessor<T, C: Marshaller> {
    codec: C,
    get: fn(&T) -> Option<&<C as Marshaller>::Value>,
    set: fn(&mut T, Option<<C as Marshaller>::Value>),
}

impl<T, C> FieldHandler<T> for Accessor<T, C>
where
    C: Marshaller + Unmarshaller<Value = <C as Marshaller>::Value>,
{
    fn write(&self, name: &'static str, object: &T, writer: &mut dyn WireWriter) -> Result<()> {
        match (self.get)(object) {
            Some(v) if !self.codec.is_absent(v) => {
                writer.name(name)?;
                self.codec.marshall(v, writer)
            }
            _ => Ok(()),
        }
    }

    fn read(&self, object: &mut T, reader: &mut dyn WireReader) -> Result<()> {
        let value = self.codec.unmarshall(reader)?;
        (self.set)(object, value);
        Ok(())
    }
}

/// One entry in the field table of a [Shape].
///
/// A field binds the exact, case-sensitive, wire name to a codec and to the
/// accessors for the corresponding struct member.
pub struct Field<T> {
    name: &'static str,
    handler: Box<dyn FieldHandler<T> + Send + Sync>,
}

impl<T: 'static> Field<T> {
    pub fn new<C>(
        name: &'static str,
        codec: C,
        get: fn(&T) -> Option<&<C as Marshaller>::Value>,
        set: fn(&mut T, Option<<C as Marshaller>::Value>),
    ) -> Self
    where
        C: Marshaller + Unmarshaller<Value = <C as Marshaller>::Value> + 'static,
    {
        Self {
            name,
            handler: Box::new(Accessor { codec, get, set }),
        }
    }
}

impl<T> Field<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// The marshaller and unmarshaller for a [Shape].
///
/// Marshalling writes an object containing each present field, in
/// declaration order. Absent fields are omitted, never written as `null`.
///
/// Unmarshalling starts from `T::default()` and dispatches each field by its
/// exact name. Unknown names are skipped. A value that is not an object
/// (`null`, a scalar, or an array) is skipped and produces `None`.
pub struct ObjectCodec<T> {
    shape: &'static str,
    fields: Vec<Field<T>>,
    index: HashMap<&'static str, usize>,
}

impl<T> ObjectCodec<T> {
    pub fn new(shape: &'static str, fields: Vec<Field<T>>) -> Self {
        let mut index = HashMap::with_capacity(fields.len());
        for (i, f) in fields.iter().enumerate() {
            index.entry(f.name).or_insert(i);
        }
        Self {
            shape,
            fields,
            index,
        }
    }

    /// The wire names of the fields, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(Field::name)
    }
}

impl<T> std::fmt::Debug for ObjectCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectCodec")
            .field("shape", &self.shape)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<T: Send + Sync> Marshaller for ObjectCodec<T> {
    type Value = T;

    fn marshall(&self, value: &T, writer: &mut dyn WireWriter) -> Result<()> {
        writer.begin_object()?;
        for field in &self.fields {
            field.handler.write(field.name, value, writer)?;
        }
        writer.end_object()
    }
}

impl<T: Default + Send + Sync> Unmarshaller for ObjectCodec<T> {
    type Value = T;

    fn unmarshall(&self, reader: &mut dyn WireReader) -> Result<Option<T>> {
        let token = reader.peek()?;
        if token != Token::BeginObject {
            tracing::trace!(shape = self.shape, %token, "expected an object, skipping value");
            reader.skip_value()?;
            return Ok(None);
        }
        let mut object = T::default();
        reader.begin_object()?;
        while reader.has_next()? {
            let name = reader.next_name()?;
            match self.index.get(name.as_str()) {
                Some(&i) => self.fields[i].handler.read(&mut object, reader)?,
                None => {
                    tracing::trace!(shape = self.shape, field = %name, "skipping unknown field");
                    reader.skip_value()?;
                }
            }
        }
        reader.end_object()?;
        Ok(Some(object))
    }
}

/// The codec for a nested [Shape], delegating to its shared [ObjectCodec].
pub struct Nested<T>(PhantomData<fn() -> T>);

impl<T> Nested<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Nested<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Nested<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nested<T> {}

impl<T> std::fmt::Debug for Nested<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Nested")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

impl<T: Shape> Marshaller for Nested<T> {
    type Value = T;

    fn marshall(&self, value: &T, writer: &mut dyn WireWriter) -> Result<()> {
        T::codec().marshall(value, writer)
    }
}

impl<T: Shape> Unmarshaller for Nested<T> {
    type Value = T;

    fn unmarshall(&self, reader: &mut dyn WireReader) -> Result<Option<T>> {
        T::codec().unmarshall(reader)
    }
}

/// Declares a domain object and implements [Shape] for it.
///
/// Every field is optional: the generated struct holds an `Option<_>` per
/// field, and derives `Default` with all fields absent. Each field names its
/// wire name and its codec. The macro also generates `set_*` and
/// `set_or_clear_*` builder methods.
///
/// # Example
/// ```
/// use pinpoint_wire::{IntegerCodec, ListCodec, Shape, StringCodec};
///
/// pinpoint_wire::shape! {
///     pub struct Page = "Page" {
///         pub item: Vec<String> => "Item" as ListCodec(StringCodec),
///         pub next_token: String => "NextToken" as StringCodec,
///         pub size: i32 => "Size" as IntegerCodec,
///     }
/// }
///
/// let page = Page::new().set_item(["a", "b"].map(String::from)).set_or_clear_size(None::<i32>);
/// assert_eq!(page.to_json()?, r#"{"Item":["a","b"]}"#);
/// # Ok::<(), pinpoint_wire::WireError>(())
/// ```
#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $wire:literal {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty => $fwire:literal as $codec:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[non_exhaustive]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: std::option::Option<$ty>,
            )*
        }

        impl $name {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            $crate::__private::paste! {
                $(
                    /// Sets the value of the field.
                    pub fn [<set_ $field>]<V>(mut self, v: V) -> Self
                    where
                        V: std::convert::Into<$ty>,
                    {
                        self.$field = std::option::Option::Some(v.into());
                        self
                    }

                    /// Sets or clears the value of the field.
                    pub fn [<set_or_clear_ $field>]<V>(mut self, v: std::option::Option<V>) -> Self
                    where
                        V: std::convert::Into<$ty>,
                    {
                        self.$field = v.map(std::convert::Into::into);
                        self
                    }
                )*
            }
        }

        impl $crate::Shape for $name {
            const NAME: &'static str = $wire;

            fn codec() -> &'static $crate::ObjectCodec<Self> {
                static CODEC: std::sync::LazyLock<$crate::ObjectCodec<$name>> =
                    std::sync::LazyLock::new(|| {
                        $crate::ObjectCodec::new(
                            $wire,
                            vec![
                                $(
                                    $crate::Field::<$name>::new(
                                        $fwire,
                                        $codec,
                                        |o| o.$field.as_ref(),
                                        |o, v| o.$field = v,
                                    ),
                                )*
                            ],
                        )
                    });
                &CODEC
            }
        }
    };
}
