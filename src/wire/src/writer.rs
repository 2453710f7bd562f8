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

use crate::{Result, WireError};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::io::Write;
use time::OffsetDateTime;

/// A scalar value accepted by [WireWriter::value].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    String(&'a str),
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// Written using the writer's native date handling.
    Timestamp(OffsetDateTime),
    /// Written using the writer's native binary handling.
    Blob(&'a [u8]),
}

/// The write side of the wire protocol.
///
/// Marshallers drive a writer with a sequence of events. The writer is
/// responsible for the concrete syntax, including separators, escaping, and
/// the encoding of dates and binary values.
pub trait WireWriter {
    fn begin_object(&mut self) -> Result<()>;
    fn end_object(&mut self) -> Result<()>;
    fn begin_array(&mut self) -> Result<()>;
    fn end_array(&mut self) -> Result<()>;

    /// Writes a field name. Only valid directly inside an object.
    fn name(&mut self, name: &str) -> Result<()>;

    fn value(&mut self, value: Scalar<'_>) -> Result<()>;

    /// Writes a JSON `null`.
    ///
    /// Marshallers never emit `null` for absent fields, this exists for
    /// [Nullable][crate::Nullable] values written outside a collection.
    fn null_value(&mut self) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Scope {
    EmptyDocument,
    NonEmptyDocument,
    EmptyObject,
    NonEmptyObject,
    DanglingName,
    EmptyArray,
    NonEmptyArray,
}

/// A [WireWriter] producing compact JSON.
///
/// Timestamps are written as epoch seconds with millisecond precision, for
/// example `1700000000.123`. Binary values are written as standard, padded,
/// base64 strings.
///
/// # Example
/// ```
/// use pinpoint_wire::{JsonWriter, Scalar, WireWriter};
/// let mut writer = JsonWriter::new(Vec::new());
/// writer.begin_object()?;
/// writer.name("Enabled")?;
/// writer.value(Scalar::Bool(true))?;
/// writer.end_object()?;
/// assert_eq!(writer.finish()?, br#"{"Enabled":true}"#);
/// # Ok::<(), pinpoint_wire::WireError>(())
/// ```
#[derive(Debug)]
pub struct JsonWriter<W> {
    out: W,
    stack: Vec<Scope>,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            stack: vec![Scope::EmptyDocument],
        }
    }

    /// Verifies the document is complete, flushes, and returns the sink.
    pub fn finish(mut self) -> Result<W> {
        if self.stack != [Scope::NonEmptyDocument] {
            return Err(WireError::State("the document is incomplete"));
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn before_value(&mut self) -> Result<()> {
        let top = self
            .stack
            .last_mut()
            .ok_or(WireError::State("the document is already complete"))?;
        match *top {
            Scope::EmptyDocument => *top = Scope::NonEmptyDocument,
            Scope::EmptyArray => *top = Scope::NonEmptyArray,
            Scope::NonEmptyArray => self.out.write_all(b",")?,
            Scope::DanglingName => *top = Scope::NonEmptyObject,
            Scope::NonEmptyDocument => {
                return Err(WireError::State(
                    "a document holds a single top-level value",
                ));
            }
            Scope::EmptyObject | Scope::NonEmptyObject => {
                return Err(WireError::State("a value inside an object needs a name"));
            }
        }
        Ok(())
    }

    fn open(&mut self, scope: Scope, bracket: &[u8]) -> Result<()> {
        self.before_value()?;
        self.stack.push(scope);
        self.out.write_all(bracket)?;
        Ok(())
    }

    fn close(&mut self, empty: Scope, non_empty: Scope, bracket: &[u8]) -> Result<()> {
        match self.stack.last() {
            Some(s) if *s == empty || *s == non_empty => {}
            _ => return Err(WireError::State("unbalanced end of object or array")),
        }
        self.stack.pop();
        self.out.write_all(bracket)?;
        Ok(())
    }

    fn write_str(&mut self, value: &str) -> Result<()> {
        serde_json::to_writer(&mut self.out, value).map_err(from_json_error)
    }
}

impl<W: Write> WireWriter for JsonWriter<W> {
    fn begin_object(&mut self) -> Result<()> {
        self.open(Scope::EmptyObject, b"{")
    }

    fn end_object(&mut self) -> Result<()> {
        self.close(Scope::EmptyObject, Scope::NonEmptyObject, b"}")
    }

    fn begin_array(&mut self) -> Result<()> {
        self.open(Scope::EmptyArray, b"[")
    }

    fn end_array(&mut self) -> Result<()> {
        self.close(Scope::EmptyArray, Scope::NonEmptyArray, b"]")
    }

    fn name(&mut self, name: &str) -> Result<()> {
        let top = self
            .stack
            .last_mut()
            .ok_or(WireError::State("the document is already complete"))?;
        match *top {
            Scope::EmptyObject => {}
            Scope::NonEmptyObject => self.out.write_all(b",")?,
            _ => return Err(WireError::State("field names are only valid in objects")),
        }
        *top = Scope::DanglingName;
        self.write_str(name)?;
        self.out.write_all(b":")?;
        Ok(())
    }

    fn value(&mut self, value: Scalar<'_>) -> Result<()> {
        if let Scalar::Float(f) = value {
            if !f.is_finite() {
                return Err(WireError::InvalidValue(format!(
                    "{f} cannot be represented in JSON"
                )));
            }
        }
        self.before_value()?;
        match value {
            Scalar::String(s) => self.write_str(s),
            Scalar::Bool(b) => Ok(self.out.write_all(if b { &b"true"[..] } else { b"false" })?),
            Scalar::Integer(i) => Ok(write!(self.out, "{i}")?),
            Scalar::Float(f) => serde_json::to_writer(&mut self.out, &f).map_err(from_json_error),
            Scalar::Timestamp(t) => Ok(self.out.write_all(epoch_seconds(t).as_bytes())?),
            Scalar::Blob(b) => self.write_str(&STANDARD.encode(b)),
        }
    }

    fn null_value(&mut self) -> Result<()> {
        self.before_value()?;
        Ok(self.out.write_all(b"null")?)
    }
}

fn from_json_error(e: serde_json::Error) -> WireError {
    if e.is_io() {
        return WireError::Io(e.into());
    }
    WireError::InvalidValue(e.to_string())
}

// Truncates to millisecond precision.
fn epoch_seconds(t: OffsetDateTime) -> String {
    let millis = t.unix_timestamp_nanos() / 1_000_000;
    let sign = if millis < 0 { "-" } else { "" };
    let millis = millis.unsigned_abs();
    format!("{sign}{}.{:03}", millis / 1000, millis % 1000)
}
