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
use bytes::Bytes;
use serde_json::Value;
use std::iter::Peekable;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// The kind of the next element in a wire document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    Name,
    String,
    Number,
    Bool,
    Null,
    EndDocument,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BeginObject => "an object",
            Self::EndObject => "the end of an object",
            Self::BeginArray => "an array",
            Self::EndArray => "the end of an array",
            Self::Name => "a field name",
            Self::String => "a string",
            Self::Number => "a number",
            Self::Bool => "a boolean",
            Self::Null => "null",
            Self::EndDocument => "the end of the document",
        };
        f.write_str(s)
    }
}

/// The read side of the wire protocol.
///
/// A reader is a cursor over a single document. Unmarshallers use
/// [peek][WireReader::peek] to decide how to proceed, and the typed accessors
/// to consume scalars. The accessors are lenient with scalar spellings: a
/// numeric field sent as a JSON string is accepted, and so is a string field
/// sent as a number or boolean.
pub trait WireReader {
    /// Returns the kind of the next element without consuming it.
    fn peek(&mut self) -> Result<Token>;

    /// Returns true if the next element is an object or an array.
    fn is_container(&mut self) -> Result<bool> {
        Ok(matches!(self.peek()?, Token::BeginObject | Token::BeginArray))
    }

    /// Consumes the next element if it is `null`.
    fn next_null(&mut self) -> Result<bool> {
        if self.peek()? != Token::Null {
            return Ok(false);
        }
        self.skip_value()?;
        Ok(true)
    }

    fn begin_object(&mut self) -> Result<()>;
    fn end_object(&mut self) -> Result<()>;
    fn begin_array(&mut self) -> Result<()>;
    fn end_array(&mut self) -> Result<()>;

    /// Returns true if the current object or array has more elements.
    fn has_next(&mut self) -> Result<bool>;

    /// Consumes a field name. The reader is then positioned at its value.
    fn next_name(&mut self) -> Result<String>;

    /// Consumes the next value, including any nested objects or arrays.
    fn skip_value(&mut self) -> Result<()>;

    fn next_string(&mut self) -> Result<String>;
    fn next_bool(&mut self) -> Result<bool>;
    fn next_i32(&mut self) -> Result<i32>;
    fn next_i64(&mut self) -> Result<i64>;
    fn next_f64(&mut self) -> Result<f64>;

    /// Consumes a timestamp, either as epoch seconds or as an RFC 3339 string.
    fn next_timestamp(&mut self) -> Result<OffsetDateTime>;

    /// Consumes a base64-encoded binary value.
    fn next_blob(&mut self) -> Result<Bytes>;
}

enum Frame {
    Object(Peekable<serde_json::map::IntoIter>),
    Array(std::vec::IntoIter<Value>),
}

/// A [WireReader] over a parsed JSON document.
pub struct JsonReader {
    stack: Vec<Frame>,
    // The value at the cursor, if it has been reached but not consumed.
    pending: Option<Value>,
}

impl std::fmt::Debug for JsonReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonReader")
            .field("depth", &self.stack.len())
            .field("pending", &self.pending)
            .finish()
    }
}

impl JsonReader {
    /// Parses `payload`, failing with [WireError::Syntax] if it is not JSON.
    pub fn from_slice(payload: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice::<Value>(payload).map_err(WireError::Syntax)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Self {
        Self {
            stack: Vec::new(),
            pending: Some(value),
        }
    }

    fn take(&mut self, expected: &'static str) -> Result<Value> {
        match self.peek()? {
            t @ (Token::Name | Token::EndObject | Token::EndArray | Token::EndDocument) => {
                Err(WireError::unexpected(expected, t))
            }
            _ => self
                .pending
                .take()
                .ok_or(WireError::State("the reader has no pending value")),
        }
    }
}

fn token_of(value: &Value) -> Token {
    match value {
        Value::Null => Token::Null,
        Value::Bool(_) => Token::Bool,
        Value::Number(_) => Token::Number,
        Value::String(_) => Token::String,
        Value::Array(_) => Token::BeginArray,
        Value::Object(_) => Token::BeginObject,
    }
}

fn invalid<E: std::fmt::Display>(what: &str, e: E) -> WireError {
    WireError::InvalidValue(format!("cannot convert to {what}: {e}"))
}

impl WireReader for JsonReader {
    fn peek(&mut self) -> Result<Token> {
        if let Some(v) = &self.pending {
            return Ok(token_of(v));
        }
        let token = match self.stack.last_mut() {
            None => Token::EndDocument,
            Some(Frame::Object(it)) => {
                if it.peek().is_some() {
                    Token::Name
                } else {
                    Token::EndObject
                }
            }
            Some(Frame::Array(it)) => match it.next() {
                None => Token::EndArray,
                Some(v) => {
                    let t = token_of(&v);
                    self.pending = Some(v);
                    t
                }
            },
        };
        Ok(token)
    }

    fn begin_object(&mut self) -> Result<()> {
        match self.take("an object")? {
            Value::Object(map) => {
                self.stack.push(Frame::Object(map.into_iter().peekable()));
                Ok(())
            }
            v => Err(WireError::unexpected("an object", token_of(&v))),
        }
    }

    fn end_object(&mut self) -> Result<()> {
        if self.pending.is_some() {
            return Err(WireError::State("a field value was not consumed"));
        }
        match self.stack.last_mut() {
            Some(Frame::Object(it)) => {
                if it.peek().is_some() {
                    return Err(WireError::State("the object has unread fields"));
                }
            }
            _ => return Err(WireError::State("end_object called outside an object")),
        }
        self.stack.pop();
        Ok(())
    }

    fn begin_array(&mut self) -> Result<()> {
        match self.take("an array")? {
            Value::Array(list) => {
                self.stack.push(Frame::Array(list.into_iter()));
                Ok(())
            }
            v => Err(WireError::unexpected("an array", token_of(&v))),
        }
    }

    fn end_array(&mut self) -> Result<()> {
        if self.pending.is_some() {
            return Err(WireError::State("the array has unread elements"));
        }
        match self.stack.last() {
            Some(Frame::Array(it)) if it.as_slice().is_empty() => {
                self.stack.pop();
                Ok(())
            }
            Some(Frame::Array(_)) => Err(WireError::State("the array has unread elements")),
            _ => Err(WireError::State("end_array called outside an array")),
        }
    }

    fn has_next(&mut self) -> Result<bool> {
        Ok(!matches!(
            self.peek()?,
            Token::EndObject | Token::EndArray | Token::EndDocument
        ))
    }

    fn next_name(&mut self) -> Result<String> {
        if self.pending.is_some() {
            return Err(WireError::State("a field value was not consumed"));
        }
        if let Some(Frame::Object(it)) = self.stack.last_mut() {
            let (name, value) = it
                .next()
                .ok_or(WireError::unexpected("a field name", Token::EndObject))?;
            self.pending = Some(value);
            return Ok(name);
        }
        let found = self.peek()?;
        Err(WireError::unexpected("a field name", found))
    }

    fn skip_value(&mut self) -> Result<()> {
        self.take("a value").map(|_| ())
    }

    fn next_string(&mut self) -> Result<String> {
        match self.take("a string")? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            v => Err(WireError::unexpected("a string", token_of(&v))),
        }
    }

    fn next_bool(&mut self) -> Result<bool> {
        match self.take("a boolean")? {
            Value::Bool(b) => Ok(b),
            Value::String(s) => s.parse::<bool>().map_err(|e| invalid("bool", e)),
            v => Err(WireError::unexpected("a boolean", token_of(&v))),
        }
    }

    fn next_i32(&mut self) -> Result<i32> {
        let v = self.next_i64()?;
        i32::try_from(v).map_err(|e| invalid("i32", e))
    }

    fn next_i64(&mut self) -> Result<i64> {
        match self.take("a number")? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(i);
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        Ok(f as i64)
                    }
                    _ => Err(invalid("i64", n)),
                }
            }
            Value::String(s) => s.parse::<i64>().map_err(|e| invalid("i64", e)),
            v => Err(WireError::unexpected("a number", token_of(&v))),
        }
    }

    fn next_f64(&mut self) -> Result<f64> {
        match self.take("a number")? {
            Value::Number(n) => n.as_f64().ok_or_else(|| invalid("f64", &n)),
            Value::String(s) => s.parse::<f64>().map_err(|e| invalid("f64", e)),
            v => Err(WireError::unexpected("a number", token_of(&v))),
        }
    }

    fn next_timestamp(&mut self) -> Result<OffsetDateTime> {
        match self.take("a timestamp")? {
            Value::Number(n) => {
                let seconds = n.as_f64().ok_or_else(|| invalid("timestamp", &n))?;
                from_epoch_seconds(seconds)
            }
            Value::String(s) => match s.parse::<f64>() {
                Ok(seconds) => from_epoch_seconds(seconds),
                Err(_) => {
                    OffsetDateTime::parse(&s, &Rfc3339).map_err(|e| invalid("timestamp", e))
                }
            },
            v => Err(WireError::unexpected("a timestamp", token_of(&v))),
        }
    }

    fn next_blob(&mut self) -> Result<Bytes> {
        match self.take("a base64 string")? {
            Value::String(s) => STANDARD
                .decode(s.as_bytes())
                .map(Bytes::from)
                .map_err(|e| invalid("bytes", e)),
            v => Err(WireError::unexpected("a base64 string", token_of(&v))),
        }
    }
}

fn from_epoch_seconds(seconds: f64) -> Result<OffsetDateTime> {
    if !seconds.is_finite() {
        return Err(invalid("timestamp", seconds));
    }
    // `as` saturates, so out-of-range values fail the checked multiply.
    let nanos = ((seconds * 1000.0).round() as i128)
        .checked_mul(1_000_000)
        .ok_or_else(|| invalid("timestamp", seconds))?;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|e| invalid("timestamp", e))
}
