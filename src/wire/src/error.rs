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

use crate::Token;

/// Indicates a problem reading or writing a wire document.
///
/// Structural and I/O problems are fatal to the current call. Semantic
/// tolerances (unknown fields, a scalar where an object was expected) are
/// never reported through this type.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum WireError {
    /// The underlying writer failed.
    #[error("cannot write the wire document: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON.
    #[error("the payload is not a valid JSON document: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The document contains a token the caller did not expect.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: Token,
    },

    /// A value cannot be represented on (or converted from) the wire.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The reader or writer was used out of order.
    #[error("invalid use of the wire reader or writer: {0}")]
    State(&'static str),
}

impl WireError {
    pub(crate) fn unexpected(expected: &'static str, found: Token) -> Self {
        Self::UnexpectedToken { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = WireError::unexpected("an object", Token::Number);
        assert_eq!(e.to_string(), "expected an object, found a number");

        let e = WireError::State("unbalanced end_array");
        assert!(e.to_string().contains("unbalanced end_array"), "{e}");

        let e = WireError::from(std::io::Error::other("broken pipe"));
        assert!(matches!(e, WireError::Io(_)), "{e:?}");
        assert!(e.to_string().contains("broken pipe"), "{e}");
    }
}
