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

use base64::Engine;

/// A query value that cannot be rendered as text.
#[derive(thiserror::Error, Debug)]
#[error("cannot render the query value: {0}")]
pub struct QueryValueError(#[source] Box<dyn std::error::Error + Send + Sync>);

/// Types that append zero or more `name=value` pairs to a query string.
///
/// Absent optional values add nothing. Lists add one pair per element, in
/// order.
pub trait QueryParameter {
    fn append_to(
        &self,
        name: &str,
        pairs: &mut Vec<(String, String)>,
    ) -> Result<(), QueryValueError>;
}

/// Types rendered as a single query value.
pub trait QueryValue {
    fn render(&self) -> Result<String, QueryValueError>;
}

macro_rules! display_values {
    ($($t:ty),* $(,)?) => {
        $(
            impl QueryValue for $t {
                fn render(&self) -> Result<String, QueryValueError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

display_values!(bool, i32, i64, f64, String);

impl QueryValue for bytes::Bytes {
    fn render(&self) -> Result<String, QueryValueError> {
        Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(self))
    }
}

impl QueryValue for time::OffsetDateTime {
    fn render(&self) -> Result<String, QueryValueError> {
        self.format(&time::format_description::well_known::Rfc3339)
            .map_err(|e| QueryValueError(e.into()))
    }
}

impl<T: QueryValue> QueryParameter for T {
    fn append_to(
        &self,
        name: &str,
        pairs: &mut Vec<(String, String)>,
    ) -> Result<(), QueryValueError> {
        pairs.push((name.to_string(), self.render()?));
        Ok(())
    }
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn append_to(
        &self,
        name: &str,
        pairs: &mut Vec<(String, String)>,
    ) -> Result<(), QueryValueError> {
        self.as_ref()
            .map_or(Ok(()), |value| value.append_to(name, pairs))
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn append_to(
        &self,
        name: &str,
        pairs: &mut Vec<(String, String)>,
    ) -> Result<(), QueryValueError> {
        self.iter().try_for_each(|item| item.append_to(name, pairs))
    }
}
