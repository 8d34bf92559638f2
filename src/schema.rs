// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Structural validation of untrusted API payloads.
//!
//! Every payload crossing the network boundary is validated field by field
//! against its declared shape before any view model is built. There is no
//! implicit coercion: a string `"12"` where a number is declared fails, a
//! status value outside the declared set fails, and the error names the
//! offending field path. Validation is purely functional; no partial record
//! is ever produced.

use serde_json::{Map, Value};

/// Validation failure for a single payload.
///
/// `payload` is the payload kind ("schedule", "stats", ...), `path` the
/// offending field (list validators prefix it with the element index,
/// e.g. `[2].client_name`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("{payload} payload: missing required field `{path}`")]
    MissingField { payload: &'static str, path: String },

    #[error("{payload} payload: field `{path}` expected {expected}, found {found}")]
    WrongType {
        payload: &'static str,
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{payload} payload: field `{path}` value `{value}` is not one of {allowed:?}")]
    UnknownVariant {
        payload: &'static str,
        path: String,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("{payload} payload: field `{path}` value `{value}` is not an RFC 3339 timestamp")]
    MalformedTimestamp {
        payload: &'static str,
        path: String,
        value: String,
    },

    #[error("{payload} payload: expected a JSON {expected}, found {found}")]
    WrongShape {
        payload: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl SchemaError {
    /// Prefix the field path with a list element index.
    fn at_index(self, index: usize) -> Self {
        let prefix = |path: String| format!("[{index}].{path}");
        match self {
            Self::MissingField { payload, path } => Self::MissingField {
                payload,
                path: prefix(path),
            },
            Self::WrongType {
                payload,
                path,
                expected,
                found,
            } => Self::WrongType {
                payload,
                path: prefix(path),
                expected,
                found,
            },
            Self::UnknownVariant {
                payload,
                path,
                value,
                allowed,
            } => Self::UnknownVariant {
                payload,
                path: prefix(path),
                value,
                allowed,
            },
            Self::MalformedTimestamp {
                payload,
                path,
                value,
            } => Self::MalformedTimestamp {
                payload,
                path: prefix(path),
                value,
            },
            other @ Self::WrongShape { .. } => other,
        }
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field accessor over one payload object.
///
/// Wraps the underlying JSON map so each extraction carries the payload kind
/// and field path into any error it produces.
pub(crate) struct Fields<'a> {
    payload: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Require the payload to be a JSON object.
    pub fn object(payload: &'static str, value: &'a Value) -> Result<Self, SchemaError> {
        match value.as_object() {
            Some(map) => Ok(Self { payload, map }),
            None => Err(SchemaError::WrongShape {
                payload,
                expected: "object",
                found: json_type_name(value),
            }),
        }
    }

    fn require(&self, name: &str) -> Result<&'a Value, SchemaError> {
        // An explicit null is treated as absent, matching the original API
        // which omits unset optional columns.
        match self.map.get(name) {
            Some(Value::Null) | None => Err(SchemaError::MissingField {
                payload: self.payload,
                path: name.to_string(),
            }),
            Some(value) => Ok(value),
        }
    }

    fn wrong_type(&self, name: &str, expected: &'static str, found: &Value) -> SchemaError {
        SchemaError::WrongType {
            payload: self.payload,
            path: name.to_string(),
            expected,
            found: json_type_name(found),
        }
    }

    /// Required integer identifier.
    pub fn id(&self, name: &str) -> Result<i64, SchemaError> {
        let value = self.require(name)?;
        value
            .as_i64()
            .ok_or_else(|| self.wrong_type(name, "integer", value))
    }

    /// Required non-negative integer (counters).
    pub fn count(&self, name: &str) -> Result<u32, SchemaError> {
        let value = self.require(name)?;
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.wrong_type(name, "non-negative integer", value))
    }

    /// Required finite number.
    pub fn number(&self, name: &str) -> Result<f64, SchemaError> {
        let value = self.require(name)?;
        value
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or_else(|| self.wrong_type(name, "number", value))
    }

    /// Required string.
    pub fn string(&self, name: &str) -> Result<String, SchemaError> {
        let value = self.require(name)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.wrong_type(name, "string", value))
    }

    /// Optional string; absent and null both mean `None`.
    pub fn optional_string(&self, name: &str) -> Result<Option<String>, SchemaError> {
        match self.map.get(name) {
            Some(Value::Null) | None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_owned()))
                .ok_or_else(|| self.wrong_type(name, "string", value)),
        }
    }

    /// Required boolean.
    pub fn boolean(&self, name: &str) -> Result<bool, SchemaError> {
        let value = self.require(name)?;
        value
            .as_bool()
            .ok_or_else(|| self.wrong_type(name, "boolean", value))
    }

    /// Required RFC 3339 timestamp, kept as the original string.
    pub fn timestamp(&self, name: &str) -> Result<String, SchemaError> {
        let text = self.string(name)?;
        if chrono::DateTime::parse_from_rfc3339(&text).is_err() {
            return Err(SchemaError::MalformedTimestamp {
                payload: self.payload,
                path: name.to_string(),
                value: text,
            });
        }
        Ok(text)
    }

    /// Required string drawn from a closed set of variants.
    pub fn variant(
        &self,
        name: &str,
        allowed: &'static [&'static str],
    ) -> Result<String, SchemaError> {
        let text = self.string(name)?;
        if !allowed.contains(&text.as_str()) {
            return Err(SchemaError::UnknownVariant {
                payload: self.payload,
                path: name.to_string(),
                value: text,
                allowed,
            });
        }
        Ok(text)
    }
}

/// Validate a JSON array element-wise, tagging errors with the element index.
pub(crate) fn parse_list<T>(
    payload: &'static str,
    value: &Value,
    parse: impl Fn(&Value) -> Result<T, SchemaError>,
) -> Result<Vec<T>, SchemaError> {
    let items = value.as_array().ok_or(SchemaError::WrongShape {
        payload,
        expected: "array",
        found: json_type_name(value),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse(item).map_err(|e| e.at_index(index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_names_path() {
        let value = json!({ "id": 7 });
        let fields = Fields::object("schedule", &value).unwrap();

        let err = fields.string("client_name").unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                payload: "schedule",
                path: "client_name".to_string(),
            }
        );
    }

    #[test]
    fn test_no_string_to_number_coercion() {
        let value = json!({ "latitude": "12" });
        let fields = Fields::object("schedule", &value).unwrap();

        let err = fields.number("latitude").unwrap_err();
        assert_eq!(
            err,
            SchemaError::WrongType {
                payload: "schedule",
                path: "latitude".to_string(),
                expected: "number",
                found: "string",
            }
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let value = json!({ "reason": null });
        let fields = Fields::object("task", &value).unwrap();

        assert_eq!(fields.optional_string("reason").unwrap(), None);
        assert!(matches!(
            fields.string("reason"),
            Err(SchemaError::MissingField { .. })
        ));
    }

    #[test]
    fn test_timestamp_rejects_non_rfc3339() {
        let value = json!({ "created_at": "yesterday" });
        let fields = Fields::object("task", &value).unwrap();

        assert!(matches!(
            fields.timestamp("created_at"),
            Err(SchemaError::MalformedTimestamp { .. })
        ));
        let ok = json!({ "created_at": "2025-03-01T09:00:00Z" });
        let fields = Fields::object("task", &ok).unwrap();
        assert_eq!(
            fields.timestamp("created_at").unwrap(),
            "2025-03-01T09:00:00Z"
        );
    }

    #[test]
    fn test_list_errors_carry_element_index() {
        let value = json!([{ "id": 1 }, { "id": "2" }]);
        let err = parse_list("task", &value, |item| {
            Fields::object("task", item)?.id("id")
        })
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::WrongType {
                payload: "task",
                path: "[1].id".to_string(),
                expected: "integer",
                found: "string",
            }
        );
    }
}
