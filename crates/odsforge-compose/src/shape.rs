//! Shared helpers for reading annotated maps

use odsforge_core::{Error, Result};
use serde_json::{Map, Value};

/// Style names under the "style" key: a single name or an ordered list
pub(crate) fn style_list(map: &Map<String, Value>, context: &'static str) -> Result<Vec<String>> {
    match map.get("style") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(name)) => Ok(vec![name.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(name.clone()),
                other => Err(Error::shape(format!(
                    "{} style list entry is not a string: {}",
                    context, other
                ))),
            })
            .collect(),
        Some(other) => Err(Error::shape(format!(
            "{} style must be a name or a list of names, got {}",
            context, other
        ))),
    }
}

/// Optional string field; absent and null both read as `None`
pub(crate) fn opt_string(
    map: &Map<String, Value>,
    key: &str,
    context: &'static str,
) -> Result<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(Error::shape(format!(
            "{} '{}' must be a string, got {}",
            context, key, other
        ))),
    }
}

/// Short description of a value's kind, for error messages
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}
