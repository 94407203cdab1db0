//! Node parameter entries and mapping helpers

use crate::error::{LaunchError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// One element of a node's parameter list.
///
/// A file entry is handed to the launcher as a path and never read here; a
/// mapping entry carries its parameters inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterEntry {
    File(String),
    Mapping(Mapping),
}

impl ParameterEntry {
    pub fn file(path: impl Into<String>) -> Self {
        ParameterEntry::File(path.into())
    }

    /// A mapping with exactly one key.
    pub fn single(key: &str, value: impl Into<Value>) -> Self {
        let mut map = Mapping::new();
        map.insert(Value::String(key.to_string()), value.into());
        ParameterEntry::Mapping(map)
    }

    pub fn as_file(&self) -> Option<&str> {
        match self {
            ParameterEntry::File(path) => Some(path),
            ParameterEntry::Mapping(_) => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ParameterEntry::File(_) => None,
            ParameterEntry::Mapping(map) => Some(map),
        }
    }

    /// Value stored under `key` in a mapping entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

/// Write every top-level entry of `overrides` into `base`.
///
/// Keys absent from `overrides` keep their value in `base`. A key present in
/// both takes the override value as a whole: nested mappings are replaced,
/// not merged.
pub fn overlay(base: &mut Mapping, overrides: Mapping) {
    for (key, value) in overrides {
        base.insert(key, value);
    }
}

/// Require `value` to be a YAML mapping. `source` names where it came from.
pub fn expect_mapping(value: Value, source: &str) -> Result<Mapping> {
    match value {
        Value::Mapping(map) => Ok(map),
        other => Err(LaunchError::NotAMapping {
            path: source.to_string(),
            found: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Recursively flatten nested parameter maps into dotted ROS parameter names.
///
/// An empty nested mapping declares no parameter and is left out.
pub fn flatten_params(prefix: &str, map: &Mapping, output: &mut Vec<(String, String)>) {
    for (key, value) in map.iter() {
        let key_str = match key {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        let full_key = if prefix.is_empty() {
            key_str
        } else {
            format!("{}.{}", prefix, key_str)
        };

        match value {
            Value::Mapping(nested) if nested.is_empty() => {
                log::debug!("Skipping empty parameter group {}", full_key);
            }
            Value::Mapping(nested) => flatten_params(&full_key, nested, output),
            Value::String(s) => output.push((full_key, s.clone())),
            Value::Number(n) => output.push((full_key, n.to_string())),
            Value::Bool(b) => output.push((full_key, b.to_string())),
            Value::Sequence(seq) => {
                // Arrays get serialized as JSON
                let json_str = serde_json::to_string(seq).unwrap_or_else(|_| format!("{:?}", seq));
                output.push((full_key, json_str));
            }
            Value::Null => output.push((full_key, "null".to_string())),
            Value::Tagged(tagged) => output.push((full_key, format!("{:?}", tagged))),
        }
    }
}
