//! JSON file-backed preference store.
//!
//! The file holds a single JSON object. Every `get_all` re-reads the file, so
//! edits made by other processes show up in the next snapshot.

use std::collections::{BTreeSet, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use etm_core::error::{CoreError, CoreResult};
use etm_core::traits::{PreferenceStore, PreferencesMap};
use etm_core::types::PreferenceValue;

/// Preference store backed by a JSON object file.
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    /// Create a store for `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to the file, replacing its contents.
    ///
    /// # Errors
    /// - `CoreError::Validation` if a float entry is NaN or infinite (JSON cannot hold it)
    /// - `CoreError::Storage` if the directory or file cannot be written
    pub fn save(&self, entries: &PreferencesMap) -> CoreResult<()> {
        if let Some((key, _)) = entries
            .iter()
            .find(|(_, value)| matches!(value, PreferenceValue::Float(f) if !f.is_finite()))
        {
            return Err(CoreError::Validation(format!(
                "Preference '{key}' holds a non-finite float"
            )));
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::Storage(format!("Failed to create directory: {e}")))?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| {
            CoreError::Storage(format!(
                "Failed to write preferences to {}: {e}",
                self.path.display()
            ))
        })
    }

    fn read_raw(&self) -> CoreResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Storage(format!(
                "Failed to read preferences from {}: {e}",
                self.path.display()
            ))),
        }
    }
}

fn to_preference_value(key: &str, value: Value) -> CoreResult<PreferenceValue> {
    match value {
        Value::Bool(b) => Ok(PreferenceValue::Bool(b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(PreferenceValue::Int(i)),
            None => n.as_f64().map(PreferenceValue::Float).ok_or_else(|| {
                CoreError::Storage(format!("Preference '{key}' holds an unsupported number"))
            }),
        },
        Value::String(s) => Ok(PreferenceValue::Text(s)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(CoreError::Storage(format!(
                    "Preference '{key}' holds a non-string set element"
                ))),
            })
            .collect::<CoreResult<BTreeSet<_>>>()
            .map(PreferenceValue::TextSet),
        Value::Null | Value::Object(_) => Err(CoreError::Storage(format!(
            "Preference '{key}' holds an unsupported value"
        ))),
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get_all(&self) -> CoreResult<PreferencesMap> {
        let Some(json) = self.read_raw()? else {
            return Ok(HashMap::new());
        };
        if json.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let object: serde_json::Map<String, Value> = serde_json::from_str(&json).map_err(|e| {
            log::error!("Corrupt preference file {}: {e}", self.path.display());
            CoreError::Storage(format!("Invalid preference file: {e}"))
        })?;

        object
            .into_iter()
            .map(|(key, value)| -> CoreResult<(String, PreferenceValue)> {
                let value = to_preference_value(&key, value)?;
                Ok((key, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_supported_values() {
        assert_eq!(
            to_preference_value("k", Value::Bool(true)).unwrap(),
            PreferenceValue::Bool(true)
        );
        assert_eq!(
            to_preference_value("k", serde_json::json!(7)).unwrap(),
            PreferenceValue::Int(7)
        );
        assert_eq!(
            to_preference_value("k", serde_json::json!(0.25)).unwrap(),
            PreferenceValue::Float(0.25)
        );
        assert_eq!(
            to_preference_value("k", serde_json::json!(["b", "a"]))
                .unwrap()
                .to_string(),
            "[a, b]"
        );
    }

    #[test]
    fn rejects_unsupported_values() {
        assert!(to_preference_value("k", Value::Null).is_err());
        assert!(to_preference_value("k", serde_json::json!({"nested": 1})).is_err());
        assert!(to_preference_value("k", serde_json::json!([1, 2])).is_err());
    }
}
