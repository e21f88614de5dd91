//! 偏好值类型定义

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value held by the key-value preference store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    TextSet(BTreeSet<String>),
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Text(v) => f.write_str(v),
            Self::TextSet(set) => {
                f.write_str("[")?;
                for (i, item) in set.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for PreferenceValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for PreferenceValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for PreferenceValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for PreferenceValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for PreferenceValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PreferenceValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<BTreeSet<String>> for PreferenceValue {
    fn from(v: BTreeSet<String>) -> Self {
        Self::TextSet(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_scalars() {
        assert_eq!(PreferenceValue::from(true).to_string(), "true");
        assert_eq!(PreferenceValue::from(42).to_string(), "42");
        assert_eq!(PreferenceValue::from(-7_i64).to_string(), "-7");
        assert_eq!(PreferenceValue::from(1.5).to_string(), "1.5");
        assert_eq!(PreferenceValue::from(1.0).to_string(), "1.0");
        assert_eq!(PreferenceValue::from(0.25).to_string(), "0.25");
        assert_eq!(PreferenceValue::from(f64::NAN).to_string(), "NaN");
        assert_eq!(PreferenceValue::from("dark").to_string(), "dark");
    }

    #[test]
    fn display_set_is_sorted() {
        let set: BTreeSet<String> = ["wifi", "cellular"].iter().map(ToString::to_string).collect();
        assert_eq!(PreferenceValue::from(set).to_string(), "[cellular, wifi]");
        assert_eq!(PreferenceValue::TextSet(BTreeSet::new()).to_string(), "[]");
    }

    #[test]
    fn deserializes_untagged_json() {
        let value: PreferenceValue = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(value.to_string(), "[a, b]");
        let value: PreferenceValue = serde_json::from_str("3").unwrap();
        assert_eq!(value, PreferenceValue::Int(3));
        let value: PreferenceValue = serde_json::from_str("false").unwrap();
        assert_eq!(value, PreferenceValue::Bool(false));
    }
}
