//! Stash: schema-free key/value attributes
//!
//! A [`Stash`] maps [`FieldKey`]s to dynamically typed [`Value`]s. It is meant
//! to be embedded in domain entities (see [`Stashable`](crate::Stashable)) to
//! carry metadata that has no column of its own.
//!
//! ## Contract
//!
//! - `add` is an unconditional upsert and never fails, including on a
//!   freshly defaulted stash.
//! - Typed getters never fail. Absent keys, `Null` values and values that do
//!   not convert all yield the caller's default (or the empty value). Use
//!   [`Stash::has`] / [`Stash::get`] to tell them apart.
//! - Keys that are empty or start with `_` are never serialized. Filtering
//!   happens on every serialization, nothing is cached.
//!
//! ## Coercion rules
//!
//! | getter | Bool | Int | Float | String | other |
//! |--------|------|-----|-------|--------|-------|
//! | `get_bool` | itself | `== 1` | `== 1.0` | `== "true"` | default |
//! | `get_int` | default | itself | truncated | base-10 parse or default | default |
//! | `get_str` | `Display` | `Display` | `Display` | itself | `Display` (`Null` is `""`) |

use crate::error::{Result, StashError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use stashkit_core::{FieldKey, LimitError, Limits, Value};
use std::collections::BTreeMap;
use tracing::debug;
use url::Url;
use uuid::Uuid;

/// Key/value attribute store
///
/// # Examples
///
/// ```
/// use stashkit_stash::Stash;
///
/// let mut stash = Stash::new();
/// stash.add("_salt", "abc");
/// stash.add("role", "admin");
/// stash.add("retries", "3");
///
/// assert_eq!(stash.get_int("retries", 0), 3);
/// assert_eq!(stash.get_str("_salt"), "abc");
/// assert_eq!(serde_json::to_string(&stash).unwrap(), r#"{"role":"admin"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stash {
    entries: BTreeMap<FieldKey, Value>,
}

impl Stash {
    /// Create an empty stash
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the serialized fields of `source` into a new stash.
    ///
    /// One entry per field, field name as key, nested structures converted
    /// recursively into `Value::Object` / `Value::Array`.
    ///
    /// # Errors
    ///
    /// `StashError::Encode` if `source` fails to serialize, and
    /// `StashError::NotAnObject` if it does not serialize to a map.
    pub fn from_struct<T: Serialize + ?Sized>(source: &T) -> Result<Self> {
        match serde_json::to_value(source).map_err(StashError::Encode)? {
            serde_json::Value::Object(fields) => Ok(Stash {
                entries: fields
                    .into_iter()
                    .map(|(k, v)| (FieldKey::from(k), Value::from(v)))
                    .collect(),
            }),
            other => Err(StashError::NotAnObject {
                found: Value::from(other).type_name(),
            }),
        }
    }

    /// Decode every entry, private keys included, into a structure.
    pub fn to_struct<T: DeserializeOwned>(&self) -> Result<T> {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v.clone())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(fields)).map_err(StashError::Decode)
    }

    /// Number of entries, private ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the stash holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys in order
    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.entries.keys()
    }

    /// Iterate over all entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &Value)> {
        self.entries.iter()
    }

    /// Iterate over the entries that appear in serialized output
    pub fn visible(&self) -> impl Iterator<Item = (&FieldKey, &Value)> {
        self.entries.iter().filter(|(k, _)| !k.is_hidden())
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn add(&mut self, key: impl Into<FieldKey>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// True if `key` is present, whatever its value (`Null` included)
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Raw stored value, no coercion
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Remove `key`, returning its value if it was present
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Read `key` as a bool.
    ///
    /// Numbers are true only when equal to 1; strings only when exactly
    /// `"true"`. Absent keys and other types yield `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Int(i)) => *i == 1,
            Some(Value::Float(f)) => *f == 1.0,
            Some(Value::String(s)) => s == "true",
            _ => default,
        }
    }

    /// Read `key` as an integer.
    ///
    /// Floats truncate toward zero (saturating at the `i64` bounds; NaN and
    /// infinities yield `default`). Strings are parsed as base-10.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(Value::Int(i)) => *i,
            Some(Value::Float(f)) if f.is_finite() => *f as i64,
            Some(Value::String(s)) => s.parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Read `key` as text.
    ///
    /// Absent keys and `Null` yield `""`, which is indistinguishable from a
    /// stored empty string.
    pub fn get_str(&self, key: &str) -> String {
        match self.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(v) => v.to_string(),
        }
    }

    /// Decode `key` into a structure.
    ///
    /// Objects decode field by field, strings are parsed as JSON. Returns
    /// `Ok(None)` for absent keys and any other stored shape.
    ///
    /// # Errors
    ///
    /// `StashError::Decode` when the value was found but does not fit `T`.
    pub fn get_struct<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(v @ Value::Object(_)) => serde_json::from_value(serde_json::Value::from(v.clone()))
                .map(Some)
                .map_err(StashError::Decode),
            Some(Value::String(s)) => serde_json::from_str(s)
                .map(Some)
                .map_err(StashError::Decode),
            Some(other) => {
                debug!(
                    target: "stashkit::stash",
                    key,
                    found = other.type_name(),
                    "Stash value is not struct-shaped"
                );
                Ok(None)
            }
        }
    }

    /// Read `key` as an absolute URL, `None` if absent or unparsable
    pub fn get_url(&self, key: &str) -> Option<Url> {
        let raw = self.get(key)?.as_str()?;
        match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                debug!(target: "stashkit::stash", key, error = %e, "Stash value is not a valid URL");
                None
            }
        }
    }

    /// Read `key` as a UUID, the nil UUID if absent or unparsable
    pub fn get_uuid(&self, key: &str) -> Uuid {
        Uuid::parse_str(&self.get_str(key)).unwrap_or_else(|_| Uuid::nil())
    }

    /// Externally visible JSON object (hidden keys removed)
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.visible()
                .map(|(k, v)| (k.to_string(), serde_json::Value::from(v.clone())))
                .collect(),
        )
    }

    /// Check every key and value against `limits`
    pub fn validate(&self, limits: &Limits) -> std::result::Result<(), LimitError> {
        for (key, value) in &self.entries {
            limits.validate_key_length(key)?;
            limits.validate_value(value)?;
        }
        Ok(())
    }
}

impl Serialize for Stash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.visible())
    }
}

/// Deserialization keeps every key, hidden ones included; `null` yields an
/// empty stash.
impl<'de> Deserialize<'de> for Stash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Option::<BTreeMap<FieldKey, Value>>::deserialize(deserializer)?;
        Ok(Stash {
            entries: entries.unwrap_or_default(),
        })
    }
}

impl<K: Into<FieldKey>, V: Into<Value>> FromIterator<(K, V)> for Stash {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Stash {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<FieldKey>, V: Into<Value>> Extend<(K, V)> for Stash {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}
