//! Field keys for stash access
//!
//! A [`FieldKey`] is an opaque, case-sensitive string identifier. Keys are not
//! validated against any registry; the only rule with behavior attached is
//! visibility:
//!
//! - Keys starting with [`PRIVATE_PREFIX`] (`_`) are *private*. They can be
//!   read and written like any other key but never appear in serialized
//!   output.
//! - The empty key is likewise never serialized.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::ops::Deref;

/// Leading character that marks a key as private
pub const PRIVATE_PREFIX: char = '_';

/// Stash access key
///
/// Built at compile time with [`FieldKey::from_static`] (used by the
/// [`keys`](crate::keys) catalog) or at runtime from any string.
///
/// # Examples
///
/// ```
/// use stashkit_core::FieldKey;
///
/// let role = FieldKey::from("role");
/// assert!(!role.is_private());
///
/// let salt = FieldKey::from_static("_salt");
/// assert!(salt.is_private());
/// assert_eq!(&*salt, "_salt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(Cow<'static, str>);

impl FieldKey {
    /// Create a key from a static string without allocating
    pub const fn from_static(key: &'static str) -> Self {
        FieldKey(Cow::Borrowed(key))
    }

    /// Create a key from any string
    pub fn new(key: impl Into<String>) -> Self {
        FieldKey(Cow::Owned(key.into()))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the key starts with `_`
    pub fn is_private(&self) -> bool {
        is_private_key(&self.0)
    }

    /// True if the key is excluded from serialized output (empty or private)
    pub fn is_hidden(&self) -> bool {
        is_hidden_key(&self.0)
    }
}

/// True if `key` starts with [`PRIVATE_PREFIX`]
pub fn is_private_key(key: &str) -> bool {
    key.starts_with(PRIVATE_PREFIX)
}

/// True if `key` must be dropped from serialized output
pub fn is_hidden_key(key: &str) -> bool {
    key.is_empty() || is_private_key(key)
}

impl Deref for FieldKey {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldKey {
    fn from(key: &str) -> Self {
        FieldKey::new(key)
    }
}

impl From<String> for FieldKey {
    fn from(key: String) -> Self {
        FieldKey(Cow::Owned(key))
    }
}

impl From<&FieldKey> for FieldKey {
    fn from(key: &FieldKey) -> Self {
        key.clone()
    }
}

impl From<FieldKey> for String {
    fn from(key: FieldKey) -> Self {
        key.0.into_owned()
    }
}
