//! Embedding a stash in domain entities
//!
//! Two pieces:
//! - [`StashHost`]: implemented by anything that owns a [`Stash`]; provides
//!   the `stash_*` forwarding methods.
//! - [`Stashable`]: a ready-made field that serializes as `"Stash"` and is
//!   omitted when empty. Flatten it into a host struct to get the same JSON
//!   shape as an embedded struct.
//!
//! ```
//! use serde::Serialize;
//! use stashkit_stash::{StashHost, Stashable};
//!
//! #[derive(Default, Serialize)]
//! struct Account {
//!     #[serde(flatten)]
//!     stashable: Stashable,
//!     name: String,
//! }
//!
//! impl StashHost for Account {
//!     fn stash(&self) -> &stashkit_stash::Stash {
//!         self.stashable.stash()
//!     }
//!     fn stash_mut(&mut self) -> &mut stashkit_stash::Stash {
//!         self.stashable.stash_mut()
//!     }
//! }
//!
//! let mut account = Account::default();
//! account.stash_add("tier", "gold");
//! assert_eq!(account.stash_get_str("tier"), "gold");
//! ```

use crate::error::Result;
use crate::stash::Stash;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stashkit_core::{FieldKey, Value};
use url::Url;
use uuid::Uuid;

/// Owner of a [`Stash`]
///
/// Every provided method forwards one-to-one to the [`Stash`] method of the
/// same name without the `stash_` prefix.
pub trait StashHost {
    /// Shared access to the owned stash
    fn stash(&self) -> &Stash;

    /// Exclusive access to the owned stash
    fn stash_mut(&mut self) -> &mut Stash;

    /// See [`Stash::add`]
    fn stash_add(&mut self, key: impl Into<FieldKey>, value: impl Into<Value>) {
        self.stash_mut().add(key, value);
    }

    /// See [`Stash::has`]
    fn stash_has(&self, key: &str) -> bool {
        self.stash().has(key)
    }

    /// See [`Stash::get`]
    fn stash_get(&self, key: &str) -> Option<&Value> {
        self.stash().get(key)
    }

    /// See [`Stash::delete`]
    fn stash_delete(&mut self, key: &str) -> Option<Value> {
        self.stash_mut().delete(key)
    }

    /// See [`Stash::get_bool`]
    fn stash_get_bool(&self, key: &str, default: bool) -> bool {
        self.stash().get_bool(key, default)
    }

    /// See [`Stash::get_int`]
    fn stash_get_int(&self, key: &str, default: i64) -> i64 {
        self.stash().get_int(key, default)
    }

    /// See [`Stash::get_str`]
    fn stash_get_str(&self, key: &str) -> String {
        self.stash().get_str(key)
    }

    /// See [`Stash::get_struct`]
    fn stash_get_struct<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.stash().get_struct(key)
    }

    /// See [`Stash::get_url`]
    fn stash_get_url(&self, key: &str) -> Option<Url> {
        self.stash().get_url(key)
    }

    /// See [`Stash::get_uuid`]
    fn stash_get_uuid(&self, key: &str) -> Uuid {
        self.stash().get_uuid(key)
    }

    /// See [`Stash::to_struct`]
    fn stash_to_struct<T: DeserializeOwned>(&self) -> Result<T> {
        self.stash().to_struct()
    }
}

/// Stash field for embedding in other structs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stashable {
    /// The owned stash
    #[serde(rename = "Stash", default, skip_serializing_if = "Stash::is_empty")]
    pub stash: Stash,
}

impl Stashable {
    /// Wrap an existing stash
    pub fn new(stash: Stash) -> Self {
        Stashable { stash }
    }
}

impl From<Stash> for Stashable {
    fn from(stash: Stash) -> Self {
        Stashable::new(stash)
    }
}

impl StashHost for Stashable {
    fn stash(&self) -> &Stash {
        &self.stash
    }

    fn stash_mut(&mut self) -> &mut Stash {
        &mut self.stash
    }
}
