//! Schema-free attribute stash
//!
//! - [`Stash`]: key/value store with coercing typed getters and private keys
//! - [`StashHost`] / [`Stashable`]: embedding a stash in domain entities
//! - [`StashError`]: structure projection errors
//!
//! With the `sqlite` feature, [`Stash`] is also a `rusqlite` column type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
#[cfg(feature = "sqlite")]
pub mod sql;
pub mod stash;
pub mod stashable;

pub use error::{Result, StashError};
pub use stash::Stash;
pub use stashable::{StashHost, Stashable};

pub use stashkit_core::{keys, FieldKey, Value};
