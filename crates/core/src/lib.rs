//! Core types for stashkit
//!
//! This crate defines the foundational types shared by the stash and rule crates:
//! - Value: Dynamically typed value stored in a stash
//! - FieldKey: Stash access key with private-key visibility rules
//! - keys: Catalog of well-known keys
//! - Limits: Size limits for keys, values and rule sources
//! - StashkitConfig: TOML configuration
//! - Error: Error type hierarchy
//! - Stack: LIFO collection

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod key;
pub mod keys;
pub mod limits;
pub mod stack;
pub mod value;

pub use config::{StashkitConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use key::{is_hidden_key, is_private_key, FieldKey, PRIVATE_PREFIX};
pub use limits::{LimitError, Limits};
pub use stack::Stack;
pub use value::Value;
