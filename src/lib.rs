//! stashkit - schema-free attribute stashes and persistable boolean rules
//!
//! Two independent facilities for domain entities:
//!
//! - [`Stash`]: a dynamically typed key/value store with coercing getters
//!   and private (`_`-prefixed) keys that never leave the process.
//!   Embed it with [`Stashable`] / [`StashHost`].
//! - [`RuleExpr`]: a CEL expression compiled once and evaluated against many
//!   environments; only its source text is persisted.
//!
//! # Quick Start
//!
//! ```
//! use stashkit::{keys, RuleExpr, Stash};
//!
//! let mut stash = Stash::new();
//! stash.add(keys::SALT, "abc");
//! stash.add("role", "admin");
//! assert_eq!(serde_json::to_string(&stash).unwrap(), r#"{"role":"admin"}"#);
//!
//! let rule = RuleExpr::compile("role == 'admin'").unwrap();
//! assert!(rule.evaluate(&stash).unwrap());
//! ```

pub use stashkit_core::{
    is_hidden_key, is_private_key, keys, Error, FieldKey, LimitError, Limits, Stack,
    StashkitConfig, Value, CONFIG_FILE_NAME, PRIVATE_PREFIX,
};
pub use stashkit_rule::{RuleError, RuleExpr};
pub use stashkit_stash::{Stash, StashError, StashHost, Stashable};
