//! Compile-once, evaluate-many boolean rule expressions
//!
//! - [`RuleExpr`]: source text plus compiled CEL program
//! - [`RuleError`]: compile, load and evaluation failures
//!
//! With the `sqlite` feature, [`RuleExpr`] is also a `rusqlite` column type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod expr;
#[cfg(feature = "sqlite")]
pub mod sql;

pub use error::{Result, RuleError};
pub use expr::RuleExpr;
