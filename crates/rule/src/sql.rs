//! SQLite column support
//!
//! Rules are stored as the TEXT of their source. Loading accepts TEXT or
//! BLOB, decodes it as UTF-8 and recompiles; a row whose source no longer
//! compiles fails to load. Use `Option<RuleExpr>` for nullable columns.
//!
//! `FromSql` applies default limits. Rows read under a configuration go
//! through [`RuleExpr::from_sql_with_limits`] with `Row::get_ref`.

use crate::expr::RuleExpr;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use stashkit_core::Limits;

impl ToSql for RuleExpr {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.value()))
    }
}

impl RuleExpr {
    /// Load a rule column, rejecting stored sources that exceed `limits`
    pub fn from_sql_with_limits(value: ValueRef<'_>, limits: &Limits) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(raw) | ValueRef::Blob(raw) => RuleExpr::from_bytes_with_limits(raw, limits)
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

impl FromSql for RuleExpr {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        RuleExpr::from_sql_with_limits(value, &Limits::default())
    }
}
