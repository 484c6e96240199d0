//! SQLite column support
//!
//! A stash is stored as a TEXT column holding its serialized JSON object.
//! Hidden keys are dropped on write, exactly as in any other serialization,
//! so private entries never reach the database. NULL columns load as an
//! empty stash.

use crate::stash::Stash;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

impl ToSql for Stash {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let json = serde_json::to_string(self)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        Ok(ToSqlOutput::from(json))
    }
}

impl FromSql for Stash {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Stash::new()),
            ValueRef::Text(raw) | ValueRef::Blob(raw) => {
                serde_json::from_slice(raw).map_err(|e| FromSqlError::Other(Box::new(e)))
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}
