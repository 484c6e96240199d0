//! Size limits for keys, values and rule sources
//!
//! Stash writes never fail, so these limits are not enforced on `add`. They
//! are checked by callers that persist untrusted content (`Stash::validate`)
//! and by rule compilation, which rejects oversize sources before they reach
//! the expression engine.

use crate::Value;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size limits for keys, values and rule sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum key length in bytes (default: 1024)
    pub max_key_bytes: usize,

    /// Maximum string length in bytes (default: 16MB)
    pub max_string_bytes: usize,

    /// Maximum nesting depth of a stored value (default: 128)
    pub max_nesting_depth: usize,

    /// Maximum rule expression source length in bytes (default: 64KB)
    pub max_source_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_key_bytes: 1024,
            max_string_bytes: 16 * 1024 * 1024, // 16MB
            max_nesting_depth: 128,
            max_source_bytes: 64 * 1024, // 64KB
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_key_bytes: 16,
            max_string_bytes: 64,
            max_nesting_depth: 4,
            max_source_bytes: 32,
        }
    }

    /// Validate a key length
    pub fn validate_key_length(&self, key: &str) -> Result<(), LimitError> {
        let len = key.len();
        if len > self.max_key_bytes {
            return Err(LimitError::KeyTooLong {
                actual: len,
                max: self.max_key_bytes,
            });
        }
        Ok(())
    }

    /// Validate a rule expression source length
    pub fn validate_source(&self, source: &str) -> Result<(), LimitError> {
        let len = source.len();
        if len > self.max_source_bytes {
            return Err(LimitError::SourceTooLong {
                actual: len,
                max: self.max_source_bytes,
            });
        }
        Ok(())
    }

    /// Validate a value against string length and nesting limits
    pub fn validate_value(&self, value: &Value) -> Result<(), LimitError> {
        self.validate_value_impl(value, 0)
    }

    fn validate_value_impl(&self, value: &Value, depth: usize) -> Result<(), LimitError> {
        if depth > self.max_nesting_depth {
            return Err(LimitError::NestingTooDeep {
                actual: depth,
                max: self.max_nesting_depth,
            });
        }

        match value {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => Ok(()),

            Value::String(s) => {
                if s.len() > self.max_string_bytes {
                    return Err(LimitError::StringTooLong {
                        actual: s.len(),
                        max: self.max_string_bytes,
                    });
                }
                Ok(())
            }

            Value::Array(arr) => {
                for v in arr {
                    self.validate_value_impl(v, depth + 1)?;
                }
                Ok(())
            }

            Value::Object(obj) => {
                for (k, v) in obj {
                    self.validate_key_length(k)?;
                    self.validate_value_impl(v, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

/// Limit validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Key exceeds maximum length
    #[error("key too long: {actual} bytes exceeds maximum {max}")]
    KeyTooLong {
        /// Actual key length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// String value exceeds maximum length
    #[error("string too long: {actual} bytes exceeds maximum {max}")]
    StringTooLong {
        /// Actual string length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Value nesting exceeds maximum depth
    #[error("nesting too deep: {actual} levels exceeds maximum {max}")]
    NestingTooDeep {
        /// Actual nesting depth
        actual: usize,
        /// Maximum allowed depth
        max: usize,
    },

    /// Rule source exceeds maximum length
    #[error("expression source too long: {actual} bytes exceeds maximum {max}")]
    SourceTooLong {
        /// Actual source length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl LimitError {
    /// Short machine-readable reason
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::KeyTooLong { .. } => "key_too_long",
            LimitError::StringTooLong { .. } => "value_too_large",
            LimitError::NestingTooDeep { .. } => "nesting_too_deep",
            LimitError::SourceTooLong { .. } => "source_too_long",
        }
    }
}
