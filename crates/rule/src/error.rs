//! Error types for rule expressions

use stashkit_core::LimitError;
use std::str::Utf8Error;
use thiserror::Error;

/// Result type alias for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Errors raised while compiling, loading or evaluating a rule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// Source text was rejected by the expression compiler
    #[error("expression compile error: {message}")]
    Compile {
        /// Compiler diagnostic
        message: String,
    },

    /// Source text exceeds configured limits
    #[error("expression rejected: {0}")]
    Limit(#[from] LimitError),

    /// Persisted source bytes are not valid UTF-8
    #[error("expression source is not valid UTF-8: {0}")]
    Decode(#[from] Utf8Error),

    /// Evaluation was attempted without a compiled program
    #[error("expression is not compiled")]
    NotCompiled,

    /// The environment could not be bound to expression variables
    #[error("expression environment error: {0}")]
    Environment(String),

    /// The engine failed while running the program
    #[error("expression run error: {0}")]
    Run(String),

    /// The program ran but did not produce a boolean
    #[error("expression return not boolean type: {expression}")]
    NotBoolean {
        /// Source text of the offending expression
        expression: String,
        /// Debug rendering of the value it produced
        result: String,
    },
}

impl RuleError {
    /// True for failures that happen before a program exists
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            RuleError::Compile { .. } | RuleError::Limit(_) | RuleError::Decode(_)
        )
    }
}
