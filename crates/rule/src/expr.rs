//! Boolean rule expressions
//!
//! A [`RuleExpr`] pairs expression source text with its compiled program.
//! Expressions are written in CEL and compiled once; the program is then
//! evaluated against any number of environments.
//!
//! ## Lifecycle
//!
//! ```text
//! Uncompiled --compile ok--> Compiled
//!     |
//!     +------compile err---> Failed (no program kept)
//! ```
//!
//! - The program is always either absent or the compilation of the current
//!   source. Every path that sets the source recompiles, and a failed
//!   recompile clears the old program.
//! - Only the source is persisted. Loading (`scan`, `from_bytes`, serde,
//!   SQLite) recompiles; a load that fails to compile is an error, never an
//!   instance holding a stale program.
//! - A rule keeps the [`Limits`] it was built with, and every later
//!   recompile (`scan`, `set_source`) checks the source against them.
//!   Loads without a rule in hand go through `from_bytes_with_limits`.
//! - `evaluate` shares the program across callers. Each call builds its own
//!   engine context, so concurrent evaluation needs no locking.
//! - Arithmetic faults inside the engine (division by zero, integer
//!   overflow) surface as `RuleError::Run` rather than unwinding into the
//!   caller.

use crate::error::{Result, RuleError};
use cel_interpreter::{Context, Program, Value as CelValue};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use stashkit_core::{Limits, Value};
use std::collections::HashMap;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Compiled boolean expression with its source
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use stashkit_rule::RuleExpr;
///
/// let rule = RuleExpr::compile("amount > 100 && currency == 'EUR'").unwrap();
/// assert!(rule.evaluate(&json!({"amount": 250, "currency": "EUR"})).unwrap());
/// assert!(!rule.evaluate(&json!({"amount": 50, "currency": "EUR"})).unwrap());
/// ```
#[derive(Clone, Default)]
pub struct RuleExpr {
    source: String,
    program: Option<Arc<Program>>,
    limits: Limits,
}

impl RuleExpr {
    /// Compile `source` with default limits.
    ///
    /// The environment is unknown at compile time; references are resolved
    /// and type-checked when the rule is evaluated.
    ///
    /// # Errors
    ///
    /// `RuleError::Compile` with the compiler's diagnostic, or
    /// `RuleError::Limit` if the source is oversize.
    pub fn compile(source: impl Into<String>) -> Result<Self> {
        Self::compile_with_limits(source, &Limits::default())
    }

    /// Compile `source`, rejecting it first if it exceeds `limits`
    pub fn compile_with_limits(source: impl Into<String>, limits: &Limits) -> Result<Self> {
        let source = source.into();
        let program = compile_program(&source, limits)?;
        Ok(RuleExpr {
            source,
            program: Some(program),
            limits: limits.clone(),
        })
    }

    /// Load a rule from persisted source bytes with default limits
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        Self::from_bytes_with_limits(raw, &Limits::default())
    }

    /// Load a rule from persisted source bytes, rejecting sources that
    /// exceed `limits` exactly as [`RuleExpr::compile_with_limits`] does
    pub fn from_bytes_with_limits(raw: &[u8], limits: &Limits) -> Result<Self> {
        let mut expr = RuleExpr {
            limits: limits.clone(),
            ..RuleExpr::default()
        };
        expr.scan(raw)?;
        Ok(expr)
    }

    /// Replace this rule with persisted source bytes and recompile.
    ///
    /// The previous program is dropped before decoding. On any error the
    /// rule is left without a program; check the result before evaluating.
    pub fn scan(&mut self, raw: &[u8]) -> Result<()> {
        self.program = None;
        let source = match std::str::from_utf8(raw) {
            Ok(source) => source,
            Err(e) => {
                self.source = String::from_utf8_lossy(raw).into_owned();
                warn!(target: "stashkit::rule", error = %e, "Persisted rule source is not UTF-8");
                return Err(e.into());
            }
        };
        self.source = source.to_string();
        match compile_program(&self.source, &self.limits) {
            Ok(program) => {
                self.program = Some(program);
                Ok(())
            }
            Err(e) => {
                warn!(
                    target: "stashkit::rule",
                    source = %self.source,
                    error = %e,
                    "Persisted rule failed to recompile"
                );
                Err(e)
            }
        }
    }

    /// Replace the source and recompile, with the same failure behavior as
    /// [`RuleExpr::scan`]
    pub fn set_source(&mut self, source: impl Into<String>) -> Result<()> {
        self.program = None;
        self.source = source.into();
        self.program = Some(compile_program(&self.source, &self.limits)?);
        Ok(())
    }

    /// Source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Value to persist: exactly the source text, never the program
    pub fn value(&self) -> &str {
        &self.source
    }

    /// Limits applied whenever this rule compiles
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// True if a program is available for evaluation
    pub fn is_compiled(&self) -> bool {
        self.program.is_some()
    }

    /// Evaluate against `env` and require a boolean result.
    ///
    /// `env` must serialize to an object (or to null for no variables); each
    /// top-level field becomes an expression variable of the same name.
    ///
    /// # Errors
    ///
    /// - `RuleError::NotCompiled` if there is no program
    /// - `RuleError::Environment` if `env` cannot be bound
    /// - `RuleError::Run` if the engine fails (e.g. unknown variable,
    ///   division by zero, integer overflow)
    /// - `RuleError::NotBoolean` if the result is not a bool
    pub fn evaluate<E: Serialize + ?Sized>(&self, env: &E) -> Result<bool> {
        let program = self.program.as_ref().ok_or(RuleError::NotCompiled)?;

        let mut context = Context::default();
        for (name, value) in environment_fields(env)? {
            context
                .add_variable(name, value)
                .map_err(|e| RuleError::Environment(e.to_string()))?;
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| program.execute(&context)))
            .map_err(|payload| {
                let fault = panic_message(payload.as_ref());
                warn!(
                    target: "stashkit::rule",
                    source = %self.source,
                    fault = %fault,
                    "Rule evaluation faulted"
                );
                RuleError::Run(fault)
            })?
            .map_err(|e| RuleError::Run(e.to_string()))?;

        match result {
            CelValue::Bool(b) => Ok(b),
            other => {
                warn!(
                    target: "stashkit::rule",
                    source = %self.source,
                    "Rule produced a non-boolean result"
                );
                Err(RuleError::NotBoolean {
                    expression: self.source.clone(),
                    result: format!("{:?}", other),
                })
            }
        }
    }
}

fn compile_program(source: &str, limits: &Limits) -> Result<Arc<Program>> {
    limits.validate_source(source)?;
    let program = Program::compile(source).map_err(|e| RuleError::Compile {
        message: e.to_string(),
    })?;
    debug!(target: "stashkit::rule", source_len = source.len(), "Compiled rule");
    Ok(Arc::new(program))
}

/// The engine panics on unchecked integer arithmetic; recover its message.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "evaluation aborted".to_string()
    }
}

/// Flatten a serializable environment into named variables.
///
/// Goes through [`Value`] so integers bind as signed CEL ints.
fn environment_fields<E: Serialize + ?Sized>(env: &E) -> Result<HashMap<String, Value>> {
    let json = serde_json::to_value(env).map_err(|e| RuleError::Environment(e.to_string()))?;
    match Value::from(json) {
        Value::Object(fields) => Ok(fields),
        Value::Null => Ok(HashMap::new()),
        other => Err(RuleError::Environment(format!(
            "environment must be an object, found {}",
            other.type_name()
        ))),
    }
}

impl fmt::Debug for RuleExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleExpr")
            .field("source", &self.source)
            .field("compiled", &self.is_compiled())
            .finish()
    }
}

impl fmt::Display for RuleExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Rules compare by source and compile state; programs are derived data.
impl PartialEq for RuleExpr {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.is_compiled() == other.is_compiled()
    }
}

impl FromStr for RuleExpr {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self> {
        RuleExpr::compile(s)
    }
}

impl Serialize for RuleExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Recompiles under default limits; use [`RuleExpr::from_bytes_with_limits`]
/// when a configuration applies.
impl<'de> Deserialize<'de> for RuleExpr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        RuleExpr::compile(source).map_err(serde::de::Error::custom)
    }
}
