//! Error types for stash projection
//!
//! Typed getters never fail; only operations that convert between a stash and
//! a Rust structure can return a [`StashError`].

use stashkit_core::LimitError;
use thiserror::Error;

/// Result type alias for stash operations
pub type Result<T> = std::result::Result<T, StashError>;

/// Errors raised while projecting structures into or out of a stash
#[derive(Debug, Error)]
pub enum StashError {
    /// A structure could not be serialized into stash values
    #[error("stash encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stored value could not be decoded into the requested type
    #[error("stash decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The projected structure did not serialize to an object
    #[error("expected an object-shaped value, found {found}")]
    NotAnObject {
        /// Type name of the value that was produced instead
        found: &'static str,
    },

    /// Stash contents exceed configured limits
    #[error(transparent)]
    Limit(#[from] LimitError),
}
