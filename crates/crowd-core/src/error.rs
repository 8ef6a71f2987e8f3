//! Shared error type.
//!
//! The engine has no fallible paths inside a tick — defensive conditions
//! there are silent no-ops.  Errors exist only at configuration and
//! construction time.  Sub-crates define their own enums and wrap
//! `CoreError` as one variant via `#[from]`.

use thiserror::Error;

/// Top-level error type for `crowd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `crowd-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
