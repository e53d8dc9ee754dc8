//! Result type alias for Tuiter operations.

use crate::TuiterError;

/// A specialized `Result` type for Tuiter operations.
pub type TuiterResult<T> = Result<T, TuiterError>;
