//! Error definitions.
use std::result;

use minwise::MinwiseError;
use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = PostdupError> = result::Result<T, E>;

/// Errors in postdup.
#[derive(Debug, Error)]
pub enum PostdupError {
    /// The input argument is invalid.
    #[error("InputError: {0}")]
    Input(String),

    /// Contains [`MinwiseError`].
    #[error(transparent)]
    Minwise(#[from] MinwiseError),
}

impl PostdupError {
    pub(crate) fn input<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Input(msg.into())
    }
}
