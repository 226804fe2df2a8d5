//! Error definitions.
use std::num::ParseIntError;
use std::result;

use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = MinwiseError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Error)]
pub enum MinwiseError {
    /// The input argument is invalid.
    #[error("InputError: {0}")]
    Input(String),

    /// A serialized signature contains a token that is not a 64-bit integer.
    #[error("ParseError: invalid signature component {token:?} at position {position}")]
    Parse {
        /// The offending token.
        token: String,
        /// Zero-based index of the token in the signature.
        position: usize,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// Two signatures of different lengths were compared.
    #[error("LengthMismatch: signatures have {left} and {right} components")]
    LengthMismatch {
        /// Length of the left-hand signature.
        left: usize,
        /// Length of the right-hand signature.
        right: usize,
    },

    /// A signature without components was compared.
    #[error("EmptySignature: cannot compare signatures without components")]
    EmptySignature,
}

impl MinwiseError {
    pub(crate) fn input<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Input(msg.into())
    }
}
