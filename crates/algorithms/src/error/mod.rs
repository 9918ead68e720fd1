//! Error handling for elliptic curve primitives

use std::borrow::Cow;

use kcrypt_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for elliptic curve primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// An input point does not satisfy the curve equation
    #[error("Point not on curve in {context}")]
    PointNotOnCurve {
        /// Operation that received the point
        context: &'static str,
    },

    /// Attempted inversion of zero
    #[error("Invalid inverse in {context}")]
    InvalidInverse {
        /// Operation that attempted the inversion
        context: &'static str,
    },
}

// Add convenience helper
impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for elliptic curve primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "ec primitives",
                message: format!("{}: {}", name, reason),
            },
            Error::PointNotOnCurve { context } => CoreError::PointNotOnCurve { context },
            Error::InvalidInverse { context } => CoreError::InvalidInverse { context },
        }
    }
}

// Errors raised by the shared arithmetic layer
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PointNotOnCurve { context } => Error::PointNotOnCurve { context },
            CoreError::InvalidInverse { context } => Error::InvalidInverse { context },
            other => Error::param(other.context(), other.to_string()),
        }
    }
}

// Include the validation submodule
pub mod validate;
