//! Error type definitions for curve and signature operations

use thiserror::Error as ThisError;

/// Which half of an ECDSA signature an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureComponent {
    /// The `r` component
    R,
    /// The `s` component
    S,
}

impl core::fmt::Display for SignatureComponent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::R => f.write_str("r"),
            Self::S => f.write_str("s"),
        }
    }
}

/// Primary error type for curve and signature operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A point failed the curve-equation check
    #[error("{context}: point is not on the curve")]
    PointNotOnCurve {
        context: &'static str,
    },

    /// Attempted inversion of an element congruent to zero
    #[error("{context}: element has no multiplicative inverse")]
    InvalidInverse {
        context: &'static str,
    },

    /// A signature component lies outside `[1, n-1]`
    #[error("{context}: signature component {component} is out of range")]
    InvalidSignatureComponent {
        context: &'static str,
        component: SignatureComponent,
    },

    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for curve and signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context label of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::PointNotOnCurve { .. } => Self::PointNotOnCurve { context },
            Self::InvalidInverse { .. } => Self::InvalidInverse { context },
            Self::InvalidSignatureComponent { component, .. } => {
                Self::InvalidSignatureComponent { context, component }
            }
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Shorthand to create an `InvalidKey` error
    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// The context label attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::PointNotOnCurve { context }
            | Self::InvalidInverse { context }
            | Self::InvalidSignatureComponent { context, .. }
            | Self::InvalidKey { context, .. }
            | Self::InvalidParameter { context, .. } => context,
        }
    }
}
