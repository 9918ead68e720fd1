//! Public API traits and types for the kcrypt library
//!
//! This crate provides the public API surface for the kcrypt workspace: the
//! error type shared by every layer and the trait that signature schemes
//! implement.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::Signature;

// Re-export trait modules for direct access
pub use traits::signature;
