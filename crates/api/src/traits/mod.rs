//! Trait definitions for kcrypt schemes

pub mod signature;

pub use signature::Signature;
