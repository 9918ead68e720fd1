//! Common implementations and shared functionality for the kcrypt library
//!
//! This crate provides the modular arithmetic and the curve parameter types
//! used by the point arithmetic and signature crates.

#![forbid(unsafe_code)]

pub mod ec_common;
pub mod math_common;

pub use ec_common::{CurvePoint, DomainParameters};
