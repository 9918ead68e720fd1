//! Constant values for the kcrypt library
//!
//! Curve constants are stored as big-endian hexadecimal strings so that the
//! arithmetic crates can parse them into arbitrary-precision integers.

#![no_std]
#![forbid(unsafe_code)]

pub mod traditional;
