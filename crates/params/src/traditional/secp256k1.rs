//! Constants for the secp256k1 Koblitz curve (SEC 2, section 2.4.1)
//!
//! Curve equation: y² = x³ + ax + b over F_p

/// Prime field modulus p = 2^256 - 2^32 - 2^9 - 2^8 - 2^7 - 2^6 - 2^4 - 1
pub const SECP256K1_P: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";

/// Curve coefficient a
pub const SECP256K1_A: &str = "0";

/// Curve coefficient b
pub const SECP256K1_B: &str = "7";

/// Base point x-coordinate
pub const SECP256K1_GX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";

/// Base point y-coordinate
pub const SECP256K1_GY: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

/// Order n of the subgroup generated by the base point
pub const SECP256K1_N: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

/// Cofactor h
pub const SECP256K1_H: &str = "1";
