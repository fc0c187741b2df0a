//! Constants for the RSA key-wrapping engine

/// RSA with 512-bit modulus (the original deployment's default; weak by
/// modern standards, kept for compatibility and tests)
pub const RSA_MODULUS_512: u64 = 512;

/// RSA with 1024-bit modulus
pub const RSA_MODULUS_1024: u64 = 1024;

/// RSA with 2048-bit modulus
pub const RSA_MODULUS_2048: u64 = 2048;

/// Common RSA public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Miller-Rabin rounds used during prime generation
pub const MILLER_RABIN_ROUNDS: usize = 16;

/// Fixed symmetric-key length the wrap/unwrap pair agrees on.
///
/// Converting key bytes to a big integer drops leading zero bytes, so the
/// unwrap side re-pads to this length.
pub const WRAP_TARGET_KEY_LEN: usize = 16;
