//! RSA keypair generation and the modular transform used for key wrapping
//!
//! This is the raw (textbook) transform with no padding scheme: a message
//! integer is raised to the public exponent modulo `n`, and recovered with
//! the private exponent. It is deterministic and malleable, which is
//! acceptable here only because the sole payload is a fresh random AES
//! key no wider than 32 bytes, far below any practical modulus. Never
//! route structured or attacker-chosen data through it.
//!
//! Keys also have a decimal text form, `"<modulus>,<exponent>"`, used by
//! the sidecar files the orchestration layer reads and writes.

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use api::error::{validate, Error, Result};
use api::traits::KeyWrap;
use params::asymmetric::{MILLER_RABIN_ROUNDS, RSA_PUBLIC_EXPONENT};

mod math;
mod prime;


/// RSA public key: modulus `n` and public exponent `e`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
}

/// RSA private key: modulus `n` and private exponent `d`
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    n: BigUint,
    d: BigUint,
}

/// An RSA keypair holding both halves
#[derive(Clone)]
pub struct RsaKeyPair {
    public: RsaPublicKey,
    private: RsaPrivateKey,
}

fn parse_decimal(text: &str, context: &'static str) -> Result<BigUint> {
    text.trim()
        .parse::<BigUint>()
        .map_err(|_| Error::key(context, format!("'{}' is not a decimal integer", text.trim())))
}

impl RsaPublicKey {
    /// Assemble a public key from its raw components
    pub fn new(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    /// The modulus `n`
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// The public exponent `e`
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Width of the modulus in bits
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Serialize as `"<modulus>,<exponent>"` in decimal
    pub fn to_text(&self) -> String {
        format!("{},{}", self.n, self.e)
    }

    /// Parse the decimal `"<modulus>,<exponent>"` form
    pub fn from_text(text: &str) -> Result<Self> {
        let (n_text, e_text) = text.split_once(',').ok_or_else(|| {
            Error::key("RSA public key text", "expected '<modulus>,<exponent>'")
        })?;
        Ok(Self {
            n: parse_decimal(n_text, "RSA public key text")?,
            e: parse_decimal(e_text, "RSA public key text")?,
        })
    }
}

impl RsaPrivateKey {
    /// Assemble a private key from its raw components
    pub fn new(n: BigUint, d: BigUint) -> Self {
        Self { n, d }
    }

    /// The modulus `n`
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// Serialize as `"<modulus>,<exponent>"` in decimal
    pub fn to_text(&self) -> String {
        format!("{},{}", self.n, self.d)
    }

    /// Parse the decimal `"<modulus>,<exponent>"` form
    pub fn from_text(text: &str) -> Result<Self> {
        let (n_text, d_text) = text.split_once(',').ok_or_else(|| {
            Error::key("RSA private key text", "expected '<modulus>,<exponent>'")
        })?;
        Ok(Self {
            n: parse_decimal(n_text, "RSA private key text")?,
            d: parse_decimal(d_text, "RSA private key text")?,
        })
    }
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("n", &self.n)
            .field("d", &"[REDACTED]")
            .finish()
    }
}

impl RsaKeyPair {
    /// Generate a fresh keypair with a modulus of roughly `modulus_bits` bits.
    ///
    /// Both primes are drawn at exactly `modulus_bits / 2` bits, so the
    /// product is either `modulus_bits` or `modulus_bits - 1` bits wide.
    /// The public exponent is 65537 when coprime with the totient and the
    /// smallest coprime odd exponent from 3 otherwise.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R, modulus_bits: u64) -> Result<Self> {
        let (keypair, _, _) = Self::generate_parts(rng, modulus_bits)?;
        Ok(keypair)
    }

    // Split out so the tests can reach the prime factors and verify the
    // exponents against the totient.
    pub(crate) fn generate_parts<R: CryptoRng + RngCore>(
        rng: &mut R,
        modulus_bits: u64,
    ) -> Result<(Self, BigUint, BigUint)> {
        validate::parameter(
            modulus_bits >= 64,
            "RSA modulus width",
            "must be at least 64 bits",
        )?;
        validate::parameter(modulus_bits % 2 == 0, "RSA modulus width", "must be even")?;

        let half = modulus_bits / 2;
        let p = prime::generate_prime(half, MILLER_RABIN_ROUNDS, rng)?;
        let mut q = prime::generate_prime(half, MILLER_RABIN_ROUNDS, rng)?;
        while q == p {
            q = prime::generate_prime(half, MILLER_RABIN_ROUNDS, rng)?;
        }

        let n = &p * &q;
        let phi = (&p - 1u32) * (&q - 1u32);

        let mut e = BigUint::from(RSA_PUBLIC_EXPONENT);
        if e >= phi || !e.gcd(&phi).is_one() {
            e = BigUint::from(3u32);
            while !e.gcd(&phi).is_one() {
                e += 2u32;
            }
        }

        let d = math::mod_inverse(&e, &phi).ok_or(Error::Arithmetic {
            context: "RSA private exponent",
        })?;

        let keypair = Self {
            public: RsaPublicKey { n: n.clone(), e },
            private: RsaPrivateKey { n, d },
        };
        Ok((keypair, p, q))
    }

    /// The public half
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }

    /// The private half
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }
}

/// Raise a message integer to the public exponent modulo `n`.
///
/// The message must be strictly smaller than the modulus; the transform
/// is not defined past it and silently wrapping would corrupt the key
/// being protected.
pub fn transform(public_key: &RsaPublicKey, m: &BigUint) -> Result<BigUint> {
    validate::parameter(
        m < &public_key.n,
        "RSA message",
        "must be smaller than the modulus",
    )?;
    Ok(m.modpow(&public_key.e, &public_key.n))
}

/// Recover a message integer with the private exponent modulo `n`
pub fn inverse_transform(private_key: &RsaPrivateKey, c: &BigUint) -> Result<BigUint> {
    validate::parameter(
        c < &private_key.n,
        "RSA ciphertext",
        "must be smaller than the modulus",
    )?;
    Ok(c.modpow(&private_key.d, &private_key.n))
}

/// Render a recovered message integer as exactly `target_len` bytes.
///
/// Big-endian conversion drops leading zero bytes, so short results are
/// left-padded back to the target length. A result wider than the target
/// keeps only its low-order bytes, matching the fixed-width key slot the
/// wrapped value came from.
pub fn recover_fixed_len(m: &BigUint, target_len: usize) -> Vec<u8> {
    if m.is_zero() {
        return vec![0u8; target_len];
    }
    let bytes = m.to_bytes_be();
    if bytes.len() >= target_len {
        bytes[bytes.len() - target_len..].to_vec()
    } else {
        let mut out = vec![0u8; target_len - bytes.len()];
        out.extend_from_slice(&bytes);
        out
    }
}

/// RSA key wrapping scheme
pub enum Rsa {}

impl KeyWrap for Rsa {
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;
    type KeyPair = RsaKeyPair;

    fn name() -> &'static str {
        "RSA"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R, modulus_bits: u64) -> Result<RsaKeyPair> {
        RsaKeyPair::generate(rng, modulus_bits)
    }

    fn public_key(keypair: &RsaKeyPair) -> RsaPublicKey {
        keypair.public.clone()
    }

    fn private_key(keypair: &RsaKeyPair) -> RsaPrivateKey {
        keypair.private.clone()
    }

    fn wrap_key(public_key: &RsaPublicKey, key_bytes: &[u8]) -> Result<Vec<u8>> {
        let m = BigUint::from_bytes_be(key_bytes);
        let c = transform(public_key, &m)?;
        Ok(c.to_bytes_be())
    }

    fn unwrap_key(
        private_key: &RsaPrivateKey,
        wrapped: &[u8],
        target_len: usize,
    ) -> Result<Vec<u8>> {
        let c = BigUint::from_bytes_be(wrapped);
        let m = inverse_transform(private_key, &c)?;
        Ok(recover_fixed_len(&m, target_len))
    }
}
