//! AES block cipher implementation
//!
//! Implements the Rijndael cipher of FIPS 197 for all three key sizes,
//! using static lookup tables for the byte substitutions. Table lookups
//! are not constant-time; this implementation trades side-channel
//! resistance for byte-for-byte compatibility with the system it was
//! extracted from.
//!
//! The 16-byte state is kept as a flat array in column-major order:
//! byte `i` of a block sits at row `i % 4` of column `i / 4`.

use api::error::{validate, Error, Result};
use api::traits::{BlockCipher, CipherAlgorithm};
use api::types::SecretBytes;
use params::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE,
    AES256_ROUNDS, AES_BLOCK_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

mod tables;
use tables::{INV_S_BOX, RCON, S_BOX};

#[cfg(test)]
mod tests;

/// Multiply by x in GF(2^8) with the AES reduction polynomial
#[inline(always)]
fn xtime(a: u8) -> u8 {
    (a << 1) ^ (((a >> 7) & 1) * 0x1b)
}

/// Multiply two bytes in GF(2^8)
#[inline(always)]
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 == 1 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Substitute each byte of a key-schedule word through the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let [a, b, c, d] = word.to_be_bytes();
    u32::from_be_bytes([
        S_BOX[a as usize],
        S_BOX[b as usize],
        S_BOX[c as usize],
        S_BOX[d as usize],
    ])
}

/// The standard key-expansion recurrence, shared by all three key sizes.
///
/// The first `Nk` words are the key itself; each later word XORs the word
/// `Nk` positions back with either a rotated/substituted/rcon-mixed copy of
/// the previous word (on `Nk` boundaries) or, for 256-bit keys only, a
/// substituted copy four words past each boundary.
fn expand_words(key: &[u8], words: &mut [u32]) {
    let nk = key.len() / 4;
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        words[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in nk..words.len() {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
        } else if nk == 8 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }
}

/// SubBytes step
fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = S_BOX[*byte as usize];
    }
}

/// InvSubBytes step
fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = INV_S_BOX[*byte as usize];
    }
}

/// ShiftRows step: row `r` rotates left by `r` positions
fn shift_rows(state: &mut [u8; 16]) {
    let prev = *state;
    for r in 1..4 {
        for c in 0..4 {
            state[c * 4 + r] = prev[((c + r) % 4) * 4 + r];
        }
    }
}

/// InvShiftRows step: row `r` rotates right by `r` positions
fn inv_shift_rows(state: &mut [u8; 16]) {
    let prev = *state;
    for r in 1..4 {
        for c in 0..4 {
            state[c * 4 + r] = prev[((c + 4 - r) % 4) * 4 + r];
        }
    }
}

/// MixColumns step: each column is multiplied by the fixed MDS matrix
/// with rows (02 03 01 01)
fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
        col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
        col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
        col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
    }
}

/// InvMixColumns step: the inverse matrix rows are (0e 0b 0d 09)
fn inv_mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        col[0] = gf_mul(a0, 14) ^ gf_mul(a1, 11) ^ gf_mul(a2, 13) ^ gf_mul(a3, 9);
        col[1] = gf_mul(a0, 9) ^ gf_mul(a1, 14) ^ gf_mul(a2, 11) ^ gf_mul(a3, 13);
        col[2] = gf_mul(a0, 13) ^ gf_mul(a1, 9) ^ gf_mul(a2, 14) ^ gf_mul(a3, 11);
        col[3] = gf_mul(a0, 11) ^ gf_mul(a1, 13) ^ gf_mul(a2, 9) ^ gf_mul(a3, 14);
    }
}

/// AddRoundKey step
#[inline(always)]
fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for (byte, key_byte) in state.iter_mut().zip(round_key) {
        *byte ^= key_byte;
    }
}

/// Forward round structure shared by all key sizes
fn encrypt_state(state: &mut [u8; 16], round_keys: &[u8], rounds: usize) {
    add_round_key(state, &round_keys[0..16]);
    for round in 1..rounds {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, &round_keys[round * 16..(round + 1) * 16]);
    }
    // Final round has no MixColumns
    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, &round_keys[rounds * 16..(rounds + 1) * 16]);
}

/// Inverse round structure: the exact mirror of [`encrypt_state`].
///
/// The ordering (final key first, then inverse shift and substitution,
/// with InvMixColumns between the key XOR and the shift in every
/// intermediate round) must match exactly; a wrong order produces garbage
/// rather than an error, which is why the known-answer tests exist.
fn decrypt_state(state: &mut [u8; 16], round_keys: &[u8], rounds: usize) {
    add_round_key(state, &round_keys[rounds * 16..(rounds + 1) * 16]);
    inv_shift_rows(state);
    inv_sub_bytes(state);
    for round in (1..rounds).rev() {
        add_round_key(state, &round_keys[round * 16..(round + 1) * 16]);
        inv_mix_columns(state);
        inv_shift_rows(state);
        inv_sub_bytes(state);
    }
    add_round_key(state, &round_keys[0..16]);
}

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

/// Type-level constants for AES-192
pub enum Aes192Algorithm {}

impl CipherAlgorithm for Aes192Algorithm {
    const KEY_SIZE: usize = AES192_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

macro_rules! aes_variant {
    ($name:ident, $algorithm:ty, $doc:literal,
     key = $key_size:literal, rounds = $rounds:expr, schedule = $schedule:literal) => {
        #[doc = $doc]
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name {
            round_keys: SecretBytes<$schedule>,
        }

        impl $name {
            /// Expand the key into the full round-key schedule
            fn expand_key(key: &[u8; $key_size]) -> SecretBytes<$schedule> {
                let mut words = [0u32; $schedule / 4];
                expand_words(key, &mut words);

                let mut round_keys = SecretBytes::<$schedule>::zeroed();
                for (chunk, word) in round_keys.as_mut_slice().chunks_exact_mut(4).zip(&words) {
                    chunk.copy_from_slice(&word.to_be_bytes());
                }
                words.zeroize();
                round_keys
            }
        }

        impl BlockCipher for $name {
            type Algorithm = $algorithm;
            type Key = SecretBytes<$key_size>;

            fn new(key: &Self::Key) -> Self {
                let mut key_bytes = [0u8; $key_size];
                key_bytes.copy_from_slice(key.as_slice());
                let round_keys = Self::expand_key(&key_bytes);
                key_bytes.zeroize();
                $name { round_keys }
            }

            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

                let mut state = [0u8; 16];
                state.copy_from_slice(block);
                encrypt_state(&mut state, self.round_keys.as_slice(), $rounds);
                block.copy_from_slice(&state);
                Ok(())
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

                let mut state = [0u8; 16];
                state.copy_from_slice(block);
                decrypt_state(&mut state, self.round_keys.as_slice(), $rounds);
                block.copy_from_slice(&state);
                Ok(())
            }

            fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
                SecretBytes::random(rng)
            }
        }
    };
}

aes_variant!(
    Aes128,
    Aes128Algorithm,
    "AES-128 block cipher (10 rounds)",
    key = 16,
    rounds = AES128_ROUNDS,
    schedule = 176
);
aes_variant!(
    Aes192,
    Aes192Algorithm,
    "AES-192 block cipher (12 rounds)",
    key = 24,
    rounds = AES192_ROUNDS,
    schedule = 208
);
aes_variant!(
    Aes256,
    Aes256Algorithm,
    "AES-256 block cipher (14 rounds)",
    key = 32,
    rounds = AES256_ROUNDS,
    schedule = 240
);

/// Supported AES key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 16-byte key, 10 rounds
    Aes128,
    /// 24-byte key, 12 rounds
    Aes192,
    /// 32-byte key, 14 rounds
    Aes256,
}

impl KeySize {
    /// Key length in bytes
    pub fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_KEY_SIZE,
            KeySize::Aes192 => AES192_KEY_SIZE,
            KeySize::Aes256 => AES256_KEY_SIZE,
        }
    }
}

/// An AES key of any supported size.
///
/// The orchestration layer works with keys whose size is only known at
/// run time (they arrive as decoded text or unwrapped bytes); this type
/// validates the length once at the boundary and dispatches to the right
/// cipher variant afterwards.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub enum AesKey {
    /// 16-byte key
    Aes128(SecretBytes<16>),
    /// 24-byte key
    Aes192(SecretBytes<24>),
    /// 32-byte key
    Aes256(SecretBytes<32>),
}

impl AesKey {
    /// Validate and take ownership of raw key bytes.
    ///
    /// Only lengths of 16, 24, or 32 bytes are accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            AES128_KEY_SIZE => {
                let mut key = [0u8; AES128_KEY_SIZE];
                key.copy_from_slice(bytes);
                Ok(AesKey::Aes128(SecretBytes::new(key)))
            }
            AES192_KEY_SIZE => {
                let mut key = [0u8; AES192_KEY_SIZE];
                key.copy_from_slice(bytes);
                Ok(AesKey::Aes192(SecretBytes::new(key)))
            }
            AES256_KEY_SIZE => {
                let mut key = [0u8; AES256_KEY_SIZE];
                key.copy_from_slice(bytes);
                Ok(AesKey::Aes256(SecretBytes::new(key)))
            }
            other => Err(Error::key(
                "AES key",
                format!("length must be 16, 24, or 32 bytes, got {}", other),
            )),
        }
    }

    /// Generate a fresh key of the given size from a CSPRNG
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, size: KeySize) -> Self {
        match size {
            KeySize::Aes128 => AesKey::Aes128(SecretBytes::random(rng)),
            KeySize::Aes192 => AesKey::Aes192(SecretBytes::random(rng)),
            KeySize::Aes256 => AesKey::Aes256(SecretBytes::random(rng)),
        }
    }

    /// Key length in bytes
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Borrow the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AesKey::Aes128(key) => key.as_slice(),
            AesKey::Aes192(key) => key.as_slice(),
            AesKey::Aes256(key) => key.as_slice(),
        }
    }
}

impl std::fmt::Debug for AesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AesKey::Aes128(_) => "Aes128",
            AesKey::Aes192(_) => "Aes192",
            AesKey::Aes256(_) => "Aes256",
        };
        write!(f, "AesKey::{}([REDACTED])", name)
    }
}
