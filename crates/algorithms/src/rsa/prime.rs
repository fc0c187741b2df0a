//! Probable-prime generation
//!
//! Candidates are drawn with their top and bottom bits forced so that
//! every candidate has the exact requested width and is odd, then run
//! through trial division by the primes below 100 and a configurable
//! number of Miller-Rabin rounds. Each round of the test catches a
//! composite with probability at least 3/4, so 16 rounds bound the
//! false-positive rate at 2^-32.

use api::error::{validate, Result};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// Primes below 100, used for cheap trial division before Miller-Rabin
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Miller-Rabin primality test with trial-division prefilter.
///
/// Returns `true` when `candidate` is prime or passes all `rounds`
/// rounds as a probable prime.
pub(crate) fn is_probable_prime<R: CryptoRng + RngCore>(
    candidate: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> bool {
    let two = BigUint::from(2u32);
    if candidate < &two {
        return false;
    }
    for small in SMALL_PRIMES {
        let small = BigUint::from(small);
        if candidate == &small {
            return true;
        }
        if (candidate % &small).is_zero() {
            return false;
        }
    }

    // Write candidate - 1 as 2^r * d with d odd. Any candidate reaching
    // here is odd and above 100, so r >= 1 and the witness range [2, n-1)
    // is never empty.
    let n_minus_1 = candidate - 1u32;
    let r = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> r;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_1);
        let mut x = a.modpow(&d, candidate);
        if x.is_one() || x == n_minus_1 {
            continue 'witness;
        }
        for _ in 0..r - 1 {
            x = x.modpow(&two, candidate);
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Generate a probable prime of exactly `bits` bits
pub(crate) fn generate_prime<R: CryptoRng + RngCore>(
    bits: u64,
    rounds: usize,
    rng: &mut R,
) -> Result<BigUint> {
    validate::parameter(bits >= 2, "prime width", "must be at least 2 bits")?;

    loop {
        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);
        if is_probable_prime(&candidate, rounds, rng) {
            return Ok(candidate);
        }
    }
}
