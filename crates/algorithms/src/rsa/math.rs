//! Modular arithmetic helpers for the RSA engine

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Iterative extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`. Signed
/// intermediates are required; `x` in particular is negative about half
/// the time.
pub(crate) fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        let next_s = &old_s - &q * &s;
        let next_t = &old_t - &q * &t;
        old_r = std::mem::replace(&mut r, next_r);
        old_s = std::mem::replace(&mut s, next_s);
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Modular inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`
pub(crate) fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a_int = BigInt::from(a.clone());
    let m_int = BigInt::from(m.clone());

    let (g, x, _) = extended_gcd(&a_int, &m_int);
    if !g.is_one() {
        return None;
    }

    // Normalize into [0, m)
    let inverse = ((x % &m_int) + &m_int) % &m_int;
    inverse.to_biguint()
}
