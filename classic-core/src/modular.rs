// File:    modular.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Modular arithmetic primitives used by the Affine and Hill ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `g = a*x + b*y`, where `g` is the gcd of
/// `a` and `b`. When `a == 0` the result is `(b, 0, 1)`.
///
/// Iterative, so the stack does not grow with the magnitude of the inputs.
#[must_use]
pub const fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut prev_rem, mut rem) = (a, b);
    let (mut prev_coef_a, mut coef_a) = (1_i64, 0_i64);
    let (mut prev_coef_b, mut coef_b) = (0_i64, 1_i64);

    while rem != 0 {
        let quotient = prev_rem / rem;
        (prev_rem, rem) = (rem, prev_rem - quotient * rem);
        (prev_coef_a, coef_a) = (coef_a, prev_coef_a - quotient * coef_a);
        (prev_coef_b, coef_b) = (coef_b, prev_coef_b - quotient * coef_b);
    }

    (prev_rem, prev_coef_a, prev_coef_b)
}

/// Greatest common divisor, always non-negative.
#[must_use]
pub const fn gcd(a: i64, b: i64) -> i64 {
    extended_gcd(a, b).0.abs()
}

/// Multiplicative inverse of `a` modulo `m`.
///
/// Returns the unique value in `[0, m)` with `a * inv ≡ 1 (mod m)`, or
/// `None` when `gcd(a, m) != 1` or `m` is not positive.
#[must_use]
pub const fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m <= 0 {
        return None;
    }
    let (divisor, coef, _) = extended_gcd(a.rem_euclid(m), m);
    if divisor == 1 { Some(coef.rem_euclid(m)) } else { None }
}

/// Computes `base^exp mod modulus` by repeated squaring.
///
/// Returns `None` when `modulus` is not positive.
#[must_use]
pub fn mod_pow(base: i64, exp: u64, modulus: i64) -> Option<i64> {
    if modulus <= 0 {
        return None;
    }
    let wide_mod = i128::from(modulus);
    let mut result: i128 = 1 % wide_mod;
    let mut square = i128::from(base).rem_euclid(wide_mod);
    let mut remaining = exp;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result * square % wide_mod;
        }
        square = square * square % wide_mod;
        remaining >>= 1;
    }

    // `result < modulus`, which fits in i64.
    i64::try_from(result).ok()
}
