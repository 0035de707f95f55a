//! High-precision mathematical constants, computed on demand.

use super::{div_unchecked, epsilon, round_to};
use crate::bigmath::exp_log;
use bigdecimal::BigDecimal;
use num_traits::{One, Signed};

/// π to `digits` significant digits.
///
/// Machin's formula: π = 16·arctan(1/5) − 4·arctan(1/239).
/// Both series converge geometrically (≥ 1.39 digits per term).
pub(crate) fn pi(digits: u64) -> BigDecimal {
    let wp = digits + 10;
    let atan_5 = arctan_reciprocal(5, wp);
    let atan_239 = arctan_reciprocal(239, wp);
    let value = BigDecimal::from(16) * atan_5 - BigDecimal::from(4) * atan_239;
    round_to(&value, digits)
}

/// e to `digits` significant digits, via the exponential series at 1.
pub(crate) fn e(digits: u64) -> BigDecimal {
    exp_log::exp_to_digits(&BigDecimal::one(), digits)
}

/// arctan(1/k) for an integer k ≥ 2 by the Gregory series
/// Σ (−1)ⁿ / ((2n+1)·k^(2n+1)).
fn arctan_reciprocal(k: u32, digits: u64) -> BigDecimal {
    let wp = digits + 5;
    let threshold = epsilon(wp + 2);
    let k_dec = BigDecimal::from(k);
    let k_squared = &k_dec * &k_dec;

    let mut power = div_unchecked(&BigDecimal::one(), &k_dec, wp);
    let mut sum = power.clone();
    let mut n = 1u64;
    loop {
        power = div_unchecked(&power, &k_squared, wp);
        let term = div_unchecked(&power, &BigDecimal::from(2 * n + 1), wp);
        if n % 2 == 1 {
            sum -= &term;
        } else {
            sum += &term;
        }
        if term.abs() < threshold {
            break;
        }
        n += 1;
    }
    round_to(&sum, digits)
}
