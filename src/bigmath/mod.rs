//! Arbitrary-precision elementary functions over [`BigDecimal`].
//!
//! `BigDecimal` provides exact addition, subtraction and multiplication plus
//! precision-directed rounding; everything else the evaluator needs is built
//! here: guarded division, the exponential/logarithm family, trigonometric
//! and hyperbolic functions with their inverses, roots, and integer
//! combinatorics.
//!
//! # Precision model
//!
//! Every public operation takes a [`MathContext`] and computes internally at
//! `precision + GUARD_DIGITS` significant digits (more where errors compound,
//! e.g. across argument-reduction squarings), then rounds the result to the
//! context precision with the context rounding mode. Intermediate series
//! steps round half-even so directed context modes only apply once, at the
//! end.

pub(crate) mod combinatorics;
pub(crate) mod constants;
pub(crate) mod exp_log;
pub(crate) mod hyperbolic;
pub(crate) mod roots;
pub(crate) mod trig;

use crate::core::context::MathContext;
use crate::core::error::EvalError;
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::num::NonZeroU64;

/// Guard digits added on top of the context precision for internal work.
pub(crate) const GUARD_DIGITS: u32 = 10;

/// Working precision for a context: target precision plus guard digits.
pub(crate) fn working(ctx: &MathContext) -> u64 {
    u64::from(ctx.precision()) + u64::from(GUARD_DIGITS)
}

fn nonzero(digits: u64) -> NonZeroU64 {
    NonZeroU64::new(digits.max(1)).unwrap_or(NonZeroU64::MIN)
}

/// Round a value to the context precision with the context rounding mode.
pub(crate) fn round(value: &BigDecimal, ctx: &MathContext) -> BigDecimal {
    value.with_precision_round(nonzero(u64::from(ctx.precision())), ctx.rounding())
}

/// Round a value to `digits` significant digits, half-even.
pub(crate) fn round_to(value: &BigDecimal, digits: u64) -> BigDecimal {
    value.with_precision_round(nonzero(digits), RoundingMode::HalfEven)
}

/// `10^-digits`, the convergence threshold for series at a given precision.
pub(crate) fn epsilon(digits: u64) -> BigDecimal {
    BigDecimal::new(BigInt::from(1u8), i64::try_from(digits).unwrap_or(i64::MAX))
}

/// Multiply by a power of ten by shifting the exponent; exact.
pub(crate) fn shift_pow10(value: &BigDecimal, power: i64) -> BigDecimal {
    let (int, scale) = value.as_bigint_and_exponent();
    BigDecimal::new(int, scale - power)
}

/// Number of digits left of the decimal point; zero or negative for |x| < 1.
pub(crate) fn integer_digit_count(value: &BigDecimal) -> i64 {
    if value.is_zero() {
        return 0;
    }
    let (_, scale) = value.as_bigint_and_exponent();
    i64::try_from(value.digits()).unwrap_or(i64::MAX).saturating_sub(scale)
}

/// Whether the value is mathematically an integer.
pub(crate) fn is_integer(value: &BigDecimal) -> bool {
    let (_, scale) = value.normalized().into_bigint_and_exponent();
    scale <= 0
}

/// Exact integer form of the value, or `None` if it has a fractional part.
pub(crate) fn to_exact_bigint(value: &BigDecimal) -> Option<BigInt> {
    let (int, scale) = value.normalized().into_bigint_and_exponent();
    if scale > 0 {
        return None;
    }
    let zeros = u32::try_from(-scale).ok()?;
    Some(int * BigInt::from(10u8).pow(zeros))
}

/// Division rounded to the context precision with the context rounding mode.
///
/// Fails with [`EvalError::DivisionByZero`] when the divisor is exactly zero.
pub(crate) fn div(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
    ctx: &MathContext,
) -> Result<BigDecimal, EvalError> {
    div_raw(dividend, divisor, u64::from(ctx.precision()), ctx.rounding())
}

/// Division rounded half-even to `digits` significant digits.
pub(crate) fn div_to(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
    digits: u64,
) -> Result<BigDecimal, EvalError> {
    div_raw(dividend, divisor, digits, RoundingMode::HalfEven)
}

/// Division where the caller guarantees a non-zero divisor (series
/// denominators, constants). The zero fallback is unreachable.
pub(crate) fn div_unchecked(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
    digits: u64,
) -> BigDecimal {
    div_raw(dividend, divisor, digits, RoundingMode::HalfEven)
        .unwrap_or_else(|_| BigDecimal::zero())
}

/// Long division on the unscaled integers with two guard digits and a sticky
/// adjustment, then a single rounding step.
///
/// The quotient is first truncated toward zero with `digits + 2` significant
/// digits. When the division is inexact and the truncated quotient ends in a
/// zero digit, the last digit is nudged away from zero so the final rounding
/// can never sit on a false tie (half-modes) or a false exact value
/// (directed modes).
pub(crate) fn div_raw(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
    digits: u64,
    mode: RoundingMode,
) -> Result<BigDecimal, EvalError> {
    if divisor.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    if dividend.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let guard = i64::try_from(digits).unwrap_or(i64::MAX).saturating_add(2);
    let (a_int, a_scale) = dividend.as_bigint_and_exponent();
    let (b_int, b_scale) = divisor.as_bigint_and_exponent();
    let a_digits = i64::try_from(dividend.digits()).unwrap_or(i64::MAX);
    let b_digits = i64::try_from(divisor.digits()).unwrap_or(i64::MAX);

    // Scale the numerator so the integer quotient carries `guard` digits.
    let shift = (b_digits - a_digits).saturating_add(guard);
    let (numerator, applied_shift) = if shift > 0 {
        let power = u32::try_from(shift).unwrap_or(u32::MAX);
        (a_int * BigInt::from(10u8).pow(power), shift)
    } else {
        (a_int, 0)
    };

    let mut quotient = &numerator / &b_int;
    let remainder = &numerator % &b_int;
    if !remainder.is_zero() && (&quotient % BigInt::from(10u8)).is_zero() {
        // sticky digit: truncation went toward zero, so push the magnitude
        // back up by one unit in the last place
        if quotient.sign() == Sign::Minus || numerator.sign() != b_int.sign() {
            quotient -= 1;
        } else {
            quotient += 1;
        }
    }

    let scale = a_scale - b_scale + applied_shift;
    Ok(BigDecimal::new(quotient, scale).with_precision_round(nonzero(digits), mode))
}

/// Integer modulo: both operands must be non-negative integers.
pub(crate) fn modulo(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
    ctx: &MathContext,
) -> Result<BigDecimal, EvalError> {
    if divisor.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    let a = to_exact_bigint(dividend)
        .ok_or_else(|| EvalError::domain("modulo requires integer operands"))?;
    let b = to_exact_bigint(divisor)
        .ok_or_else(|| EvalError::domain("modulo requires integer operands"))?;
    if a.is_negative() || b.is_negative() {
        return Err(EvalError::domain("modulo requires non-negative operands"));
    }
    Ok(round(&BigDecimal::from(a % b), ctx))
}

/// Canonical plain-string rendering: normalized, no exponent notation.
pub(crate) fn to_plain_string(value: &BigDecimal) -> String {
    let (int, scale) = value.normalized().into_bigint_and_exponent();
    if int.is_zero() {
        return String::from("0");
    }
    let negative = int.sign() == Sign::Minus;
    let digits = int.magnitude().to_string();
    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    if scale <= 0 {
        out.push_str(&digits);
        for _ in 0..scale.unsigned_abs() {
            out.push('0');
        }
    } else {
        let frac_len = usize::try_from(scale).unwrap_or(usize::MAX);
        if digits.len() > frac_len {
            let (head, tail) = digits.split_at(digits.len() - frac_len);
            out.push_str(head);
            out.push('.');
            out.push_str(tail);
        } else {
            out.push_str("0.");
            for _ in 0..(frac_len - digits.len()) {
                out.push('0');
            }
            out.push_str(&digits);
        }
    }
    out
}
