//! Exponential, logarithm and power functions.

use super::{
    div_to, div_unchecked, epsilon, integer_digit_count, is_integer, round, round_to,
    shift_pow10, to_exact_bigint, working,
};
use crate::bigmath::roots::sqrt_positive;
use crate::core::context::MathContext;
use crate::core::error::EvalError;
use bigdecimal::BigDecimal;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Largest admissible |x| for `exp`; beyond this the result exponent would
/// leave the representable range.
const MAX_EXP_ARGUMENT: i64 = 100_000_000;

/// Largest admissible |n| for integer exponentiation.
const MAX_INT_EXPONENT: i64 = 999_999_999;

/// e^x rounded to the context precision.
pub(crate) fn exp(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let value = exp_wp(x, working(ctx))?;
    Ok(round(&value, ctx))
}

/// e^x at `digits` significant digits for callers that manage their own
/// guard digits; the argument must be within range (used for the constant e).
pub(crate) fn exp_to_digits(x: &BigDecimal, digits: u64) -> BigDecimal {
    exp_wp(x, digits).unwrap_or_else(|_| BigDecimal::zero())
}

/// e^x at working precision `wp`.
///
/// Argument reduction halves x until |x| ≤ 1/2, the Taylor series converges
/// on the reduced argument, and repeated squaring undoes the reduction. The
/// squaring chain compounds relative error, so the series runs with one
/// extra guard digit per halving.
pub(crate) fn exp_wp(x: &BigDecimal, wp: u64) -> Result<BigDecimal, EvalError> {
    if x.is_zero() {
        return Ok(BigDecimal::one());
    }
    if x.abs() > BigDecimal::from(MAX_EXP_ARGUMENT) {
        return Err(EvalError::PrecisionOverflow);
    }

    let half = BigDecimal::new(5.into(), 1);
    let mut reduced = x.clone();
    let mut halvings = 0u64;
    while reduced.abs() > half {
        reduced = reduced * &half;
        halvings += 1;
    }

    let wp2 = wp + halvings + 5;
    let threshold = epsilon(wp2 + 2);
    let mut term = BigDecimal::one();
    let mut sum = BigDecimal::one();
    let mut n = 1u64;
    loop {
        term = div_unchecked(&(&term * &reduced), &BigDecimal::from(n), wp2);
        sum += &term;
        if term.abs() < threshold {
            break;
        }
        n += 1;
    }

    let mut result = sum;
    for _ in 0..halvings {
        result = round_to(&(&result * &result), wp2);
    }
    Ok(round_to(&result, wp))
}

/// Natural logarithm rounded to the context precision; domain x > 0.
pub(crate) fn ln(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let value = ln_wp(x, working(ctx))?;
    Ok(round(&value, ctx))
}

/// Natural logarithm at working precision `wp`.
pub(crate) fn ln_wp(x: &BigDecimal, wp: u64) -> Result<BigDecimal, EvalError> {
    if !x.is_positive() {
        return Err(EvalError::domain("ln requires a positive argument"));
    }
    if x == &BigDecimal::one() {
        return Ok(BigDecimal::zero());
    }

    // x = m · 10^k; ln x = ln m + k·ln 10. Keeping m below 3 means an
    // argument near 1 always lands at k = 0, so the small result is never
    // formed by cancelling two large terms.
    let mut k = integer_digit_count(x) - 1;
    let mut mantissa = shift_pow10(x, -k);
    if mantissa >= BigDecimal::from(3) {
        mantissa = shift_pow10(&mantissa, -1);
        k += 1;
    }
    let wp2 = wp + 8;
    let mut value = ln_near_one(&mantissa, wp2);
    if k != 0 {
        value += BigDecimal::from(k) * ln_ten(wp2);
    }
    Ok(round_to(&value, wp))
}

/// ln 10 at `digits` significant digits.
pub(crate) fn ln_ten(digits: u64) -> BigDecimal {
    ln_near_one(&BigDecimal::from(10), digits)
}

/// ln m for m in roughly [0.3, 10].
///
/// Repeated square roots pull m into (0.9, 1.1); then
/// ln y = 2·artanh((y−1)/(y+1)) with the odd-power series, and each square
/// root taken is undone by doubling.
fn ln_near_one(m: &BigDecimal, digits: u64) -> BigDecimal {
    let wp = digits + 5;
    let one = BigDecimal::one();
    let tenth = BigDecimal::new(1.into(), 1);

    let mut y = m.clone();
    let mut doublings = 0u64;
    while (&y - &one).abs() > tenth {
        y = sqrt_positive(&y, wp + doublings + 5);
        doublings += 1;
    }

    let u = div_unchecked(&(&y - &one), &(&y + &one), wp);
    let u_squared = round_to(&(&u * &u), wp);
    let threshold = epsilon(wp + 2);
    let mut power = u.clone();
    let mut sum = u;
    let mut n = 1u64;
    loop {
        power = round_to(&(&power * &u_squared), wp);
        let term = div_unchecked(&power, &BigDecimal::from(2 * n + 1), wp);
        sum += &term;
        if term.abs() < threshold {
            break;
        }
        n += 1;
    }

    // ln m = 2^doublings · 2 · artanh(u)
    let mut value = sum;
    for _ in 0..=doublings {
        value = &value + &value;
    }
    round_to(&value, digits)
}

/// Base-2 logarithm; domain x > 0.
pub(crate) fn log2(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx) + 5;
    let value = div_to(&ln_wp(x, wp)?, &ln_wp(&BigDecimal::from(2), wp)?, wp)?;
    Ok(round(&value, ctx))
}

/// Base-10 logarithm; domain x > 0.
pub(crate) fn log10(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx) + 5;
    let value = div_to(&ln_wp(x, wp)?, &ln_ten(wp), wp)?;
    Ok(round(&value, ctx))
}

/// Logarithm of `x` in base `base`; domain x > 0, base > 0, base ≠ 1.
pub(crate) fn log_base(
    x: &BigDecimal,
    base: &BigDecimal,
    ctx: &MathContext,
) -> Result<BigDecimal, EvalError> {
    if !base.is_positive() {
        return Err(EvalError::domain("logBase requires a positive base"));
    }
    if base == &BigDecimal::one() {
        return Err(EvalError::domain("logBase base must not be 1"));
    }
    let wp = working(ctx) + 5;
    let value = div_to(&ln_wp(x, wp)?, &ln_wp(base, wp)?, wp)?;
    Ok(round(&value, ctx))
}

/// base^exponent.
///
/// Integer exponents (any base, either sign) use binary exponentiation;
/// non-integer exponents require a positive base and evaluate as
/// exp(exponent · ln base).
pub(crate) fn pow(
    base: &BigDecimal,
    exponent: &BigDecimal,
    ctx: &MathContext,
) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx);
    if is_integer(exponent) {
        let n = to_exact_bigint(exponent)
            .and_then(|n| n.to_i64())
            .filter(|n| n.checked_abs().is_some_and(|a| a <= MAX_INT_EXPONENT))
            .ok_or(EvalError::PrecisionOverflow)?;
        let value = int_pow(base, n, wp)?;
        return Ok(round(&value, ctx));
    }

    if base.is_zero() {
        if exponent.is_positive() {
            return Ok(BigDecimal::zero());
        }
        return Err(EvalError::DivisionByZero);
    }
    if base.is_negative() {
        return Err(EvalError::domain(
            "a negative base requires an integer exponent",
        ));
    }
    let wp2 = wp + 5;
    let log = ln_wp(base, wp2)?;
    let value = exp_wp(&round_to(&(exponent * log), wp2), wp)?;
    Ok(round(&value, ctx))
}

/// Exponentiation by squaring at working precision.
fn int_pow(base: &BigDecimal, exponent: i64, wp: u64) -> Result<BigDecimal, EvalError> {
    if exponent == 0 {
        return Ok(BigDecimal::one());
    }
    if base.is_zero() {
        if exponent > 0 {
            return Ok(BigDecimal::zero());
        }
        return Err(EvalError::DivisionByZero);
    }

    let wp2 = wp + 20;
    let mut result = BigDecimal::one();
    let mut square = base.clone();
    let mut remaining = exponent.unsigned_abs();
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = round_to(&(&result * &square), wp2);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = round_to(&(&square * &square), wp2);
        }
    }

    if exponent < 0 {
        result = div_to(&BigDecimal::one(), &result, wp2)?;
    }
    Ok(round_to(&result, wp))
}
