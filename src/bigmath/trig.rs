//! Trigonometric functions and their inverses.
//!
//! Direct functions convert degree inputs to radians when the evaluation
//! context is in degree mode; inverse functions convert their radian result
//! back. Range reduction happens modulo 2π with guard digits proportional to
//! the argument magnitude, so large arguments keep full precision.

use super::{constants, div_unchecked, epsilon, integer_digit_count, round, round_to, working};
use crate::bigmath::roots::sqrt_positive;
use crate::core::context::{AngleMode, EvalContext};
use crate::core::error::EvalError;
use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{One, Signed, Zero};

/// sin(x) in the context angle mode.
pub(crate) fn sin(x: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx.math());
    let reduced = range_reduce(&to_radians(x, wp, ctx.angle()), wp);
    Ok(round(&sin_series(&reduced, wp), ctx.math()))
}

/// cos(x) in the context angle mode.
pub(crate) fn cos(x: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx.math());
    let reduced = range_reduce(&to_radians(x, wp, ctx.angle()), wp);
    Ok(round(&cos_series(&reduced, wp), ctx.math()))
}

/// tan(x) = sin(x)/cos(x).
pub(crate) fn tan(x: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx.math()) + 5;
    let reduced = range_reduce(&to_radians(x, wp, ctx.angle()), wp);
    let cosine = cos_series(&reduced, wp);
    if cosine.is_zero() {
        return Err(EvalError::domain("tan undefined at odd multiples of pi/2"));
    }
    let value = div_unchecked(&sin_series(&reduced, wp), &cosine, wp);
    Ok(round(&value, ctx.math()))
}

/// cot(x) = cos(x)/sin(x).
pub(crate) fn cot(x: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx.math()) + 5;
    let reduced = range_reduce(&to_radians(x, wp, ctx.angle()), wp);
    let sine = sin_series(&reduced, wp);
    if sine.is_zero() {
        return Err(EvalError::domain("cot undefined at multiples of pi"));
    }
    let value = div_unchecked(&cos_series(&reduced, wp), &sine, wp);
    Ok(round(&value, ctx.math()))
}

/// asin(x); domain |x| ≤ 1. Result in the context angle mode.
pub(crate) fn asin(x: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx.math());
    let value = asin_wp(x, wp)?;
    Ok(round(&from_radians(&value, wp, ctx.angle()), ctx.math()))
}

/// acos(x) = π/2 − asin(x); domain |x| ≤ 1.
pub(crate) fn acos(x: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx.math());
    let value = half_pi(wp + 5) - asin_wp(x, wp + 5)?;
    Ok(round(&from_radians(&value, wp, ctx.angle()), ctx.math()))
}

/// atan(x). Result in the context angle mode.
pub(crate) fn atan(x: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx.math());
    let value = atan_wp(x, wp);
    Ok(round(&from_radians(&value, wp, ctx.angle()), ctx.math()))
}

/// acot(x) = π/2 − atan(x), principal value in (0, π).
pub(crate) fn acot(x: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx.math());
    let value = half_pi(wp + 5) - atan_wp(x, wp + 5);
    Ok(round(&from_radians(&value, wp, ctx.angle()), ctx.math()))
}

/// Two-argument arctangent with the usual quadrant rules; undefined at the
/// origin.
pub(crate) fn atan2(
    y: &BigDecimal,
    x: &BigDecimal,
    ctx: &EvalContext,
) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx.math());
    let wp2 = wp + 5;
    let value = if x.is_zero() {
        if y.is_zero() {
            return Err(EvalError::domain("atan2 is undefined at the origin"));
        }
        if y.is_positive() {
            half_pi(wp2)
        } else {
            -half_pi(wp2)
        }
    } else {
        let base = atan_wp(&div_unchecked(y, x, wp2), wp2);
        if x.is_positive() {
            base
        } else if y.is_negative() {
            base - constants::pi(wp2)
        } else {
            base + constants::pi(wp2)
        }
    };
    Ok(round(&from_radians(&value, wp, ctx.angle()), ctx.math()))
}

/// atan at working precision, always in radians.
pub(crate) fn atan_wp(x: &BigDecimal, wp: u64) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::zero();
    }
    if x.is_negative() {
        return -atan_wp(&x.abs(), wp);
    }
    let one = BigDecimal::one();
    let wp2 = wp + 8;
    if x > &one {
        let inverse = div_unchecked(&one, x, wp2);
        return round_to(&(half_pi(wp2) - atan_wp(&inverse, wp2)), wp);
    }
    if x == &one {
        let quarter = BigDecimal::new(25.into(), 2);
        return round_to(&(constants::pi(wp2) * quarter), wp);
    }

    // atan(t) = 2·atan(t / (1 + √(1+t²))); repeat until the series argument
    // is small, then undo with doublings
    let tenth = BigDecimal::new(1.into(), 1);
    let mut t = x.clone();
    let mut halvings = 0u64;
    while t > tenth {
        let root = sqrt_positive(&(&one + round_to(&(&t * &t), wp2)), wp2);
        t = div_unchecked(&t, &(&one + root), wp2);
        halvings += 1;
    }

    let threshold = epsilon(wp2 + 2);
    let t_squared = round_to(&(&t * &t), wp2);
    let mut power = t.clone();
    let mut sum = t;
    let mut n = 1u64;
    loop {
        power = round_to(&(&power * &t_squared), wp2);
        let term = div_unchecked(&power, &BigDecimal::from(2 * n + 1), wp2);
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

    let mut value = sum;
    for _ in 0..halvings {
        value = &value + &value;
    }
    round_to(&value, wp)
}

/// asin at working precision, always in radians; domain |x| ≤ 1.
pub(crate) fn asin_wp(x: &BigDecimal, wp: u64) -> Result<BigDecimal, EvalError> {
    let one = BigDecimal::one();
    let magnitude = x.abs();
    if magnitude > one {
        return Err(EvalError::domain("asin requires |x| <= 1"));
    }
    if magnitude == one {
        let right_angle = half_pi(wp);
        return Ok(if x.is_negative() { -right_angle } else { right_angle });
    }
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }

    // asin(x) = atan(x / √(1 − x²)); the factored form (1−x)(1+x) is exact,
    // so arguments close to ±1 lose no digits to cancellation
    let wp2 = wp + 5;
    let complement = round_to(&((&one - x) * (&one + x)), wp2 + 5);
    let denominator = sqrt_positive(&complement, wp2);
    let ratio = div_unchecked(x, &denominator, wp2);
    Ok(round_to(&atan_wp(&ratio, wp2), wp))
}

/// π/2 at `digits` significant digits.
fn half_pi(digits: u64) -> BigDecimal {
    let half = BigDecimal::new(5.into(), 1);
    constants::pi(digits) * half
}

/// Convert an input angle to radians according to the angle mode.
fn to_radians(x: &BigDecimal, wp: u64, mode: AngleMode) -> BigDecimal {
    match mode {
        AngleMode::Rad => x.clone(),
        AngleMode::Deg => {
            let extra = u64::try_from(integer_digit_count(x).max(0)).unwrap_or(0);
            let wp2 = wp + extra + 5;
            div_unchecked(&(x * constants::pi(wp2)), &BigDecimal::from(180), wp2)
        }
    }
}

/// Convert a radian result to the output angle mode.
fn from_radians(value: &BigDecimal, wp: u64, mode: AngleMode) -> BigDecimal {
    match mode {
        AngleMode::Rad => value.clone(),
        AngleMode::Deg => {
            let wp2 = wp + 5;
            div_unchecked(&(value * BigDecimal::from(180)), &constants::pi(wp2), wp2)
        }
    }
}

/// Reduce a radian argument into [−π, π].
fn range_reduce(x: &BigDecimal, wp: u64) -> BigDecimal {
    let extra = u64::try_from(integer_digit_count(x).max(0)).unwrap_or(0);
    let wp2 = wp + extra + 5;
    let pi = constants::pi(wp2);
    if x.abs() <= pi {
        return x.clone();
    }
    let two_pi = &pi + &pi;
    let half = BigDecimal::new(5.into(), 1);
    let turns = (div_unchecked(x, &two_pi, wp2) + half).with_scale_round(0, RoundingMode::Floor);
    round_to(&(x - turns * two_pi), wp2)
}

/// Taylor series for sin on a reduced argument (|t| ≤ π).
fn sin_series(t: &BigDecimal, wp: u64) -> BigDecimal {
    if t.is_zero() {
        return BigDecimal::zero();
    }
    let wp2 = wp + 5;
    let threshold = epsilon(wp2 + 2);
    let t_squared = round_to(&(t * t), wp2);
    let mut term = t.clone();
    let mut sum = t.clone();
    let mut k = 1u64;
    loop {
        term = div_unchecked(
            &(&term * &t_squared),
            &BigDecimal::from(2 * k * (2 * k + 1)),
            wp2,
        );
        if k % 2 == 1 {
            sum -= &term;
        } else {
            sum += &term;
        }
        if term.abs() < threshold {
            break;
        }
        k += 1;
    }
    round_to(&sum, wp)
}

/// Taylor series for cos on a reduced argument (|t| ≤ π).
fn cos_series(t: &BigDecimal, wp: u64) -> BigDecimal {
    if t.is_zero() {
        return BigDecimal::one();
    }
    let wp2 = wp + 5;
    let threshold = epsilon(wp2 + 2);
    let t_squared = round_to(&(t * t), wp2);
    let mut term = BigDecimal::one();
    let mut sum = BigDecimal::one();
    let mut k = 1u64;
    loop {
        term = div_unchecked(
            &(&term * &t_squared),
            &BigDecimal::from((2 * k - 1) * (2 * k)),
            wp2,
        );
        if k % 2 == 1 {
            sum -= &term;
        } else {
            sum += &term;
        }
        if term.abs() < threshold {
            break;
        }
        k += 1;
    }
    round_to(&sum, wp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigmath::to_plain_string;
    use crate::core::context::MathContext;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).expect("valid test literal")
    }

    fn deg_ctx() -> EvalContext {
        EvalContext::new(
            MathContext::new(50, RoundingMode::HalfUp),
            AngleMode::Deg,
            String::from("en-US"),
        )
    }

    fn rad_ctx() -> EvalContext {
        EvalContext::new(
            MathContext::new(50, RoundingMode::HalfUp),
            AngleMode::Rad,
            String::from("en-US"),
        )
    }

    #[test]
    fn well_known_degree_values() {
        let ctx = deg_ctx();
        assert_eq!(to_plain_string(&sin(&dec("30"), &ctx).unwrap()), "0.5");
        assert_eq!(to_plain_string(&cos(&dec("60"), &ctx).unwrap()), "0.5");
        assert_eq!(to_plain_string(&tan(&dec("45"), &ctx).unwrap()), "1");
        assert_eq!(to_plain_string(&sin(&dec("90"), &ctx).unwrap()), "1");
        assert_eq!(to_plain_string(&cos(&dec("180"), &ctx).unwrap()), "-1");
    }

    #[test]
    fn inverse_functions_return_degrees_in_degree_mode() {
        let ctx = deg_ctx();
        assert_eq!(to_plain_string(&asin(&dec("1"), &ctx).unwrap()), "90");
        assert_eq!(to_plain_string(&acos(&dec("0"), &ctx).unwrap()), "90");
        assert_eq!(to_plain_string(&atan(&dec("1"), &ctx).unwrap()), "45");
        assert_eq!(
            to_plain_string(&atan2(&dec("1"), &dec("1"), &ctx).unwrap()),
            "45"
        );
    }

    #[test]
    fn radian_mode_pythagorean_identity() {
        let ctx = rad_ctx();
        let s = sin(&dec("1"), &ctx).unwrap();
        let c = cos(&dec("1"), &ctx).unwrap();
        let identity = &s * &s + &c * &c;
        let error = (identity - BigDecimal::one()).abs();
        assert!(error < dec("1e-48"), "identity error too large");
    }

    #[test]
    fn large_arguments_are_reduced() {
        let ctx = deg_ctx();
        // sin(360 000 030°) == sin(30°)
        let reduced = sin(&dec("360000030"), &ctx).unwrap();
        assert_eq!(to_plain_string(&reduced), "0.5");
    }

    #[test]
    fn asin_domain() {
        let ctx = rad_ctx();
        assert!(matches!(
            asin(&dec("1.5"), &ctx),
            Err(EvalError::Domain { .. })
        ));
    }

    #[test]
    fn cot_of_zero_is_undefined() {
        assert!(matches!(
            cot(&dec("0"), &rad_ctx()),
            Err(EvalError::Domain { .. })
        ));
    }

    #[test]
    fn atan2_quadrants() {
        let ctx = deg_ctx();
        assert_eq!(
            to_plain_string(&atan2(&dec("1"), &dec("-1"), &ctx).unwrap()),
            "135"
        );
        assert_eq!(
            to_plain_string(&atan2(&dec("-1"), &dec("-1"), &ctx).unwrap()),
            "-135"
        );
        assert!(matches!(
            atan2(&dec("0"), &dec("0"), &ctx),
            Err(EvalError::Domain { .. })
        ));
    }
}
