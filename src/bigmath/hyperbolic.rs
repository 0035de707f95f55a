//! Hyperbolic functions and their inverses, built on `exp` and `ln`.

use super::{div_unchecked, round, round_to, working};
use crate::bigmath::exp_log::{exp_wp, ln_wp};
use crate::bigmath::roots::sqrt_positive;
use crate::core::context::MathContext;
use crate::core::error::EvalError;
use bigdecimal::BigDecimal;
use num_traits::{One, Signed, Zero};

/// e^x and e^−x at the given precision; one exponential, one reciprocal.
fn exp_pair(x: &BigDecimal, wp: u64) -> Result<(BigDecimal, BigDecimal), EvalError> {
    let grown = exp_wp(x, wp)?;
    let shrunk = div_unchecked(&BigDecimal::one(), &grown, wp);
    Ok((grown, shrunk))
}

/// sinh(x) = (e^x − e^−x)/2.
pub(crate) fn sinh(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }
    let wp = working(ctx) + 3;
    let (grown, shrunk) = exp_pair(x, wp)?;
    let half = BigDecimal::new(5.into(), 1);
    Ok(round(&((grown - shrunk) * half), ctx))
}

/// cosh(x) = (e^x + e^−x)/2.
pub(crate) fn cosh(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let wp = working(ctx) + 3;
    let (grown, shrunk) = exp_pair(x, wp)?;
    let half = BigDecimal::new(5.into(), 1);
    Ok(round(&((grown + shrunk) * half), ctx))
}

/// tanh(x) = (e^x − e^−x)/(e^x + e^−x).
pub(crate) fn tanh(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }
    let wp = working(ctx) + 3;
    let (grown, shrunk) = exp_pair(x, wp)?;
    let value = div_unchecked(&(&grown - &shrunk), &(&grown + &shrunk), wp);
    Ok(round(&value, ctx))
}

/// coth(x) = (e^x + e^−x)/(e^x − e^−x); undefined at zero.
pub(crate) fn coth(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    if x.is_zero() {
        return Err(EvalError::domain("coth is undefined at zero"));
    }
    let wp = working(ctx) + 3;
    let (grown, shrunk) = exp_pair(x, wp)?;
    let value = div_unchecked(&(&grown + &shrunk), &(&grown - &shrunk), wp);
    Ok(round(&value, ctx))
}

/// asinh(x) = ln(x + √(x² + 1)), odd-extended to negative arguments.
pub(crate) fn asinh(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }
    let wp = working(ctx) + 3;
    // the closed form cancels badly for negative x, so use the odd symmetry
    let magnitude = x.abs();
    let root = sqrt_positive(
        &(round_to(&(&magnitude * &magnitude), wp) + BigDecimal::one()),
        wp,
    );
    let value = ln_wp(&(magnitude + root), wp)?;
    Ok(round(&if x.is_negative() { -value } else { value }, ctx))
}

/// acosh(x) = ln(x + √(x² − 1)); domain x ≥ 1.
pub(crate) fn acosh(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let one = BigDecimal::one();
    if x < &one {
        return Err(EvalError::domain("acosh requires x >= 1"));
    }
    if x == &one {
        return Ok(BigDecimal::zero());
    }
    let wp = working(ctx) + 3;
    let root = sqrt_positive(&(round_to(&(x * x), wp) - &one), wp);
    let value = ln_wp(&(x + root), wp)?;
    Ok(round(&value, ctx))
}

/// atanh(x) = ln((1 + x)/(1 − x))/2; domain |x| < 1.
pub(crate) fn atanh(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let one = BigDecimal::one();
    if x.abs() >= one {
        return Err(EvalError::domain("atanh requires |x| < 1"));
    }
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }
    let wp = working(ctx) + 3;
    let ratio = div_unchecked(&(&one + x), &(&one - x), wp);
    let half = BigDecimal::new(5.into(), 1);
    Ok(round(&(ln_wp(&ratio, wp)? * half), ctx))
}

/// acoth(x) = ln((x + 1)/(x − 1))/2; domain |x| > 1.
pub(crate) fn acoth(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let one = BigDecimal::one();
    if x.abs() <= one {
        return Err(EvalError::domain("acoth requires |x| > 1"));
    }
    let wp = working(ctx) + 3;
    let ratio = div_unchecked(&(x + &one), &(x - &one), wp);
    let half = BigDecimal::new(5.into(), 1);
    Ok(round(&(ln_wp(&ratio, wp)? * half), ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigmath::to_plain_string;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).expect("valid test literal")
    }

    fn ctx() -> MathContext {
        MathContext::default()
    }

    #[test]
    fn values_at_zero() {
        let c = ctx();
        assert_eq!(to_plain_string(&sinh(&dec("0"), &c).unwrap()), "0");
        assert_eq!(to_plain_string(&cosh(&dec("0"), &c).unwrap()), "1");
        assert_eq!(to_plain_string(&tanh(&dec("0"), &c).unwrap()), "0");
        assert_eq!(to_plain_string(&asinh(&dec("0"), &c).unwrap()), "0");
        assert_eq!(to_plain_string(&acosh(&dec("1"), &c).unwrap()), "0");
    }

    #[test]
    fn fundamental_identity() {
        let c = ctx();
        let s = sinh(&dec("1.5"), &c).unwrap();
        let ch = cosh(&dec("1.5"), &c).unwrap();
        let identity = &ch * &ch - &s * &s;
        let error = (identity - BigDecimal::one()).abs();
        assert!(error < dec("1e-45"));
    }

    #[test]
    fn inverses_round_trip() {
        let c = ctx();
        let x = dec("0.75");
        let round_trip = tanh(&atanh(&x, &c).unwrap(), &c).unwrap();
        let error = (round_trip - &x).abs();
        assert!(error < dec("1e-45"));
    }

    #[test]
    fn domains_are_enforced() {
        let c = ctx();
        assert!(matches!(coth(&dec("0"), &c), Err(EvalError::Domain { .. })));
        assert!(matches!(acosh(&dec("0.5"), &c), Err(EvalError::Domain { .. })));
        assert!(matches!(atanh(&dec("1"), &c), Err(EvalError::Domain { .. })));
        assert!(matches!(acoth(&dec("0.5"), &c), Err(EvalError::Domain { .. })));
    }

    #[test]
    fn odd_symmetry() {
        let c = ctx();
        let pos = asinh(&dec("2"), &c).unwrap();
        let neg = asinh(&dec("-2"), &c).unwrap();
        assert_eq!(pos, -neg);
    }
}
