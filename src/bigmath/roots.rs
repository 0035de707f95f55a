//! Square, cube and n-th roots.

use super::{
    div_to, div_unchecked, integer_digit_count, round, round_to, shift_pow10, to_exact_bigint,
    working,
};
use crate::bigmath::exp_log;
use crate::core::context::MathContext;
use crate::core::error::EvalError;
use bigdecimal::BigDecimal;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Square root rounded to the context precision; domain x ≥ 0.
pub(crate) fn sqrt(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let value = sqrt_wp(x, working(ctx))?;
    Ok(round(&value, ctx))
}

/// Square root at working precision `wp`, by Newton-Raphson iteration.
pub(crate) fn sqrt_wp(x: &BigDecimal, wp: u64) -> Result<BigDecimal, EvalError> {
    if x.is_negative() {
        return Err(EvalError::domain("sqrt requires a non-negative argument"));
    }
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let wp2 = wp + 5;
    let half = BigDecimal::new(5.into(), 1);
    let mut estimate = initial_sqrt_estimate(x);
    let mut previous = BigDecimal::zero();
    // quadratic convergence: the digit count doubles per step, so the
    // iteration count stays logarithmic in wp
    for _ in 0..1_000 {
        let quotient = div_unchecked(x, &estimate, wp2);
        estimate = round_to(&((&estimate + &quotient) * &half), wp2);
        if estimate == previous {
            break;
        }
        previous = estimate.clone();
    }
    Ok(round_to(&estimate, wp))
}

/// Square root for values that are non-negative by construction.
pub(crate) fn sqrt_positive(x: &BigDecimal, wp: u64) -> BigDecimal {
    sqrt_wp(x, wp).unwrap_or_else(|_| BigDecimal::zero())
}

/// First Newton estimate: the f64 square root when it is representable,
/// otherwise a power of ten matching half the magnitude.
fn initial_sqrt_estimate(x: &BigDecimal) -> BigDecimal {
    if let Some(approx) = x.to_f64() {
        if approx.is_finite() && approx > 0.0 {
            if let Ok(seed) = BigDecimal::try_from(approx.sqrt()) {
                if !seed.is_zero() {
                    return seed;
                }
            }
        }
    }
    shift_pow10(&BigDecimal::one(), integer_digit_count(x) / 2)
}

/// Cube root rounded to the context precision; defined for all reals.
pub(crate) fn cbrt(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    nth_root(x, &BigDecimal::from(3), ctx)
}

/// n-th root of `x` for a positive integer degree `n`.
///
/// Odd degrees accept negative radicands (the real root is returned); even
/// degrees require x ≥ 0.
pub(crate) fn nth_root(
    x: &BigDecimal,
    degree: &BigDecimal,
    ctx: &MathContext,
) -> Result<BigDecimal, EvalError> {
    let n = to_exact_bigint(degree)
        .filter(|n| n.is_positive())
        .and_then(|n| n.to_u32())
        .ok_or_else(|| EvalError::domain("nthRoot degree must be a positive integer"))?;

    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }
    let negative = x.is_negative();
    if negative && n % 2 == 0 {
        return Err(EvalError::domain(
            "even-degree roots require a non-negative radicand",
        ));
    }

    let wp = working(ctx) + 5;
    let magnitude = x.abs();
    let value = match n {
        1 => magnitude,
        2 => sqrt_wp(&magnitude, wp)?,
        _ => {
            // |x|^(1/n) = exp(ln|x| / n)
            let log = exp_log::ln_wp(&magnitude, wp)?;
            let scaled = div_to(&log, &BigDecimal::from(n), wp)?;
            exp_log::exp_wp(&scaled, wp)?
        }
    };
    let signed = if negative { -value } else { value };
    Ok(round(&signed, ctx))
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
    fn sqrt_of_two_to_fifty_digits() {
        let value = sqrt(&dec("2"), &ctx()).unwrap();
        assert_eq!(
            to_plain_string(&value),
            "1.4142135623730950488016887242096980785696718753769"
        );
    }

    #[test]
    fn sqrt_of_perfect_squares() {
        let c = ctx();
        assert_eq!(to_plain_string(&sqrt(&dec("144"), &c).unwrap()), "12");
        assert_eq!(to_plain_string(&sqrt(&dec("0.25"), &c).unwrap()), "0.5");
        assert_eq!(to_plain_string(&sqrt(&dec("0"), &c).unwrap()), "0");
    }

    #[test]
    fn sqrt_of_negative_is_rejected() {
        assert!(matches!(
            sqrt(&dec("-4"), &ctx()),
            Err(EvalError::Domain { .. })
        ));
    }

    #[test]
    fn cube_roots_keep_the_sign() {
        let c = ctx();
        assert_eq!(to_plain_string(&cbrt(&dec("27"), &c).unwrap()), "3");
        assert_eq!(to_plain_string(&cbrt(&dec("-8"), &c).unwrap()), "-2");
    }

    #[test]
    fn nth_root_degree_rules() {
        let c = ctx();
        assert_eq!(
            to_plain_string(&nth_root(&dec("32"), &dec("5"), &c).unwrap()),
            "2"
        );
        assert!(matches!(
            nth_root(&dec("-16"), &dec("4"), &c),
            Err(EvalError::Domain { .. })
        ));
        assert!(matches!(
            nth_root(&dec("16"), &dec("2.5"), &c),
            Err(EvalError::Domain { .. })
        ));
        assert!(matches!(
            nth_root(&dec("16"), &dec("0"), &c),
            Err(EvalError::Domain { .. })
        ));
    }

    #[test]
    fn sqrt_of_huge_and_tiny_magnitudes() {
        let c = MathContext::new(20, bigdecimal::RoundingMode::HalfUp);
        let huge = sqrt(&dec("1e100"), &c).unwrap();
        assert_eq!(to_plain_string(&huge), format!("1{}", "0".repeat(50)));
        let tiny = sqrt(&dec("0.0001"), &c).unwrap();
        assert_eq!(to_plain_string(&tiny), "0.01");
    }
}
