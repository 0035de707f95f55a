//! Factorial, combinations and permutations on exact integers.

use super::{round, to_exact_bigint};
use crate::core::context::MathContext;
use crate::core::error::EvalError;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive};

/// Extract a non-negative integer operand or fail with a domain error.
fn non_negative_integer(value: &BigDecimal, what: &str) -> Result<BigInt, EvalError> {
    let int = to_exact_bigint(value)
        .ok_or_else(|| EvalError::domain(format!("{what} requires integer arguments")))?;
    if int.is_negative() {
        return Err(EvalError::domain(format!(
            "{what} requires non-negative arguments"
        )));
    }
    Ok(int)
}

/// n! for a non-negative integer n.
pub(crate) fn factorial(x: &BigDecimal, ctx: &MathContext) -> Result<BigDecimal, EvalError> {
    let n = non_negative_integer(x, "factorial")?
        .to_u64()
        .ok_or(EvalError::PrecisionOverflow)?;
    let mut product = BigInt::one();
    for i in 2..=n {
        product *= i;
    }
    Ok(round(&BigDecimal::from(product), ctx))
}

/// Falling factorial n·(n−1)·…·(n−k+1), i.e. the permutation count P(n, k).
fn falling_factorial(n: &BigInt, k: u64) -> BigInt {
    let mut product = BigInt::one();
    let mut factor = n.clone();
    for _ in 0..k {
        product *= &factor;
        factor -= 1;
    }
    product
}

/// Binomial coefficient C(n, k); requires integers with 0 ≤ k ≤ n.
pub(crate) fn combination(
    n: &BigDecimal,
    k: &BigDecimal,
    ctx: &MathContext,
) -> Result<BigDecimal, EvalError> {
    let n_int = non_negative_integer(n, "combination")?;
    let k_int = non_negative_integer(k, "combination")?;
    if k_int > n_int {
        return Err(EvalError::domain("combination requires k <= n"));
    }
    let k_small = k_int.to_u64().ok_or(EvalError::PrecisionOverflow)?;
    let numerator = falling_factorial(&n_int, k_small);
    let mut divisor = BigInt::one();
    for i in 2..=k_small {
        divisor *= i;
    }
    Ok(round(&BigDecimal::from(numerator / divisor), ctx))
}

/// Permutation count P(n, k); requires integers with 0 ≤ k ≤ n.
pub(crate) fn permutation(
    n: &BigDecimal,
    k: &BigDecimal,
    ctx: &MathContext,
) -> Result<BigDecimal, EvalError> {
    let n_int = non_negative_integer(n, "permutation")?;
    let k_int = non_negative_integer(k, "permutation")?;
    if k_int > n_int {
        return Err(EvalError::domain("permutation requires k <= n"));
    }
    let k_small = k_int.to_u64().ok_or(EvalError::PrecisionOverflow)?;
    Ok(round(&BigDecimal::from(falling_factorial(&n_int, k_small)), ctx))
}
