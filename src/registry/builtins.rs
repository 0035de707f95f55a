//! The baseline element catalogue: operator, function and constant
//! definitions with their semantic adapters.

use super::{Associativity, Element};
use crate::bigmath::{self, combinatorics, constants, exp_log, hyperbolic, roots, trig};
use crate::core::context::EvalContext;
use crate::core::error::EvalError;
use bigdecimal::BigDecimal;
use num_traits::Signed;

/// All elements of the standard registry.
pub(crate) fn standard_elements() -> Vec<Element> {
    vec![
        // arithmetic operators
        Element::Binary {
            symbol: "+",
            precedence: 2,
            associativity: Associativity::Left,
            apply: add,
        },
        Element::Binary {
            symbol: "-",
            precedence: 2,
            associativity: Associativity::Left,
            apply: subtract,
        },
        Element::Binary {
            symbol: "*",
            precedence: 3,
            associativity: Associativity::Left,
            apply: multiply,
        },
        Element::Binary {
            symbol: "/",
            precedence: 3,
            associativity: Associativity::Left,
            apply: divide,
        },
        Element::Binary {
            symbol: "%",
            precedence: 3,
            associativity: Associativity::Left,
            apply: modulo,
        },
        Element::Binary {
            symbol: "^",
            precedence: 4,
            associativity: Associativity::Right,
            apply: power,
        },
        Element::Prefix {
            symbol: "√",
            precedence: 4,
            apply: sqrt_prefix,
        },
        // internal prefix negation; the tokenizer rewrites a unary '-' to
        // this symbol during normalization
        Element::Prefix {
            symbol: "#",
            precedence: 4,
            apply: negate,
        },
        Element::Postfix {
            symbol: "!",
            precedence: 5,
            apply: factorial,
        },
        // trigonometric functions
        unary("sin", sin),
        unary("cos", cos),
        unary("tan", tan),
        unary("cot", cot),
        unary("asin", asin),
        unary("acos", acos),
        unary("atan", atan),
        unary("acot", acot),
        // hyperbolic functions
        unary("sinh", sinh),
        unary("cosh", cosh),
        unary("tanh", tanh),
        unary("coth", coth),
        unary("asinh", asinh),
        unary("acosh", acosh),
        unary("atanh", atanh),
        unary("acoth", acoth),
        // exponential and logarithmic functions
        unary("exp", exp),
        unary("ln", ln),
        unary("log2", log2),
        unary("log10", log10),
        // radicals and absolute value
        unary("sqrt", sqrt),
        unary("cbrt", cbrt),
        unary("abs", abs),
        // binary functions
        binary("logBase", log_base),
        binary("nthRoot", nth_root),
        binary("atan2", atan2),
        binary("combination", combination),
        binary("permutation", permutation),
        // coordinate conversions with a selector argument
        Element::ThreeArg {
            symbol: "polarToCartesian",
            apply: polar_to_cartesian,
        },
        Element::ThreeArg {
            symbol: "cartesianToPolar",
            apply: cartesian_to_polar,
        },
        // constants
        Element::Constant {
            symbol: "pi",
            value: pi_constant,
        },
        Element::Constant {
            symbol: "π",
            value: pi_constant,
        },
        Element::Constant {
            symbol: "e",
            value: e_constant,
        },
        // punctuation
        Element::LeftParen { symbol: "(" },
        Element::RightParen { symbol: ")" },
        Element::Separator { symbol: ";" },
    ]
}

fn unary(symbol: &'static str, apply: super::FunctionFn) -> Element {
    Element::Function {
        symbol,
        arity: 1,
        apply,
    }
}

fn binary(symbol: &'static str, apply: super::FunctionFn) -> Element {
    Element::Function {
        symbol,
        arity: 2,
        apply,
    }
}

// ===== operators =====

fn add(a: &BigDecimal, b: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    Ok(bigmath::round(&(a + b), ctx.math()))
}

fn subtract(a: &BigDecimal, b: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    Ok(bigmath::round(&(a - b), ctx.math()))
}

fn multiply(a: &BigDecimal, b: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    Ok(bigmath::round(&(a * b), ctx.math()))
}

fn divide(a: &BigDecimal, b: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    bigmath::div(a, b, ctx.math())
}

fn modulo(a: &BigDecimal, b: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    bigmath::modulo(a, b, ctx.math())
}

fn power(a: &BigDecimal, b: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    exp_log::pow(a, b, ctx.math())
}

fn negate(a: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    Ok(bigmath::round(&(-a), ctx.math()))
}

fn sqrt_prefix(a: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    roots::sqrt(a, ctx.math())
}

fn factorial(a: &BigDecimal, ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    combinatorics::factorial(a, ctx.math())
}

// ===== unary functions =====

fn sin(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    trig::sin(&args[0], ctx)
}

fn cos(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    trig::cos(&args[0], ctx)
}

fn tan(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    trig::tan(&args[0], ctx)
}

fn cot(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    trig::cot(&args[0], ctx)
}

fn asin(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    trig::asin(&args[0], ctx)
}

fn acos(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    trig::acos(&args[0], ctx)
}

fn atan(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    trig::atan(&args[0], ctx)
}

fn acot(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    trig::acot(&args[0], ctx)
}

fn sinh(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    hyperbolic::sinh(&args[0], ctx.math())
}

fn cosh(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    hyperbolic::cosh(&args[0], ctx.math())
}

fn tanh(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    hyperbolic::tanh(&args[0], ctx.math())
}

fn coth(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    hyperbolic::coth(&args[0], ctx.math())
}

fn asinh(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    hyperbolic::asinh(&args[0], ctx.math())
}

fn acosh(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    hyperbolic::acosh(&args[0], ctx.math())
}

fn atanh(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    hyperbolic::atanh(&args[0], ctx.math())
}

fn acoth(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    hyperbolic::acoth(&args[0], ctx.math())
}

fn exp(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    exp_log::exp(&args[0], ctx.math())
}

fn ln(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    exp_log::ln(&args[0], ctx.math())
}

fn log2(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    exp_log::log2(&args[0], ctx.math())
}

fn log10(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    exp_log::log10(&args[0], ctx.math())
}

fn sqrt(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    roots::sqrt(&args[0], ctx.math())
}

fn cbrt(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    roots::cbrt(&args[0], ctx.math())
}

fn abs(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    Ok(bigmath::round(&args[0].abs(), ctx.math()))
}

// ===== binary functions =====

fn log_base(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    exp_log::log_base(&args[0], &args[1], ctx.math())
}

fn nth_root(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    roots::nth_root(&args[0], &args[1], ctx.math())
}

fn atan2(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    trig::atan2(&args[0], &args[1], ctx)
}

fn combination(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    combinatorics::combination(&args[0], &args[1], ctx.math())
}

fn permutation(args: &[BigDecimal], ctx: &EvalContext) -> Result<BigDecimal, EvalError> {
    combinatorics::permutation(&args[0], &args[1], ctx.math())
}

// ===== coordinate conversions =====

fn polar_to_cartesian(
    radius: &BigDecimal,
    angle: &BigDecimal,
    selector: &str,
    ctx: &EvalContext,
) -> Result<BigDecimal, EvalError> {
    match selector {
        "x" => Ok(bigmath::round(
            &(radius * trig::cos(angle, ctx)?),
            ctx.math(),
        )),
        "y" => Ok(bigmath::round(
            &(radius * trig::sin(angle, ctx)?),
            ctx.math(),
        )),
        other => Err(EvalError::domain(format!(
            "polarToCartesian selector must be 'x' or 'y', got '{other}'"
        ))),
    }
}

fn cartesian_to_polar(
    x: &BigDecimal,
    y: &BigDecimal,
    selector: &str,
    ctx: &EvalContext,
) -> Result<BigDecimal, EvalError> {
    match selector {
        "r" => {
            let sum = x * x + y * y;
            roots::sqrt(&sum, ctx.math())
        }
        "theta" | "θ" => trig::atan2(y, x, ctx),
        other => Err(EvalError::domain(format!(
            "cartesianToPolar selector must be 'r' or 'theta', got '{other}'"
        ))),
    }
}

// ===== constants =====

fn pi_constant(ctx: &EvalContext) -> BigDecimal {
    constants::pi(u64::from(ctx.math().precision()))
}

fn e_constant(ctx: &EvalContext) -> BigDecimal {
    constants::e(u64::from(ctx.math().precision()))
}
