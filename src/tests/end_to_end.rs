//! End-to-end scenarios through the public API: precision 50, half-up
//! rounding, degree mode.

use crate::{AngleMode, EvalError, Evaluator, RoundingMode};
use std::collections::HashMap;
use std::str::FromStr;

fn evaluator() -> Evaluator {
    Evaluator::new()
        .precision(50)
        .rounding(RoundingMode::HalfUp)
        .angle_mode(AngleMode::Deg)
}

fn eval(input: &str) -> Result<String, EvalError> {
    let ev = evaluator();
    ev.evaluate(input).map(|v| ev.format(&v))
}

fn eval_with(input: &str, pairs: &[(&str, &str)]) -> Result<String, EvalError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    let ev = evaluator();
    ev.evaluate_with(input, &vars).map(|v| ev.format(&v))
}

#[test]
fn addition_with_a_radical() {
    assert_eq!(
        eval("3.5 + sqrt(2)").unwrap(),
        "4.9142135623730950488016887242096980785696718753769"
    );
}

#[test]
fn trigonometry_in_degree_mode() {
    assert_eq!(eval("2*sin(30) + cos(60)").unwrap(), "1.5");
}

#[test]
fn precedence_and_parentheses() {
    assert_eq!(eval("(2+3)*4 - 2^3").unwrap(), "12");
}

#[test]
fn factorial() {
    assert_eq!(eval("5!").unwrap(), "120");
}

#[test]
fn absolute_value_bars() {
    assert_eq!(eval("|(-7) + 2|").unwrap(), "5");
}

#[test]
fn polynomial_with_variable() {
    assert_eq!(eval_with("2x^2 + 3x - 1", &[("x", "4")]).unwrap(), "43");
}

#[test]
fn log_of_exponential_within_precision() {
    let value = crate::BigDecimal::from_str(&eval("ln(e^3)").unwrap()).unwrap();
    let error = (value - crate::BigDecimal::from(3)).abs();
    assert!(
        error < crate::BigDecimal::from_str("1e-45").unwrap(),
        "ln(e^3) drifted too far from 3: {error}"
    );
}

#[test]
fn log_base() {
    assert_eq!(eval("logBase(8; 2)").unwrap(), "3");
}

#[test]
fn combination() {
    assert_eq!(eval("combination(5; 2)").unwrap(), "10");
}

#[test]
fn division_by_zero() {
    assert!(matches!(eval("1/0"), Err(EvalError::DivisionByZero)));
}

#[test]
fn odd_bar_count() {
    assert!(matches!(eval("|x+1"), Err(EvalError::UnbalancedBars)));
}

#[test]
fn factorial_in_invalid_position() {
    assert!(matches!(eval("!5"), Err(EvalError::Syntax { .. })));
}

// further pipeline coverage beyond the canonical table

#[test]
fn implicit_multiplication_forms() {
    assert_eq!(eval("2(3+1)").unwrap(), "8");
    assert_eq!(eval("(2)(3)").unwrap(), "6");
    assert_eq!(eval("2sqrt(4)").unwrap(), "4");
}

#[test]
fn unary_signs() {
    assert_eq!(eval("-5+3").unwrap(), "-2");
    assert_eq!(eval("-(2+3)").unwrap(), "-5");
    assert_eq!(eval("--(2+3)").unwrap(), "5");
    assert_eq!(eval("2--3").unwrap(), "5");
    assert_eq!(eval("2^-2").unwrap(), "0.25");
}

#[test]
fn prefix_radical_operator() {
    assert_eq!(eval("√16").unwrap(), "4");
    assert_eq!(eval("√(9+7)").unwrap(), "4");
}

#[test]
fn integer_modulo() {
    assert_eq!(eval("10 % 3").unwrap(), "1");
    assert_eq!(eval("9 % 3").unwrap(), "0");
    assert!(matches!(eval("10 % 0"), Err(EvalError::DivisionByZero)));
    assert!(matches!(eval("10.5 % 3"), Err(EvalError::Domain { .. })));
}

#[test]
fn nth_root_and_cbrt() {
    assert_eq!(eval("nthRoot(27; 3)").unwrap(), "3");
    assert_eq!(eval("cbrt(-8)").unwrap(), "-2");
}

#[test]
fn coordinate_conversions() {
    // degree mode: polar (2, 90°) lies on the y axis, (2, 0°) on the x axis
    assert_eq!(eval("polarToCartesian(2; 90; y)").unwrap(), "2");
    assert_eq!(eval("polarToCartesian(2; 0; x)").unwrap(), "2");
    assert_eq!(eval("polarToCartesian(2; 60; x)").unwrap(), "1");
    assert_eq!(eval("cartesianToPolar(3; 4; r)").unwrap(), "5");
    assert_eq!(eval("cartesianToPolar(1; 1; theta)").unwrap(), "45");
    assert!(matches!(
        eval("cartesianToPolar(1; 1; q)"),
        Err(EvalError::Domain { .. })
    ));
}

#[test]
fn atan_two_argument_form() {
    assert_eq!(eval("atan2(1; 1)").unwrap(), "45");
}

#[test]
fn three_arg_call_juxtaposed_after_parenthesis() {
    // juxtaposition means product, and the call keeps its signed operand
    assert_eq!(eval("(2)polarToCartesian(2; 90; y)").unwrap(), "4");
    assert_eq!(eval("(2)polarToCartesian(-2; 90; y)").unwrap(), "-4");
}

#[test]
fn domain_errors() {
    assert!(matches!(eval("ln(0)"), Err(EvalError::Domain { .. })));
    assert!(matches!(eval("sqrt(-1)"), Err(EvalError::Domain { .. })));
    assert!(matches!(eval("asin(2)"), Err(EvalError::Domain { .. })));
    assert!(matches!(eval("acosh(0.5)"), Err(EvalError::Domain { .. })));
    assert!(matches!(eval("3.5!"), Err(EvalError::Domain { .. })));
    assert!(matches!(eval("(-2)^0.5"), Err(EvalError::Domain { .. })));
}

#[test]
fn mismatched_parentheses() {
    assert!(matches!(
        eval("(2+3"),
        Err(EvalError::MismatchedParentheses)
    ));
    assert!(matches!(
        eval("2+3)"),
        Err(EvalError::MismatchedParentheses)
    ));
}

#[test]
fn locale_formatting_only_changes_the_separator() {
    let ev = Evaluator::new().locale("de-DE");
    let value = ev.evaluate("7/8").unwrap();
    assert_eq!(ev.format(&value), "0,875");

    let ev = Evaluator::new().locale("en-GB");
    let value = ev.evaluate("7/8").unwrap();
    assert_eq!(ev.format(&value), "0.875");
}

#[test]
fn empty_input_is_a_syntax_error() {
    assert!(matches!(eval(""), Err(EvalError::Syntax { .. })));
    assert!(matches!(eval("   "), Err(EvalError::Syntax { .. })));
}
