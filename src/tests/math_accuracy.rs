//! Accuracy fixtures: results checked against 55-digit reference values.

use crate::{AngleMode, BigDecimal, Evaluator, RoundingMode};
use std::str::FromStr;

const SQRT_2: &str = "1.414213562373095048801688724209698078569671875376948073";
const PI: &str = "3.141592653589793238462643383279502884197169399375105821";
const E: &str = "2.718281828459045235360287471352662497757247093699959575";
const LN_2: &str = "0.693147180559945309417232121458176568075500134360255254";

fn evaluator() -> Evaluator {
    Evaluator::new().precision(50).rounding(RoundingMode::HalfUp)
}

fn assert_close(input: &str, reference: &str) {
    let value = evaluator().evaluate(input).unwrap();
    let expected = BigDecimal::from_str(reference).unwrap();
    let error = (value - expected).abs();
    let bound = BigDecimal::from_str("1e-48").unwrap();
    assert!(error < bound, "{input} off by {error}");
}

#[test]
fn reference_constants() {
    assert_close("sqrt(2)", SQRT_2);
    assert_close("pi", PI);
    assert_close("e", E);
    assert_close("ln(2)", LN_2);
}

#[test]
fn logarithm_family() {
    assert_close("log2(2)", "1");
    assert_close("log10(1000)", "3");
    assert_close("logBase(81; 3)", "4");
    assert_close("ln(e)", "1");
    assert_close("exp(ln(2))", "2");
}

#[test]
fn radian_trigonometry() {
    let ev = Evaluator::new().precision(50).angle_mode(AngleMode::Rad);
    // sin(pi/6) == 0.5 with pi supplied at context precision
    let value = ev.evaluate("sin(pi/6)").unwrap();
    let error = (value - BigDecimal::from_str("0.5").unwrap()).abs();
    assert!(error < BigDecimal::from_str("1e-48").unwrap());
    // atan(1) == pi/4
    let value = ev.evaluate("4*atan(1)").unwrap();
    let expected = BigDecimal::from_str(PI).unwrap();
    assert!((value - expected).abs() < BigDecimal::from_str("1e-48").unwrap());
}

#[test]
fn power_matches_radical() {
    let via_power = evaluator().evaluate("2^0.5").unwrap();
    let via_sqrt = evaluator().evaluate("sqrt(2)").unwrap();
    let error = (via_power - via_sqrt).abs();
    assert!(error < BigDecimal::from_str("1e-48").unwrap());
}

#[test]
fn high_precision_division() {
    // 1/7 has period 6; check 60 digits against the repetend
    let ev = Evaluator::new().precision(60).rounding(RoundingMode::Down);
    let value = ev.evaluate("1/7").unwrap();
    assert_eq!(
        ev.format(&value),
        "0.142857142857142857142857142857142857142857142857142857142857"
    );
}

#[test]
fn rounding_modes_differ_at_the_last_digit() {
    let down = Evaluator::new().precision(5).rounding(RoundingMode::Down);
    let value = down.evaluate("2/3").unwrap();
    assert_eq!(down.format(&value), "0.66666");

    let up = Evaluator::new().precision(5).rounding(RoundingMode::HalfUp);
    let value = up.evaluate("2/3").unwrap();
    assert_eq!(up.format(&value), "0.66667");

    let ceiling = Evaluator::new().precision(5).rounding(RoundingMode::Ceiling);
    let value = ceiling.evaluate("1/3").unwrap();
    assert_eq!(ceiling.format(&value), "0.33334");
}

#[test]
fn hyperbolic_identity() {
    let ev = evaluator();
    let value = ev.evaluate("cosh(2)^2 - sinh(2)^2").unwrap();
    let error = (value - BigDecimal::from(1)).abs();
    assert!(error < BigDecimal::from_str("1e-45").unwrap());
}

#[test]
fn large_factorials_stay_exact() {
    let ev = Evaluator::new().precision(30);
    let value = ev.evaluate("15! / 13!").unwrap();
    assert_eq!(ev.format(&value), "210");
}
