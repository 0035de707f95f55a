//! Algebraic laws of the pipeline as quickcheck properties.

use crate::{EvalError, Evaluator};
use quickcheck::quickcheck;
use std::collections::HashMap;

fn eval(input: &str) -> Result<String, EvalError> {
    let ev = Evaluator::new();
    ev.evaluate(input).map(|v| ev.format(&v))
}

fn eval_with(input: &str, name: &str, binding: &str) -> Result<String, EvalError> {
    let mut vars = HashMap::new();
    vars.insert(name.to_string(), binding.to_string());
    let ev = Evaluator::new();
    ev.evaluate_with(input, &vars).map(|v| ev.format(&v))
}

quickcheck! {
    /// Wrapping any expression in parentheses never changes its value.
    fn parenthesization_is_transparent(a: i16, b: i16, c: i16) -> bool {
        let expr = format!("{a}+{b}*{c}");
        eval(&expr).unwrap() == eval(&format!("({expr})")).unwrap()
    }

    /// A leading plus is the identity.
    fn leading_plus_is_identity(a: i16) -> bool {
        eval(&format!("+({a})")).unwrap() == eval(&format!("({a})")).unwrap()
    }

    /// A leading minus negates; applying it twice restores the value.
    fn double_negation_cancels(a: i16) -> bool {
        eval(&format!("--({a})")).unwrap() == eval(&format!("({a})")).unwrap()
    }

    /// Implicit multiplication means the same as the explicit form.
    fn implicit_multiplication_is_product(x: i8, k: u8) -> bool {
        let coefficient = u16::from(k) + 1;
        let implicit = eval_with(&format!("{coefficient}x"), "x", &x.to_string()).unwrap();
        let explicit = eval_with(&format!("{coefficient}*x"), "x", &x.to_string()).unwrap();
        implicit == explicit
    }

    /// Bars compute the absolute value.
    fn bars_are_absolute_value(a: i32) -> bool {
        let expected = a.unsigned_abs().to_string();
        eval(&format!("|({a})|")).unwrap() == expected
    }

    /// Multiplication binds tighter than addition.
    fn product_groups_before_sum(a: i16, b: i16, c: i16) -> bool {
        eval(&format!("{a}+{b}*{c}")).unwrap()
            == eval(&format!("{a}+({b}*{c})")).unwrap()
    }

    /// Power is right-associative.
    fn power_is_right_associative(a: u8, b: u8, c: u8) -> bool {
        let (a, b, c) = (u16::from(a % 5) + 2, b % 3 + 1, c % 3 + 1);
        eval(&format!("{a}^{b}^{c}")).unwrap()
            == eval(&format!("{a}^({b}^{c})")).unwrap()
    }

    /// Subtraction is left-associative.
    fn subtraction_is_left_associative(a: i16, b: i16, c: i16) -> bool {
        eval(&format!("{a}-{b}-{c}")).unwrap()
            == eval(&format!("({a}-{b})-{c}")).unwrap()
    }

    /// A run of sign operators collapses by minus-parity.
    fn sign_runs_merge(a: u16) -> bool {
        eval(&format!("0+--({a})")).unwrap() == eval(&format!("{a}")).unwrap()
            && eval(&format!("0---({a})")).unwrap() == eval(&format!("0-({a})")).unwrap()
    }
}

#[test]
fn preprocessing_is_idempotent_on_bar_free_input() {
    use crate::parser::preprocess::expand_absolute_value;
    let expanded = expand_absolute_value("|x| + 1").unwrap();
    assert_eq!(expanded, "abs(x) + 1");
    assert_eq!(expand_absolute_value(&expanded).unwrap(), expanded);
}
