//! Token-stream normalization passes, run after scanning in a fixed order:
//!
//! 1. insert implicit multiplication between juxtaposed atoms
//! 2. merge runs of consecutive `+`/`-` operators by minus-parity
//! 3. resolve remaining prefix-position signs (`+` vanishes, `-` becomes the
//!    prefix negation operator)
//!
//! A signed literal directly after `)` never reaches these passes through
//! the sign decision table; the one place it does appear is as the first
//! operand of a three-argument call, and there the implicit-multiplication
//! table's `) · number` entry supplies the product.

use crate::core::token::{Token, TokenKind};
use crate::registry::{Element, Registry};

/// Symbol of the internal prefix negation operator.
const NEGATION: &str = "#";

/// Run all normalization passes.
pub(crate) fn normalize(tokens: Vec<Token>, registry: &Registry) -> Vec<Token> {
    let tokens = insert_implicit_multiplication(tokens);
    let tokens = merge_sign_runs(tokens);
    resolve_unary_signs(tokens, registry)
}

/// Whether juxtaposing `left` and `right` means multiplication.
fn implied_product(left: &Token, right: &Token) -> bool {
    use TokenKind::{Constant, Function, LeftParen, Number, RightParen, Variable};
    matches!(
        (left.kind, right.kind),
        (Number, LeftParen | Function | Variable | Constant)
            | (RightParen, Number | Function | LeftParen | Variable | Constant)
            | (Variable | Constant, Number | Variable | Constant | LeftParen | Function)
    )
}

/// Insert a `*` operator between adjacent tokens whose juxtaposition means a
/// product (`2x`, `(a)(b)`, `2pi`, `pi sin(x)`…).
fn insert_implicit_multiplication(tokens: Vec<Token>) -> Vec<Token> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(previous) = output.last() {
            if implied_product(previous, &token) {
                output.push(Token::operator("*"));
            }
        }
        output.push(token);
    }
    output
}

fn is_sign_operator(token: &Token) -> bool {
    token.kind == TokenKind::Operator && (token.lexeme == "+" || token.lexeme == "-")
}

/// Collapse every run of two or more consecutive `+`/`-` operators into a
/// single `+` (even number of minuses) or `-` (odd).
fn merge_sign_runs(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if is_sign_operator(&tokens[i]) {
            let mut end = i;
            let mut minuses = 0;
            while end < tokens.len() && is_sign_operator(&tokens[end]) {
                if tokens[end].lexeme == "-" {
                    minuses += 1;
                }
                end += 1;
            }
            if end - i > 1 {
                output.push(Token::operator(if minuses % 2 == 0 { "+" } else { "-" }));
            } else {
                output.push(tokens[i].clone());
            }
            i = end;
        } else {
            output.push(tokens[i].clone());
            i += 1;
        }
    }
    output
}

/// A surviving sign operator in prefix position is unary: `+` disappears,
/// `-` becomes the prefix negation operator.
///
/// Prefix position means: at the stream start, or after `(`, `;`, a function
/// name, or any operator that is not postfix.
fn resolve_unary_signs(tokens: Vec<Token>, registry: &Registry) -> Vec<Token> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if is_sign_operator(&token) && in_prefix_position(output.last(), registry) {
            if token.lexeme == "-" {
                output.push(Token::operator(NEGATION));
            }
            // unary '+' is the identity; drop it
            continue;
        }
        output.push(token);
    }
    output
}

fn in_prefix_position(previous: Option<&Token>, registry: &Registry) -> bool {
    match previous {
        None => true,
        Some(token) => match token.kind {
            TokenKind::LeftParen | TokenKind::Semicolon | TokenKind::Function => true,
            TokenKind::Operator => !registry
                .find(&token.lexeme)
                .is_some_and(Element::is_postfix),
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::scan;

    fn registry() -> Registry {
        Registry::standard()
    }

    fn normalized(input: &str) -> Vec<String> {
        let reg = registry();
        let tokens = scan(input, &reg).unwrap();
        normalize(tokens, &reg)
            .into_iter()
            .map(|t| t.lexeme)
            .collect()
    }

    #[test]
    fn implicit_multiplication_pairs() {
        assert_eq!(normalized("2x"), vec!["2", "*", "x"]);
        assert_eq!(normalized("2(3)"), vec!["2", "*", "(", "3", ")"]);
        assert_eq!(normalized("(2)(3)"), vec!["(", "2", ")", "*", "(", "3", ")"]);
        assert_eq!(normalized("2pi"), vec!["2", "*", "pi"]);
        assert_eq!(normalized("pi sin(1)"), vec!["pi", "*", "sin", "(", "1", ")"]);
        assert_eq!(normalized("x y"), vec!["xy"]); // whitespace is stripped first
        assert_eq!(normalized("(1)2"), vec!["(", "1", ")", "*", "2"]);
    }

    #[test]
    fn no_product_between_operator_pairs() {
        assert_eq!(normalized("2+3"), vec!["2", "+", "3"]);
        assert_eq!(normalized("sin(1)"), vec!["sin", "(", "1", ")"]);
    }

    #[test]
    fn sign_runs_collapse_by_parity() {
        // "2--(3)" scans to [2, -, -, (, 3, )]; the run "- -" merges to "+"
        assert_eq!(normalized("2--(3)"), vec!["2", "+", "(", "3", ")"]);
        assert_eq!(normalized("2-+-+(3)"), vec!["2", "+", "(", "3", ")"]);
        assert_eq!(normalized("2-+(3)"), vec!["2", "-", "(", "3", ")"]);
    }

    #[test]
    fn unary_signs_resolve() {
        assert_eq!(normalized("-(2+3)"), vec!["#", "(", "2", "+", "3", ")"]);
        assert_eq!(normalized("+(2)"), vec!["(", "2", ")"]);
        assert_eq!(normalized("-sin(1)"), vec!["#", "sin", "(", "1", ")"]);
        assert_eq!(normalized("2*-(3)"), vec!["2", "*", "#", "(", "3", ")"]);
        // double negation cancels entirely
        assert_eq!(normalized("--(2)"), vec!["(", "2", ")"]);
    }

    #[test]
    fn binary_minus_after_postfix_stays_binary() {
        assert_eq!(normalized("5!-3"), vec!["5", "!", "-", "3"]);
    }

    #[test]
    fn three_arg_call_after_paren_multiplies() {
        // the call's first operand bypasses the sign table, so the stream
        // shows a (possibly signed) number right after ')'; the implicit
        // product must land before it, keeping the operand intact
        assert_eq!(
            normalized("(2)polarToCartesian(-3;90;y)"),
            vec!["(", "2", ")", "*", "-3", "90", "y", "polarToCartesian"]
        );
        assert_eq!(
            normalized("(2)polarToCartesian(3;90;y)"),
            vec!["(", "2", ")", "*", "3", "90", "y", "polarToCartesian"]
        );
    }

    #[test]
    fn absorbed_signs_are_left_alone() {
        assert_eq!(normalized("-5"), vec!["-5"]);
        assert_eq!(normalized("2^-3"), vec!["2", "^", "-3"]);
        assert_eq!(normalized("--5"), vec!["#", "-5"]);
    }
}
