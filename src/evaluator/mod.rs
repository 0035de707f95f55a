//! Postfix reduction: the stack machine that turns an RPN token stream into
//! a single decimal, plus the entry point tying the whole pipeline together.

pub(crate) mod variables;

use crate::bigmath;
use crate::core::context::EvalContext;
use crate::core::error::EvalError;
use crate::core::token::{Token, TokenKind};
use crate::parser;
use crate::registry::{Element, Registry};
use bigdecimal::BigDecimal;
use log::debug;
use std::collections::HashMap;
use std::str::FromStr;

/// A value on the reduction stack. Selector strings appear only between a
/// three-argument function's operands and its application.
enum Value {
    Num(BigDecimal),
    Text(String),
}

/// Run the full pipeline: preprocess, tokenize, bind variables, convert to
/// postfix, reduce. Reentrant: variable resolution calls back in here with
/// the same binding snapshot.
pub(crate) fn evaluate_internal(
    expression: &str,
    variables: &HashMap<String, String>,
    registry: &Registry,
    ctx: &EvalContext,
) -> Result<BigDecimal, EvalError> {
    let tokens = parser::tokenize(expression, registry)?;
    let tokens = variables::substitute(tokens, variables, registry, ctx)?;
    let postfix = parser::postfix::to_postfix(&tokens, registry)?;
    debug!(
        "reducing {} postfix tokens at precision {}",
        postfix.len(),
        ctx.math().precision()
    );
    reduce(&postfix, registry, ctx)
}

/// Reduce a postfix token stream to a single decimal.
pub(crate) fn reduce(
    postfix: &[Token],
    registry: &Registry,
    ctx: &EvalContext,
) -> Result<BigDecimal, EvalError> {
    let mut stack: Vec<Value> = Vec::new();

    for token in postfix {
        match token.kind {
            TokenKind::Number => {
                let value = BigDecimal::from_str(&token.lexeme)
                    .map_err(|_| EvalError::MalformedExpression)?;
                stack.push(Value::Num(bigmath::round(&value, ctx.math())));
            }
            TokenKind::Constant => {
                let Some(Element::Constant { value, .. }) = registry.find(&token.lexeme) else {
                    return Err(EvalError::MalformedExpression);
                };
                stack.push(Value::Num(value(ctx)));
            }
            TokenKind::Text => stack.push(Value::Text(token.lexeme.clone())),
            TokenKind::Operator => {
                let result = match registry.find(&token.lexeme) {
                    Some(Element::Binary { apply, .. }) => {
                        let b = pop_number(&mut stack)?;
                        let a = pop_number(&mut stack)?;
                        apply(&a, &b, ctx)?
                    }
                    Some(Element::Prefix { apply, .. } | Element::Postfix { apply, .. }) => {
                        let a = pop_number(&mut stack)?;
                        apply(&a, ctx)?
                    }
                    _ => return Err(EvalError::MalformedExpression),
                };
                stack.push(Value::Num(result));
            }
            TokenKind::Function => {
                let result = match registry.find(&token.lexeme) {
                    Some(Element::Function { arity, apply, .. }) => {
                        let mut args = Vec::with_capacity(*arity);
                        for _ in 0..*arity {
                            args.push(pop_number(&mut stack)?);
                        }
                        args.reverse();
                        apply(&args, ctx)?
                    }
                    Some(Element::ThreeArg { apply, .. }) => {
                        let Some(Value::Text(selector)) = stack.pop() else {
                            return Err(EvalError::MalformedExpression);
                        };
                        let second = pop_number(&mut stack)?;
                        let first = pop_number(&mut stack)?;
                        apply(&first, &second, &selector, ctx)?
                    }
                    _ => return Err(EvalError::MalformedExpression),
                };
                stack.push(Value::Num(result));
            }
            TokenKind::Variable
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::Semicolon => return Err(EvalError::MalformedExpression),
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(Value::Num(result)), true) => Ok(result),
        _ => Err(EvalError::MalformedExpression),
    }
}

fn pop_number(stack: &mut Vec<Value>) -> Result<BigDecimal, EvalError> {
    match stack.pop() {
        Some(Value::Num(value)) => Ok(value),
        _ => Err(EvalError::MalformedExpression),
    }
}
