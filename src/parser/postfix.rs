//! Infix to postfix conversion (Dijkstra's shunting-yard algorithm).

use crate::core::error::EvalError;
use crate::core::token::{Token, TokenKind};
use crate::registry::{Associativity, Element, Registry};

/// Convert an infix token stream into Reverse Polish Notation.
///
/// Operands (numbers, constants, selector strings) stream straight to the
/// output; operators wait on a stack until an operator of lower binding
/// power, a parenthesis boundary or the end of input releases them. No
/// parenthesis token survives the conversion.
pub(crate) fn to_postfix(tokens: &[Token], registry: &Registry) -> Result<Vec<Token>, EvalError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number | TokenKind::Constant | TokenKind::Text => {
                output.push(token.clone());
            }
            TokenKind::Variable => {
                // variables are substituted before conversion; one slipping
                // through means the binder was skipped
                return Err(EvalError::undefined_variable(token.lexeme.clone()));
            }
            TokenKind::Function => stack.push(token.clone()),
            TokenKind::Semicolon => loop {
                let at_paren = match stack.last() {
                    Some(top) => top.kind == TokenKind::LeftParen,
                    None => return Err(EvalError::MismatchedParentheses),
                };
                if at_paren {
                    break;
                }
                if let Some(top) = stack.pop() {
                    output.push(top);
                }
            },
            TokenKind::Operator => {
                let (precedence, associativity) = priority(token, registry)?;
                loop {
                    let pops = match stack.last() {
                        Some(top) if top.kind == TokenKind::Function => true,
                        Some(top) if top.kind == TokenKind::Operator => {
                            let (top_precedence, _) = priority(top, registry)?;
                            top_precedence > precedence
                                || (top_precedence == precedence
                                    && associativity == Associativity::Left)
                        }
                        _ => false,
                    };
                    if !pops {
                        break;
                    }
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(token.clone());
            }
            TokenKind::LeftParen => stack.push(token.clone()),
            TokenKind::RightParen => {
                loop {
                    match stack.pop() {
                        Some(top) if top.kind == TokenKind::LeftParen => break,
                        Some(top) => output.push(top),
                        None => return Err(EvalError::MismatchedParentheses),
                    }
                }
                if stack
                    .last()
                    .is_some_and(|top| top.kind == TokenKind::Function)
                {
                    if let Some(function) = stack.pop() {
                        output.push(function);
                    }
                }
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::LeftParen {
            return Err(EvalError::MismatchedParentheses);
        }
        output.push(top);
    }
    Ok(output)
}

fn priority(token: &Token, registry: &Registry) -> Result<(u8, Associativity), EvalError> {
    registry
        .find(&token.lexeme)
        .and_then(Element::priority)
        .ok_or(EvalError::MalformedExpression)
}
