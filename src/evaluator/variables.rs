//! Variable binding: replaces `VARIABLE` tokens with the evaluated value of
//! their binding expression.
//!
//! Bindings map a name to an unresolved expression string; resolution runs
//! the full pipeline reentrantly with the same per-call snapshot, so nested
//! evaluations see the outer bindings. Before any substitution the binding
//! graph is checked for cycles with a three-color depth-first search.

use super::evaluate_internal;
use crate::bigmath;
use crate::core::context::EvalContext;
use crate::core::error::EvalError;
use crate::core::token::{Token, TokenKind};
use crate::parser;
use crate::registry::Registry;
use log::debug;
use std::collections::HashMap;

/// Replace every `VARIABLE` token with a `NUMBER` token carrying the plain
/// string form of the variable's evaluated value.
pub(crate) fn substitute(
    tokens: Vec<Token>,
    variables: &HashMap<String, String>,
    registry: &Registry,
    ctx: &EvalContext,
) -> Result<Vec<Token>, EvalError> {
    if !tokens.iter().any(|t| t.kind == TokenKind::Variable) {
        return Ok(tokens);
    }
    detect_cycles(variables, registry)?;

    let mut output = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.kind != TokenKind::Variable {
            output.push(token);
            continue;
        }
        let binding = variables
            .get(&token.lexeme)
            .ok_or_else(|| EvalError::undefined_variable(token.lexeme.clone()))?;
        debug!("resolving variable '{}'", token.lexeme);
        let value = evaluate_internal(binding, variables, registry, ctx)?;
        output.push(Token::number(bigmath::to_plain_string(&value)));
    }
    Ok(output)
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Reject cyclic bindings with a DFS over the dependency graph. Edges are
/// discovered by tokenizing each binding and collecting its variable
/// references; a gray-on-gray edge is a cycle.
fn detect_cycles(
    variables: &HashMap<String, String>,
    registry: &Registry,
) -> Result<(), EvalError> {
    let mut dependencies: HashMap<&str, Vec<String>> = HashMap::with_capacity(variables.len());
    for (name, expression) in variables {
        // a binding that fails to tokenize has no edges here; the error
        // surfaces if the variable is actually referenced
        let refs = parser::tokenize(expression, registry)
            .map(|tokens| {
                tokens
                    .into_iter()
                    .filter(|t| t.kind == TokenKind::Variable)
                    .map(|t| t.lexeme)
                    .collect()
            })
            .unwrap_or_default();
        dependencies.insert(name.as_str(), refs);
    }

    let mut colors: HashMap<String, Color> = variables
        .keys()
        .map(|name| (name.clone(), Color::White))
        .collect();
    for name in variables.keys() {
        visit(name, &dependencies, &mut colors)?;
    }
    Ok(())
}

fn visit(
    name: &str,
    dependencies: &HashMap<&str, Vec<String>>,
    colors: &mut HashMap<String, Color>,
) -> Result<(), EvalError> {
    match colors.get(name) {
        // unbound names are leaves; substitution reports them
        None | Some(Color::Black) => return Ok(()),
        Some(Color::Gray) => return Err(EvalError::cyclic_variable(name)),
        Some(Color::White) => {}
    }
    colors.insert(name.to_owned(), Color::Gray);
    if let Some(refs) = dependencies.get(name) {
        for reference in refs {
            visit(reference, dependencies, colors)?;
        }
    }
    colors.insert(name.to_owned(), Color::Black);
    Ok(())
}
