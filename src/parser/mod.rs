//! Parsing pipeline - raw expression text to a normalized token stream.

pub(crate) mod lexer;
pub(crate) mod normalize;
pub(crate) mod postfix;
pub(crate) mod preprocess;

use crate::core::error::EvalError;
use crate::core::token::Token;
use crate::registry::Registry;
use log::debug;

/// Tokenize an expression string.
///
/// Pipeline: expand absolute-value bars -> scan -> normalize (insert
/// implicit multiplication, merge sign runs, resolve unary signs).
pub(crate) fn tokenize(input: &str, registry: &Registry) -> Result<Vec<Token>, EvalError> {
    if input.trim().is_empty() {
        return Err(EvalError::syntax("empty expression"));
    }

    let expanded = preprocess::expand_absolute_value(input)?;
    let scanned = lexer::scan(&expanded, registry)?;
    let tokens = normalize::normalize(scanned, registry);
    debug!("tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}
