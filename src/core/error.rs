//! Error types for preprocessing, tokenization and evaluation
//!
//! This module provides:
//! - `EvalError` - The error enum covering every pipeline failure
//! - `Span` - Source location tracking for precise error messages

use std::fmt;

/// Where in the scanned expression an error sits.
///
/// Offsets count characters of the whitespace-stripped input the tokenizer
/// actually walks, so a reported position can sit left of where the same
/// character appears in the raw string. A span always covers at least one
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first covered character (0-indexed).
    start: usize,
    /// Number of characters covered (at least 1).
    len: usize,
}

impl Span {
    /// Span covering the single character at `position`.
    #[must_use]
    pub fn at(position: usize) -> Self {
        Span {
            start: position,
            len: 1,
        }
    }

    /// Span covering `from..to` (exclusive end). A `to` at or before `from`
    /// collapses to the single character at `from`.
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        Span {
            start: from,
            len: to.saturating_sub(from).max(1),
        }
    }

    /// Offset of the first covered character.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last covered character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Position rendered the way users count: 1-indexed, inclusive.
    #[must_use]
    pub fn display(&self) -> String {
        if self.len == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.start + self.len)
        }
    }
}

/// Errors that can occur while evaluating an expression.
///
/// Every variant is recoverable at the host boundary; the pipeline returns
/// the first error encountered and never produces partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    /// Invalid character or token arrangement in the input.
    Syntax {
        /// Description of the syntax error.
        msg: String,
        /// Location of the error in the source.
        span: Option<Span>,
    },
    /// The expression contains an odd number of absolute-value bars.
    UnbalancedBars,
    /// Parentheses do not pair up.
    MismatchedParentheses,
    /// Postfix reduction did not finish with exactly one value.
    MalformedExpression,
    /// A variable was referenced without a binding.
    UndefinedVariable {
        /// The unresolved variable name.
        name: String,
    },
    /// The variable bindings form a reference cycle.
    CyclicVariableReference {
        /// A variable on the detected cycle.
        name: String,
    },
    /// Division (or modulo) by exactly zero.
    DivisionByZero,
    /// A function argument fell outside its mathematical domain.
    Domain {
        /// Description of the violated domain constraint.
        msg: String,
    },
    /// The computation would exceed the representable precision range.
    PrecisionOverflow,
}

impl EvalError {
    /// Create a syntax error without location info.
    pub fn syntax(msg: impl Into<String>) -> Self {
        EvalError::Syntax {
            msg: msg.into(),
            span: None,
        }
    }

    /// Create a syntax error with a source span.
    pub fn syntax_at(msg: impl Into<String>, span: Span) -> Self {
        EvalError::Syntax {
            msg: msg.into(),
            span: Some(span),
        }
    }

    /// Create a domain error.
    pub fn domain(msg: impl Into<String>) -> Self {
        EvalError::Domain { msg: msg.into() }
    }

    /// Create an undefined-variable error.
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        EvalError::UndefinedVariable { name: name.into() }
    }

    /// Create a cyclic-reference error.
    pub fn cyclic_variable(name: impl Into<String>) -> Self {
        EvalError::CyclicVariableReference { name: name.into() }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Syntax { msg, span } => {
                write!(
                    f,
                    "Invalid syntax: {}{}",
                    msg,
                    span.map_or(String::new(), |s| s.display())
                )
            }
            EvalError::UnbalancedBars => {
                write!(f, "Absolute-value bars must come in pairs")
            }
            EvalError::MismatchedParentheses => write!(f, "Mismatched parentheses"),
            EvalError::MalformedExpression => write!(f, "Malformed expression"),
            EvalError::UndefinedVariable { name } => {
                write!(f, "Variable '{name}' is not defined")
            }
            EvalError::CyclicVariableReference { name } => {
                write!(f, "Variable '{name}' is defined in terms of itself")
            }
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::Domain { msg } => write!(f, "Domain error: {msg}"),
            EvalError::PrecisionOverflow => {
                write!(f, "Result exceeds the representable precision range")
            }
        }
    }
}

impl std::error::Error for EvalError {}
