//! Core types for expression evaluation
//!
//! This module contains the fundamental types:
//! - `MathContext` / `AngleMode` / `EvalContext` - Evaluation configuration
//! - `Token` / `TokenKind` - Lexical atoms
//! - `EvalError` / `Span` - Error types

pub(crate) mod context; // Precision, rounding, angle mode, locale
pub(crate) mod error; // Error types (EvalError, Span)
pub(crate) mod token; // Lexical tokens (Token, TokenKind)

// Public re-exports (for external API)
pub use context::{AngleMode, DEFAULT_PRECISION, MathContext};
pub use error::{EvalError, Span};
