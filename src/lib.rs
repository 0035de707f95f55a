#![forbid(unsafe_code)]
//! Arbitrary-Precision Expression Evaluator
//!
//! A focused Rust library that evaluates textual infix expressions to
//! high-precision decimals.
//!
//! # Features
//! - Arbitrary-precision decimal arithmetic with configurable precision and
//!   rounding
//! - Rich function library: trigonometric/hyperbolic functions and their
//!   inverses, logarithms, radicals, combinatorics, coordinate conversions
//! - Constants (`pi`, `e`), factorial, absolute-value bar pairs (`|x|`)
//! - Implicit multiplication (`2x`, `2(3+1)`, `2pi`)
//! - User-defined variables bound to expressions, resolved recursively with
//!   cycle detection
//! - Degree/radian angle mode selection
//!
//! # Usage Examples
//!
//! ## One-shot evaluation
//! ```
//! use decimath::evaluate_str;
//! let result = evaluate_str("(2+3)*4 - 2^3").unwrap();
//! assert_eq!(result, "12");
//! ```
//!
//! ## Configured evaluator
//! ```
//! use decimath::{AngleMode, Evaluator, RoundingMode};
//! let evaluator = Evaluator::new()
//!     .precision(50)
//!     .rounding(RoundingMode::HalfUp)
//!     .angle_mode(AngleMode::Deg);
//! let result = evaluator.evaluate("2*sin(30) + cos(60)").unwrap();
//! assert_eq!(evaluator.format(&result), "1.5");
//! ```
//!
//! ## Variables
//! ```
//! use decimath::Evaluator;
//! use std::collections::HashMap;
//!
//! let mut vars = HashMap::new();
//! vars.insert("x".to_string(), "4".to_string());
//! let evaluator = Evaluator::new();
//! let result = evaluator.evaluate_with("2x^2 + 3x - 1", &vars).unwrap();
//! assert_eq!(evaluator.format(&result), "43");
//! ```

mod bigmath; // Arbitrary-precision elementary functions over BigDecimal
mod core; // Core types: contexts, tokens, errors
mod evaluator; // Postfix reduction and variable binding
mod parser; // Preprocessing, tokenization, postfix conversion
mod registry; // Operator/function/constant catalogue

#[cfg(test)]
mod tests;

// Re-export key types
pub use crate::core::{AngleMode, DEFAULT_PRECISION, EvalError, MathContext, Span};
pub use bigdecimal::{BigDecimal, RoundingMode};

use crate::core::context::EvalContext;
use crate::registry::Registry;
use std::collections::HashMap;

/// A configured expression evaluator.
///
/// Configuration is captured at construction through the builder methods and
/// stays immutable afterwards; a single instance can evaluate any number of
/// expressions. The element registry is built once per evaluator.
///
/// # Example
/// ```
/// use decimath::Evaluator;
/// let evaluator = Evaluator::new().precision(20);
/// let result = evaluator.evaluate("sqrt(2)").unwrap();
/// assert_eq!(evaluator.format(&result), "1.4142135623730950488");
/// ```
pub struct Evaluator {
    context: EvalContext,
    registry: Registry,
}

impl Evaluator {
    /// Create an evaluator with the default configuration: 50 significant
    /// digits, half-up rounding, radians, locale `en-US`.
    #[must_use]
    pub fn new() -> Self {
        Evaluator {
            context: EvalContext::default(),
            registry: Registry::standard(),
        }
    }

    /// Set the number of significant digits (clamped to at least 1).
    #[must_use]
    pub fn precision(mut self, digits: u32) -> Self {
        let math = MathContext::new(digits, self.context.math().rounding());
        self.context = EvalContext::new(math, self.context.angle(), self.context.locale().to_owned());
        self
    }

    /// Set the rounding mode applied by every operation.
    #[must_use]
    pub fn rounding(mut self, mode: RoundingMode) -> Self {
        let math = MathContext::new(self.context.math().precision(), mode);
        self.context = EvalContext::new(math, self.context.angle(), self.context.locale().to_owned());
        self
    }

    /// Set the angle mode for trigonometric functions.
    #[must_use]
    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.context = EvalContext::new(
            *self.context.math(),
            mode,
            self.context.locale().to_owned(),
        );
        self
    }

    /// Set the locale tag used by [`Evaluator::format`]. Numeric semantics
    /// are locale-independent.
    #[must_use]
    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.context = EvalContext::new(*self.context.math(), self.context.angle(), tag.into());
        self
    }

    /// Evaluate an expression without variables.
    ///
    /// The result is normalized: trailing zeros are stripped.
    pub fn evaluate(&self, expression: &str) -> Result<BigDecimal, EvalError> {
        self.evaluate_with(expression, &HashMap::new())
    }

    /// Evaluate an expression against a map of variable bindings, each
    /// binding itself an expression.
    ///
    /// The map is treated as a per-call snapshot: nested resolutions see the
    /// same bindings, and cyclic references are rejected up front.
    pub fn evaluate_with(
        &self,
        expression: &str,
        variables: &HashMap<String, String>,
    ) -> Result<BigDecimal, EvalError> {
        let value =
            evaluator::evaluate_internal(expression, variables, &self.registry, &self.context)?;
        Ok(value.normalized())
    }

    /// Render a result as a plain decimal string (never exponent notation)
    /// with the locale's decimal separator.
    #[must_use]
    pub fn format(&self, value: &BigDecimal) -> String {
        let plain = bigmath::to_plain_string(value);
        if locale_uses_decimal_comma(self.context.locale()) {
            plain.replace('.', ",")
        } else {
            plain
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

/// Locales whose primary language writes decimals with a comma.
fn locale_uses_decimal_comma(tag: &str) -> bool {
    let language = tag.split(['-', '_']).next().unwrap_or(tag);
    matches!(
        language,
        "de" | "fr" | "es" | "it" | "pt" | "nl" | "pl" | "ru" | "tr" | "sv" | "fi" | "da" | "no"
    )
}

/// Evaluate an expression with the default configuration and return the
/// result in canonical plain-string form.
///
/// # Example
/// ```
/// use decimath::evaluate_str;
/// assert_eq!(evaluate_str("5!").unwrap(), "120");
/// assert_eq!(evaluate_str("|(-7) + 2|").unwrap(), "5");
/// ```
pub fn evaluate_str(expression: &str) -> Result<String, EvalError> {
    let evaluator = Evaluator::new();
    let value = evaluator.evaluate(expression)?;
    Ok(evaluator.format(&value))
}
