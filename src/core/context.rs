//! Evaluation configuration: numeric context, angle mode, locale.

use bigdecimal::RoundingMode;

/// Default number of significant digits carried by a freshly built evaluator.
pub const DEFAULT_PRECISION: u32 = 50;

/// Precision and rounding configuration applied to every numeric operation.
///
/// The decimal type itself carries no precision; every operation receives a
/// `MathContext` and rounds its result accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    /// Significant digits kept by each operation (at least 1).
    precision: u32,
    /// Rounding mode applied when a result is cut to `precision` digits.
    rounding: RoundingMode,
}

impl MathContext {
    /// Create a context. A precision of zero is clamped to 1.
    #[must_use]
    pub fn new(precision: u32, rounding: RoundingMode) -> Self {
        MathContext {
            precision: precision.max(1),
            rounding,
        }
    }

    /// Significant digits kept by each operation.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounding mode applied when results are cut to `precision` digits.
    #[must_use]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}

impl Default for MathContext {
    fn default() -> Self {
        MathContext::new(DEFAULT_PRECISION, RoundingMode::HalfUp)
    }
}

/// Whether trigonometric inputs are interpreted as degrees or radians.
///
/// In [`AngleMode::Deg`] the direct trigonometric functions convert their
/// argument to radians before evaluating, and the inverse functions convert
/// their result back to degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Inputs and outputs in degrees.
    Deg,
    /// Inputs and outputs in radians.
    #[default]
    Rad,
}

/// Everything a semantic closure needs while reducing an expression.
///
/// The locale is informational only (it drives output formatting); the
/// numeric semantics are locale-independent.
#[derive(Debug, Clone)]
pub(crate) struct EvalContext {
    math: MathContext,
    angle: AngleMode,
    locale: String,
}

impl EvalContext {
    pub(crate) fn new(math: MathContext, angle: AngleMode, locale: String) -> Self {
        EvalContext {
            math,
            angle,
            locale,
        }
    }

    pub(crate) fn math(&self) -> &MathContext {
        &self.math
    }

    pub(crate) fn angle(&self) -> AngleMode {
        self.angle
    }

    pub(crate) fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        EvalContext::new(MathContext::default(), AngleMode::default(), String::from("en-US"))
    }
}
