//! Closed-form evaluation rules for a single payoff segment.

use std::f64::consts::E;

use num_traits::Float;

use crate::types::PayoffError;

/// Evaluation rule applied elementwise to a segment's sample grid.
///
/// # Variants
/// - `Zero`: constant zero
/// - `Linear`: `slope * x`
/// - `NaturalLog`: `ln(x)`, defined only for `x > 0`
///
/// # Examples
/// ```
/// use payoff_core::payoff::EvaluationRule;
///
/// let rule = EvaluationRule::inverse_e_linear();
/// let y = rule.apply(std::f64::consts::E).unwrap();
/// assert!((y - 1.0).abs() < 1e-12);
///
/// assert!(EvaluationRule::NaturalLog.apply(0.0_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum EvaluationRule {
    /// Constant zero.
    Zero,
    /// Linear scaling through the origin.
    Linear {
        /// Multiplier applied to `x`
        slope: f64,
    },
    /// Natural logarithm.
    NaturalLog,
}

impl EvaluationRule {
    /// Linear rule with slope `1/e`, the middle leg of the log-option payoff.
    ///
    /// Chosen so that the linear leg meets `ln(x)` at `x = e` with value 1.
    #[inline]
    pub fn inverse_e_linear() -> Self {
        EvaluationRule::Linear { slope: 1.0 / E }
    }

    /// Short label used in logs and tabular output.
    pub fn name(&self) -> &'static str {
        match self {
            EvaluationRule::Zero => "zero",
            EvaluationRule::Linear { .. } => "linear",
            EvaluationRule::NaturalLog => "log",
        }
    }

    /// Evaluates the rule at a single point.
    ///
    /// # Errors
    /// [`PayoffError::LogDomain`] when `NaturalLog` is applied to `x <= 0` or NaN.
    #[inline]
    pub fn apply<T: Float>(&self, x: T) -> Result<T, PayoffError> {
        match *self {
            EvaluationRule::Zero => Ok(T::zero()),
            EvaluationRule::Linear { slope } => {
                let slope = T::from(slope).unwrap_or_else(T::nan);
                Ok(slope * x)
            }
            EvaluationRule::NaturalLog => {
                // `!(x > 0)` also rejects NaN.
                if !(x > T::zero()) {
                    return Err(PayoffError::LogDomain {
                        x: x.to_f64().unwrap_or(f64::NAN),
                    });
                }
                Ok(x.ln())
            }
        }
    }

    /// Evaluates the rule over an ordered sequence, preserving length and order.
    ///
    /// # Errors
    /// Fails on the first point outside the rule's domain; no partial output is returned.
    pub fn evaluate<T: Float>(&self, xs: &[T]) -> Result<Vec<T>, PayoffError> {
        xs.iter().map(|&x| self.apply(x)).collect()
    }
}

/// Evaluates `rule` over `xs`.
///
/// Free-function form of [`EvaluationRule::evaluate`].
pub fn evaluate<T: Float>(rule: &EvaluationRule, xs: &[T]) -> Result<Vec<T>, PayoffError> {
    rule.evaluate(xs)
}
