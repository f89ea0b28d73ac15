//! The log-option payoff.
//!
//! # Mathematical Definition
//! ```text
//!          ⎧ 0        x < 0
//! f(x) =   ⎨ x / e    0 <= x < e
//!          ⎩ ln(x)    x >= e
//! ```
//!
//! The linear leg has slope `1/e` so that it meets the logarithm at the kink
//! `x = e` with value 1, making `f` continuous on the whole real line.

use std::f64::consts::E;

use tracing::debug;

use super::rule::EvaluationRule;
use super::sample::SampleSet;
use super::segment::{check_contiguous, Segment};
use crate::math::domain::Endpoint;
use crate::types::PayoffError;

/// Left edge of the default display domain.
pub const DOMAIN_MIN: f64 = -20.0;

/// Right edge of the default display domain.
pub const DOMAIN_MAX: f64 = 20.0;

/// Samples drawn from the zero leg `[DOMAIN_MIN, 0]`.
pub const ZERO_LEG_SAMPLES: usize = 400;

/// Samples drawn from the linear leg `[0, e)`.
pub const LINEAR_LEG_SAMPLES: usize = 200;

/// Samples drawn from the log leg `[e, DOMAIN_MAX]`.
pub const LOG_LEG_SAMPLES: usize = 300;

/// Absolute tolerance used when checking continuity at segment boundaries.
pub const CONTINUITY_TOLERANCE: f64 = 1e-9;

/// Left and right values of the payoff at one segment boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuityCheck {
    /// Boundary abscissa.
    pub boundary: f64,
    /// Limit of the left segment's rule at the boundary.
    pub left_limit: f64,
    /// Value of the right segment's rule at the boundary.
    pub right_value: f64,
}

impl ContinuityCheck {
    /// Absolute jump across the boundary.
    #[inline]
    pub fn gap(&self) -> f64 {
        (self.right_value - self.left_limit).abs()
    }

    /// Returns `true` if the jump is within `tolerance`.
    #[inline]
    pub fn is_continuous(&self, tolerance: f64) -> bool {
        self.gap() <= tolerance
    }
}

/// Piecewise log-option payoff clipped to a display domain.
///
/// # Examples
/// ```
/// use payoff_core::payoff::LogOptionPayoff;
///
/// let payoff = LogOptionPayoff::default();
/// assert_eq!(payoff.value(-3.0).unwrap(), 0.0);
/// assert!((payoff.value(std::f64::consts::E).unwrap() - 1.0).abs() < 1e-12);
///
/// let sets = payoff.sample().unwrap();
/// assert_eq!(sets.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedLogOptionPayoff"))]
pub struct LogOptionPayoff {
    domain_min: f64,
    domain_max: f64,
    sample_counts: [usize; 3],
}

/// Deserialised fields, checked through [`LogOptionPayoff::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedLogOptionPayoff {
    domain_min: f64,
    domain_max: f64,
    sample_counts: [usize; 3],
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedLogOptionPayoff> for LogOptionPayoff {
    type Error = PayoffError;

    fn try_from(raw: UncheckedLogOptionPayoff) -> Result<Self, Self::Error> {
        LogOptionPayoff::new(raw.domain_min, raw.domain_max)?.with_sample_counts(raw.sample_counts)
    }
}

impl Default for LogOptionPayoff {
    /// The `[-20, 20]` domain with 400/200/300 samples per leg.
    fn default() -> Self {
        Self {
            domain_min: DOMAIN_MIN,
            domain_max: DOMAIN_MAX,
            sample_counts: [ZERO_LEG_SAMPLES, LINEAR_LEG_SAMPLES, LOG_LEG_SAMPLES],
        }
    }
}

impl LogOptionPayoff {
    /// Creates a payoff over `[domain_min, domain_max]` with the default sample counts.
    ///
    /// The domain must reach both breakpoints: `domain_min <= 0` and
    /// `domain_max >= e`.
    ///
    /// # Errors
    /// [`PayoffError::InvalidBounds`] if the domain misses a breakpoint or is not finite.
    pub fn new(domain_min: f64, domain_max: f64) -> Result<Self, PayoffError> {
        if !domain_min.is_finite()
            || !domain_max.is_finite()
            || domain_min > 0.0
            || domain_max < Self::kink()
        {
            return Err(PayoffError::InvalidBounds {
                start: domain_min,
                end: domain_max,
            });
        }
        Ok(Self {
            domain_min,
            domain_max,
            ..Self::default()
        })
    }

    /// Overrides the per-leg sample counts (zero, linear, log).
    ///
    /// # Errors
    /// [`PayoffError::EmptyDomain`] if any count is zero.
    pub fn with_sample_counts(mut self, sample_counts: [usize; 3]) -> Result<Self, PayoffError> {
        if sample_counts.contains(&0) {
            return Err(PayoffError::EmptyDomain);
        }
        self.sample_counts = sample_counts;
        Ok(self)
    }

    /// The strike-like breakpoint where the payoff switches on.
    #[inline]
    pub fn strike() -> f64 {
        0.0
    }

    /// The kink where the linear leg hands over to the logarithm.
    #[inline]
    pub fn kink() -> f64 {
        E
    }

    /// Display domain as `(min, max)`.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Per-leg sample counts (zero, linear, log).
    #[inline]
    pub fn sample_counts(&self) -> [usize; 3] {
        self.sample_counts
    }

    /// Rule governing the payoff at `x`.
    pub fn rule_at(x: f64) -> EvaluationRule {
        if x < Self::strike() {
            EvaluationRule::Zero
        } else if x < Self::kink() {
            EvaluationRule::inverse_e_linear()
        } else {
            EvaluationRule::NaturalLog
        }
    }

    /// Evaluates the payoff at a single point.
    ///
    /// # Errors
    /// [`PayoffError::LogDomain`] only for NaN input, which falls through to the log leg.
    pub fn value(&self, x: f64) -> Result<f64, PayoffError> {
        Self::rule_at(x).apply(x)
    }

    /// The three legs, left to right, clipped to the display domain.
    pub fn segments(&self) -> Result<Vec<Segment>, PayoffError> {
        let [zero_n, linear_n, log_n] = self.sample_counts;
        Ok(vec![
            Segment::new(
                self.domain_min,
                Self::strike(),
                zero_n,
                Endpoint::Included,
                EvaluationRule::Zero,
            )?,
            // Excluding e keeps the shared boundary out of this leg; the log leg owns it.
            Segment::new(
                Self::strike(),
                Self::kink(),
                linear_n,
                Endpoint::Excluded,
                EvaluationRule::inverse_e_linear(),
            )?,
            Segment::new(
                Self::kink(),
                self.domain_max,
                log_n,
                Endpoint::Included,
                EvaluationRule::NaturalLog,
            )?,
        ])
    }

    /// Samples every leg in left-to-right order.
    pub fn sample(&self) -> Result<Vec<SampleSet<f64>>, PayoffError> {
        let segments = self.segments()?;
        check_contiguous(&segments)?;

        segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let samples = segment.sample()?;
                debug!(
                    segment = index,
                    rule = segment.rule().name(),
                    samples = samples.len(),
                    first = ?samples.first(),
                    last = ?samples.last(),
                    "Payoff leg evaluated"
                );
                Ok(samples)
            })
            .collect()
    }

    /// Left limit and right value at each interior boundary (`0` and `e`).
    pub fn continuity_checks(&self) -> Result<Vec<ContinuityCheck>, PayoffError> {
        let segments = self.segments()?;
        segments
            .windows(2)
            .map(|pair| {
                let boundary = pair[1].start();
                Ok(ContinuityCheck {
                    boundary,
                    left_limit: pair[0].rule().apply(boundary)?,
                    right_value: pair[1].rule().apply(boundary)?,
                })
            })
            .collect()
    }
}
