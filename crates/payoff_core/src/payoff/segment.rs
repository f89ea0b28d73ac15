//! Payoff segments: an interval, a sample grid and an evaluation rule.

use tracing::trace;

use super::rule::EvaluationRule;
use super::sample::SampleSet;
use crate::math::domain::{generate_domain, Endpoint};
use crate::types::PayoffError;

/// One contiguous sub-domain of a piecewise payoff.
///
/// The interval is `[start, end]` when `endpoint` is [`Endpoint::Included`]
/// and `[start, end)` otherwise. `sample_count` points are drawn from it.
///
/// # Examples
/// ```
/// use payoff_core::math::domain::Endpoint;
/// use payoff_core::payoff::{EvaluationRule, Segment};
///
/// let rule = EvaluationRule::Linear { slope: 2.0 };
/// let segment = Segment::new(0.0, 2.0, 4, Endpoint::Excluded, rule).unwrap();
/// let samples = segment.sample().unwrap();
/// assert_eq!(samples.xs(), &[0.0, 0.5, 1.0, 1.5]);
/// assert_eq!(samples.ys(), &[0.0, 1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedSegment"))]
pub struct Segment {
    start: f64,
    end: f64,
    sample_count: usize,
    endpoint: Endpoint,
    rule: EvaluationRule,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedSegment {
    start: f64,
    end: f64,
    sample_count: usize,
    endpoint: Endpoint,
    rule: EvaluationRule,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedSegment> for Segment {
    type Error = PayoffError;

    fn try_from(raw: UncheckedSegment) -> Result<Self, Self::Error> {
        Segment::new(raw.start, raw.end, raw.sample_count, raw.endpoint, raw.rule)
    }
}

impl Segment {
    /// Creates a segment after validating its sample grid.
    ///
    /// # Errors
    /// - [`PayoffError::EmptyDomain`] if `sample_count == 0`
    /// - [`PayoffError::InvalidBounds`] if a bound is not finite or `start > end`
    pub fn new(
        start: f64,
        end: f64,
        sample_count: usize,
        endpoint: Endpoint,
        rule: EvaluationRule,
    ) -> Result<Self, PayoffError> {
        if sample_count == 0 {
            return Err(PayoffError::EmptyDomain);
        }
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(PayoffError::InvalidBounds { start, end });
        }
        Ok(Self {
            start,
            end,
            sample_count,
            endpoint,
            rule,
        })
    }

    /// Left bound (always included).
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Right bound.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of samples drawn from the interval.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Whether `end` belongs to the segment.
    #[inline]
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Evaluation rule for this segment.
    #[inline]
    pub fn rule(&self) -> EvaluationRule {
        self.rule
    }

    /// Returns `true` if `x` lies in the segment's interval.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && (x < self.end || (self.endpoint.is_included() && x == self.end))
    }

    /// Generates the segment's sample grid.
    pub fn domain(&self) -> Result<Vec<f64>, PayoffError> {
        generate_domain(self.start, self.end, self.sample_count, self.endpoint)
    }

    /// Generates the grid and evaluates the rule over it.
    pub fn sample(&self) -> Result<SampleSet<f64>, PayoffError> {
        let xs = self.domain()?;
        let ys = self.rule.evaluate(&xs)?;
        trace!(
            rule = self.rule.name(),
            start = self.start,
            end = self.end,
            samples = xs.len(),
            "Segment sampled"
        );
        SampleSet::new(xs, ys)
    }
}

/// Verifies that each segment starts where the previous one ends.
///
/// # Errors
/// [`PayoffError::NonContiguousSegments`] for the first pair that leaves a gap or overlaps.
pub fn check_contiguous(segments: &[Segment]) -> Result<(), PayoffError> {
    for pair in segments.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        if left.end != right.start {
            return Err(PayoffError::NonContiguousSegments {
                left_end: left.end,
                right_start: right.start,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;

    fn linear_segment() -> Segment {
        Segment::new(
            0.0,
            E,
            200,
            Endpoint::Excluded,
            EvaluationRule::inverse_e_linear(),
        )
        .unwrap()
    }

    #[test]
    fn test_segment_rejects_empty_grid() {
        let result = Segment::new(0.0, 1.0, 0, Endpoint::Included, EvaluationRule::Zero);
        assert_eq!(result, Err(PayoffError::EmptyDomain));
    }

    #[test]
    fn test_segment_rejects_inverted_bounds() {
        let result = Segment::new(1.0, 0.0, 10, Endpoint::Included, EvaluationRule::Zero);
        assert!(matches!(result, Err(PayoffError::InvalidBounds { .. })));
    }

    #[test]
    fn test_contains_respects_endpoint() {
        let segment = linear_segment();
        assert!(segment.contains(0.0));
        assert!(segment.contains(1.0));
        assert!(!segment.contains(E));
        assert!(!segment.contains(-1e-12));

        let closed = Segment::new(E, 20.0, 300, Endpoint::Included, EvaluationRule::NaturalLog)
            .unwrap();
        assert!(closed.contains(E));
        assert!(closed.contains(20.0));
    }

    #[test]
    fn test_sample_lengths_match() {
        let samples = linear_segment().sample().unwrap();
        assert_eq!(samples.len(), 200);
        assert_eq!(samples.xs().len(), samples.ys().len());
    }

    #[test]
    fn test_log_segment_over_non_positive_domain_fails() {
        let segment =
            Segment::new(-1.0, 1.0, 3, Endpoint::Included, EvaluationRule::NaturalLog).unwrap();
        assert_eq!(segment.sample(), Err(PayoffError::LogDomain { x: -1.0 }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_empty_grid() {
        let segment: Segment = serde_json::from_str(
            r#"{"start": 0.0, "end": 1.0, "sample_count": 5, "endpoint": "included", "rule": {"kind": "zero"}}"#,
        )
        .unwrap();
        assert_eq!(segment.sample_count(), 5);
        assert_eq!(segment.rule(), EvaluationRule::Zero);

        let result = serde_json::from_str::<Segment>(
            r#"{"start": 0.0, "end": 1.0, "sample_count": 0, "endpoint": "included", "rule": {"kind": "zero"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_check_contiguous() {
        let zero = Segment::new(-20.0, 0.0, 400, Endpoint::Included, EvaluationRule::Zero).unwrap();
        let log = Segment::new(E, 20.0, 300, Endpoint::Included, EvaluationRule::NaturalLog)
            .unwrap();

        assert!(check_contiguous(&[zero, linear_segment(), log]).is_ok());
        assert_eq!(
            check_contiguous(&[zero, log]),
            Err(PayoffError::NonContiguousSegments {
                left_end: 0.0,
                right_start: E,
            })
        );
        assert!(check_contiguous(&[]).is_ok());
    }
}
