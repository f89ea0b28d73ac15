//! Evenly spaced sample grids.
//!
//! Two generators cover every grid the payoff chart needs:
//! - [`generate_domain`]: a fixed number of samples across an interval,
//!   optionally excluding the right endpoint (linspace semantics)
//! - [`arange`]: a fixed step from a start value up to, but not including,
//!   a stop value (used for axis ticks)
//!
//! All functions use generic type parameter `T: num_traits::Float` for f32/f64 support.

use num_traits::Float;

use crate::types::PayoffError;

/// Whether the right bound of an interval is part of the generated grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Endpoint {
    /// The grid ends exactly on the right bound.
    Included,
    /// The grid stops one step short of the right bound.
    Excluded,
}

impl Endpoint {
    /// Returns `true` for [`Endpoint::Included`].
    #[inline]
    pub fn is_included(self) -> bool {
        matches!(self, Endpoint::Included)
    }
}

impl From<bool> for Endpoint {
    /// `true` maps to [`Endpoint::Included`].
    fn from(include_right_endpoint: bool) -> Self {
        if include_right_endpoint {
            Endpoint::Included
        } else {
            Endpoint::Excluded
        }
    }
}

#[inline]
fn index_to_float<T: Float>(i: usize) -> T {
    T::from(i).unwrap_or_else(T::nan)
}

/// Generates `sample_count` evenly spaced values over `[start, end]`.
///
/// # Mathematical Definition
/// ```text
/// step = (end - start) / (n - 1)   if endpoint included
/// step = (end - start) / n         if endpoint excluded
/// x_i  = start + i * step,   i = 0..n
/// ```
///
/// # Guarantees
/// - The first element equals `start` exactly.
/// - With [`Endpoint::Included`] and `n > 1` the last element equals `end` exactly.
/// - The sequence is non-decreasing and never exceeds `end`.
/// - A single sample always yields `[start]`.
///
/// # Errors
/// - [`PayoffError::EmptyDomain`] if `sample_count == 0`
/// - [`PayoffError::InvalidBounds`] if a bound is not finite or `start > end`
///
/// # Examples
/// ```
/// use payoff_core::math::domain::{generate_domain, Endpoint};
///
/// let xs = generate_domain(0.0_f64, 1.0, 5, Endpoint::Included).unwrap();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
///
/// let xs = generate_domain(0.0_f64, 1.0, 4, Endpoint::Excluded).unwrap();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn generate_domain<T: Float>(
    start: T,
    end: T,
    sample_count: usize,
    endpoint: Endpoint,
) -> Result<Vec<T>, PayoffError> {
    if sample_count == 0 {
        return Err(PayoffError::EmptyDomain);
    }
    if !start.is_finite() || !end.is_finite() || start > end {
        return Err(PayoffError::InvalidBounds {
            start: start.to_f64().unwrap_or(f64::NAN),
            end: end.to_f64().unwrap_or(f64::NAN),
        });
    }
    if sample_count == 1 {
        return Ok(vec![start]);
    }

    let divisions: T = index_to_float(if endpoint.is_included() {
        sample_count - 1
    } else {
        sample_count
    });
    let width = end - start;

    let mut xs: Vec<T> = if width.is_finite() {
        let step = width / divisions;
        (0..sample_count)
            .map(|i| (start + step * index_to_float(i)).min(end))
            .collect()
    } else {
        // `end - start` overflows near the float limits: work at half scale.
        let two = T::one() + T::one();
        let half_start = start / two;
        let half_step = (end / two - half_start) / divisions;
        (0..sample_count)
            .map(|i| ((half_start + half_step * index_to_float(i)) * two).min(end))
            .collect()
    };

    if let Some(first) = xs.first_mut() {
        *first = start;
    }
    if endpoint.is_included() {
        // Pin the last sample so the shared boundary is hit exactly.
        if let Some(last) = xs.last_mut() {
            *last = end;
        }
    }

    Ok(xs)
}

/// Generates values from `start` in increments of `step`, stopping before `stop`.
///
/// The number of values is `ceil((stop - start) / step)`; an empty vector is
/// returned when `stop <= start`.
///
/// # Errors
/// - [`PayoffError::InvalidStep`] if `step` is not a positive finite number
/// - [`PayoffError::InvalidBounds`] if `start` or `stop` is not finite
///
/// # Examples
/// ```
/// use payoff_core::math::domain::arange;
///
/// let ticks = arange(-5.0_f64, 5.0, 0.5).unwrap();
/// assert_eq!(ticks.len(), 20);
/// assert_eq!(ticks[0], -5.0);
/// assert_eq!(*ticks.last().unwrap(), 4.5);
/// ```
pub fn arange<T: Float>(start: T, stop: T, step: T) -> Result<Vec<T>, PayoffError> {
    if !step.is_finite() || step <= T::zero() {
        return Err(PayoffError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(PayoffError::InvalidBounds {
            start: start.to_f64().unwrap_or(f64::NAN),
            end: stop.to_f64().unwrap_or(f64::NAN),
        });
    }
    if stop <= start {
        return Ok(Vec::new());
    }

    let count = ((stop - start) / step).ceil().to_usize().unwrap_or(0);

    Ok((0..count)
        .map(|i| start + step * index_to_float(i))
        .collect())
}
