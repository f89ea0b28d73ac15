//! Evaluated sample sets.

use num_traits::Float;

use crate::types::PayoffError;

/// Ordered `(x, f(x))` pairs produced by one segment.
///
/// `xs` and `ys` always have equal length; construction through
/// [`SampleSet::new`] enforces it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleSet<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> SampleSet<T> {
    /// Pairs abscissae with their evaluated ordinates.
    ///
    /// # Errors
    /// [`PayoffError::LengthMismatch`] if the two vectors differ in length.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, PayoffError> {
        if xs.len() != ys.len() {
            return Err(PayoffError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(Self { xs, ys })
    }

    /// Sample abscissae.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Evaluated values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` if the set holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// First `(x, y)` pair.
    pub fn first(&self) -> Option<(T, T)> {
        Some((*self.xs.first()?, *self.ys.first()?))
    }

    /// Last `(x, y)` pair.
    pub fn last(&self) -> Option<(T, T)> {
        Some((*self.xs.last()?, *self.ys.last()?))
    }

    /// Iterates over `(x, y)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + Clone + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}
