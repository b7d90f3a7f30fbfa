use std::fmt;

use crate::Sample;

/// The recorded time, prey, and predator sequences of one integration.
///
/// All three sequences always have the same length, and index `i` in each
/// refers to the same instant. A trajectory only grows while it is being
/// recorded; once returned to the caller it is read through slices.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    time: Vec<f64>,
    prey: Vec<f64>,
    predator: Vec<f64>,
}

impl Trajectory {
    /// Creates an empty trajectory with room for `len` samples.
    #[must_use]
    pub fn with_capacity(len: usize) -> Self {
        Self {
            time: Vec::with_capacity(len),
            prey: Vec::with_capacity(len),
            predator: Vec::with_capacity(len),
        }
    }

    pub(crate) fn push(&mut self, sample: &Sample) {
        self.time.push(sample.time);
        self.prey.push(sample.populations.prey);
        self.predator.push(sample.populations.predator);
    }

    /// Number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    #[must_use]
    pub fn prey(&self) -> &[f64] {
        &self.prey
    }

    #[must_use]
    pub fn predator(&self) -> &[f64] {
        &self.predator
    }

    /// Returns the sample at `index`, if recorded.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<Point> {
        Some(Point {
            t: *self.time.get(index)?,
            prey: self.prey[index],
            predator: self.predator[index],
        })
    }

    /// Iterates over the samples in time order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.time
            .iter()
            .zip(&self.prey)
            .zip(&self.predator)
            .map(|((&t, &prey), &predator)| Point { t, prey, predator })
    }

    /// The first `limit` samples, as a host would list them.
    pub fn preview(&self, limit: usize) -> impl Iterator<Item = Point> + '_ {
        self.points().take(limit)
    }

    /// Index of the first sample holding a NaN or infinite value.
    ///
    /// The integrator never checks its own output; hosts that want to flag or
    /// clip a blown-up run can use this instead.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points().position(|point| !point.is_finite())
    }

    /// Consumes the trajectory, returning `(time, prey, predator)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.time, self.prey, self.predator)
    }
}

/// One row of a [`Trajectory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub t: f64,
    pub prey: f64,
    pub predator: f64,
}

impl Point {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.t.is_finite() && self.prey.is_finite() && self.predator.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t = {:.2} prey = {:.3} pred = {:.3}",
            self.t, self.prey, self.predator
        )
    }
}
