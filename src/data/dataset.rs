//! Growable, ordered sample storage.
//!
//! Growth is geometric (first reservation of `INITIAL_CAPACITY`, then doubling)
//! and fallible: an allocation failure is returned as `FitError::Allocation`
//! rather than aborting the process.

use serde::Serialize;

use crate::domain::Sample;
use crate::error::FitError;

/// Capacity reserved on the first insertion.
const INITIAL_CAPACITY: usize = 100;

/// An ordered collection of `(x, y)` samples owned by the caller.
///
/// Regression drivers only borrow a dataset immutably.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(x, y)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, FitError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut ds = Self::new();
        for (x, y) in pairs {
            ds.add_point(x, y)?;
        }
        Ok(ds)
    }

    /// Append one sample, growing storage if needed.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<(), FitError> {
        if self.samples.len() == self.samples.capacity() {
            self.grow()?;
        }
        self.samples.push(Sample::new(x, y));
        Ok(())
    }

    fn grow(&mut self) -> Result<(), FitError> {
        let current = self.samples.capacity();
        let target = if current == 0 {
            INITIAL_CAPACITY
        } else {
            current.saturating_mul(2)
        };
        self.samples
            .try_reserve_exact(target - self.samples.len())
            .map_err(|_| FitError::Allocation { requested: target })?;
        log::trace!("dataset capacity {current} -> {}", self.samples.capacity());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Summary stats over x and y; `None` when empty.
    pub fn stats(&self) -> Option<DatasetStats> {
        let first = self.samples.first()?;
        let mut stats = DatasetStats {
            n_points: self.samples.len(),
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for s in &self.samples[1..] {
            stats.x_min = stats.x_min.min(s.x);
            stats.x_max = stats.x_max.max(s.x);
            stats.y_min = stats.y_min.min(s.y);
            stats.y_max = stats.y_max.max(s.y);
        }
        Some(stats)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Summary stats about a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}
