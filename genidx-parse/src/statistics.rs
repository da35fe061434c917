//! Per-chromosome and dataset-wide interval statistics.
//!
//! Statistics are built in two passes. While the file is read, every accepted interval
//! is folded into running counts, sums and extremes with [`ChrStatistics::accumulate`].
//! After reading, [`ChrStatistics::finalize`] computes the means and walks the stored
//! intervals once more for the standard deviations.

use serde::Serialize;

use genidx_core::{Interval, Scored};

///
/// Descriptive statistics of one quantity (interval width or record value).
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub mean: f64,
    pub stdev: f64,
}

impl Default for Summary {
    fn default() -> Self {
        Summary {
            min: f64::NAN,
            max: f64::NAN,
            sum: 0.0,
            mean: 0.0,
            stdev: 0.0,
        }
    }
}

impl Summary {
    // NaN.min(x) == x, so the first real value replaces the NaN seed
    fn add(&mut self, x: f64) {
        self.sum += x;
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    fn finalize<I: Iterator<Item = f64>>(&mut self, count: usize, values: I) {
        if count == 0 {
            self.mean = 0.0;
            self.stdev = 0.0;
            return;
        }
        self.mean = self.sum / count as f64;
        let squares: f64 = values
            .filter(|x| !x.is_nan())
            .map(|x| (x - self.mean).powi(2))
            .sum();
        self.stdev = (squares / count as f64).sqrt();
    }
}

///
/// Statistics summary for the intervals of a single chromosome.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChrStatistics {
    /// Number of intervals, including those without a value
    pub count: usize,
    /// Interval widths, `right - left`
    pub width: Summary,
    /// Record values; `NaN` values are left out of the sum and extremes
    pub value: Summary,
    /// Percentage of the reference chromosome covered by interval widths,
    /// `NaN` when the chromosome has no reference length
    pub coverage: f64,
    /// Hash key of the record with the smallest value
    pub most_stringent: Option<u32>,
    /// Hash key of the record with the largest value
    pub most_permissive: Option<u32>,
}

/// Statistics over every chromosome of a dataset.
pub type DatasetStatistics = ChrStatistics;

impl Default for ChrStatistics {
    fn default() -> Self {
        ChrStatistics {
            count: 0,
            width: Summary::default(),
            value: Summary::default(),
            coverage: f64::NAN,
            most_stringent: None,
            most_permissive: None,
        }
    }
}

impl ChrStatistics {
    ///
    /// First pass: fold one accepted interval into the running totals.
    ///
    pub fn accumulate<P: Scored>(&mut self, interval: &Interval<P>) {
        self.count += 1;
        self.width.add(interval.width() as f64);

        let value = interval.value();
        if value.is_nan() {
            return;
        }
        if self.most_stringent.is_none() || value < self.value.min {
            self.most_stringent = Some(interval.hash_key());
        }
        if self.most_permissive.is_none() || value > self.value.max {
            self.most_permissive = Some(interval.hash_key());
        }
        self.value.add(value);
    }

    ///
    /// Second pass: compute means, standard deviations and coverage.
    ///
    /// # Arguments
    /// - intervals: the same intervals that were accumulated
    /// - reference_length: length of the chromosome (or summed lengths for a dataset)
    ///   in the reference assembly, if known
    pub fn finalize<'a, P, I>(&mut self, intervals: I, reference_length: Option<u64>)
    where
        P: Scored + 'a,
        I: Iterator<Item = &'a Interval<P>> + Clone,
    {
        self.width
            .finalize(self.count, intervals.clone().map(|i| i.width() as f64));
        self.value.finalize(self.count, intervals.map(|i| i.value()));

        self.coverage = match reference_length {
            Some(length) if length > 0 => self.width.sum * 100.0 / length as f64,
            _ => f64::NAN,
        };
    }
}
