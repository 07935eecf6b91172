// File: crates/chart-core/src/series.rs
// Summary: Time-indexed sample series tagged with their native granularity.

use chrono::{DateTime, Utc};

use crate::error::{ChartError, Result};
use crate::unit::TimeUnit;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Parallel timestamp/value sequences sampled at `unit`.
/// Timestamps need not be sorted or evenly spaced.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
    pub unit: TimeUnit,
    pub label: Option<String>,
}

impl TimeSeries {
    /// Contract: `timestamps.len() == values.len()`.
    pub fn new(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>, unit: TimeUnit) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ChartError::LengthMismatch { timestamps: timestamps.len(), values: values.len() });
        }
        Ok(Self { timestamps, values, unit, label: None })
    }

    pub fn empty(unit: TimeUnit) -> Self {
        Self { timestamps: Vec::new(), values: Vec::new(), unit, label: None }
    }

    pub fn from_samples(samples: impl IntoIterator<Item = Sample>, unit: TimeUnit) -> Self {
        let (timestamps, values) = samples.into_iter().map(|s| (s.timestamp, s.value)).unzip();
        Self { timestamps, values, unit, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] { &self.timestamps }
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.timestamps.iter().zip(&self.values).map(|(&t, &v)| Sample::new(t, v))
    }

    /// Sum of all finite values.
    pub fn total(&self) -> f64 {
        self.values.iter().copied().filter(|v| v.is_finite()).sum()
    }
}
