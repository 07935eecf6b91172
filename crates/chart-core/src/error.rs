// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for aggregation and geometry.

use thiserror::Error;

use crate::unit::TimeUnit;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// AVERAGE needs several source units per bucket, so `from` must be finer than `to`.
    #[error("cannot average {from} samples into {to} buckets: source unit must be finer than target")]
    InvalidAggregation { from: TimeUnit, to: TimeUnit },

    #[error("time series has {timestamps} timestamps but {values} values")]
    LengthMismatch { timestamps: usize, values: usize },

    #[error("degenerate value range [{min}, {max}]")]
    DegenerateRange { min: f64, max: f64 },

    #[error("at least 2 points are needed to space a series, got {count}")]
    InsufficientPoints { count: usize },

    #[error("unknown time unit '{0}'")]
    UnknownTimeUnit(String),

    #[error("unknown aggregation mode '{0}'")]
    UnknownMode(String),

    #[error("unknown chart family '{0}'")]
    UnknownFamily(String),
}
