// File: crates/chart-core/src/family.rs
// Summary: Chart families and the per-family behavior table.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartFamily {
    #[default]
    Line,
    Area,
    Bar,
    StackedBar,
    /// Low/high bars per item (e.g. daily min/max heart rate).
    Range,
    Pie,
    Donut,
}

/// Behavior flags consulted by the metric and layout code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FamilyTraits {
    /// Y axis always starts at zero regardless of data.
    pub zero_baseline: bool,
    /// Laid out on X/Y axes (as opposed to angularly).
    pub cartesian: bool,
    /// Each plotted point gets a value label placed off the line.
    pub point_labels: bool,
}

const LINE: FamilyTraits = FamilyTraits { zero_baseline: false, cartesian: true, point_labels: true };
const BAR: FamilyTraits = FamilyTraits { zero_baseline: true, cartesian: true, point_labels: false };
const RANGE: FamilyTraits = FamilyTraits { zero_baseline: false, cartesian: true, point_labels: false };
const ANGULAR: FamilyTraits = FamilyTraits { zero_baseline: false, cartesian: false, point_labels: false };

impl ChartFamily {
    pub const ALL: [ChartFamily; 7] = [
        ChartFamily::Line,
        ChartFamily::Area,
        ChartFamily::Bar,
        ChartFamily::StackedBar,
        ChartFamily::Range,
        ChartFamily::Pie,
        ChartFamily::Donut,
    ];

    pub const fn traits(self) -> FamilyTraits {
        match self {
            ChartFamily::Line | ChartFamily::Area => LINE,
            ChartFamily::Bar | ChartFamily::StackedBar => BAR,
            ChartFamily::Range => RANGE,
            ChartFamily::Pie | ChartFamily::Donut => ANGULAR,
        }
    }

    #[inline]
    pub const fn forces_zero_baseline(self) -> bool { self.traits().zero_baseline }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartFamily::Line => "line",
            ChartFamily::Area => "area",
            ChartFamily::Bar => "bar",
            ChartFamily::StackedBar => "stacked",
            ChartFamily::Range => "range",
            ChartFamily::Pie => "pie",
            ChartFamily::Donut => "donut",
        }
    }
}

impl fmt::Display for ChartFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartFamily {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "stacked-bar" || key == "stacked_bar" {
            return Ok(ChartFamily::StackedBar);
        }
        ChartFamily::ALL
            .into_iter()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| ChartError::UnknownFamily(s.to_string()))
    }
}
