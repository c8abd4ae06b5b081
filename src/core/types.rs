//! Core type definitions used throughout the codebase

use std::fmt;

/// Emission loop step, numbered from 1
pub type Period = i32;

/// Where a run's seed came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Supplied with `-seed`
    Explicit,
    /// Derived from the wall clock at startup
    WallClock,
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Explicit => write!(f, "explicit"),
            SeedSource::WallClock => write!(f, "wall clock"),
        }
    }
}

/// One emitted data point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputRow {
    pub period: Period,
    pub value: f64,
}

impl fmt::Display for OutputRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.period, FloatText(self.value))
    }
}

/// Shortest round-trip rendering that always keeps a decimal point
///
/// `2.0` renders as `2.0`, not `2`.
#[derive(Debug, Clone, Copy)]
pub struct FloatText(pub f64);

impl fmt::Display for FloatText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
