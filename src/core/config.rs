//! Run configuration with documented constants
//!
//! `RunConfig` is built once from the command line and never changes after
//! that. `PacingConfig` collects the tick pacing constant.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::types::{Period, SeedSource};

/// Parameters for a single run
///
/// Field names follow the Rust convention. The persisted names
/// (`maxTime`, `simtag`, `multiplicativeFactor`) live in the parameter
/// file writer.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Scale applied to each uniform draw
    pub multiplicative_factor: f64,

    /// Number of periods to emit
    ///
    /// Zero or negative emits only the header.
    pub max_time: Period,

    /// Caller-supplied run identifier, namespaces the parameter file
    pub sim_tag: i64,

    /// Generator seed; fixes the whole value and delay sequence
    pub seed: i64,

    pub seed_source: SeedSource,
}

impl RunConfig {
    /// Generator seed as the 64-bit value handed to `seed_from_u64`
    pub fn rng_seed(&self) -> u64 {
        self.seed as u64
    }
}

/// Range of every delay draw (milliseconds, exclusive)
///
/// The draw width is fixed so the generator advances the same way whatever
/// `PacingConfig` is in use.
pub const DELAY_DRAW_MS: u64 = 2000;

/// Pacing between emitted rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingConfig {
    /// Exclusive upper bound on the pause after each row (milliseconds)
    ///
    /// Each pause is drawn from `[0, DELAY_DRAW_MS)` and clamped below this
    /// bound. At the default (2000) the clamp never bites and a 100-period
    /// run takes around 100 seconds, which is the tick rate the front-end
    /// polls at.
    pub max_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            max_delay_ms: DELAY_DRAW_MS,
        }
    }
}

impl PacingConfig {
    /// Pause for a raw draw from `[0, DELAY_DRAW_MS)`
    pub fn delay(&self, drawn_ms: u64) -> Duration {
        Duration::from_millis(drawn_ms.min(self.max_delay_ms.saturating_sub(1)))
    }
}

/// Milliseconds since the Unix epoch, used when no `-seed` is given
pub fn wall_clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
