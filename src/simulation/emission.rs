//! Timed emission loop
//!
//! Writes the `period,data` header, then one row per period with a random
//! pause after each. Values and delays come from the same generator, so a
//! fixed seed fixes both.

use std::io::Write;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::{PacingConfig, RunConfig, DELAY_DRAW_MS};
use crate::core::error::{Result, SimError};
use crate::core::types::{OutputRow, Period};
use crate::simulation::model::SimModel;

pub const HEADER: &str = "period,data";

/// Blocks between rows
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Sleeps the calling thread
///
/// `std::thread::sleep` resumes after signal interruptions, so an interrupt
/// never cuts a pause short or surfaces as an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockingPacer;

impl Pacer for BlockingPacer {
    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Skips every pause; the delays are still drawn
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self, _delay: Duration) {}
}

/// One step of the loop: the row to emit and the pause that follows it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub row: OutputRow,
    pub delay: Duration,
}

/// Seeded sequence of ticks for periods `1..=max_time`
pub struct TickStream<M> {
    model: M,
    rng: ChaCha8Rng,
    pacing: PacingConfig,
    next: i64,
    max_time: i64,
}

impl<M: SimModel> TickStream<M> {
    pub fn new(config: &RunConfig, model: M, pacing: PacingConfig) -> Self {
        Self {
            model,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed()),
            pacing,
            next: 1,
            max_time: i64::from(config.max_time),
        }
    }
}

impl<M: SimModel> Iterator for TickStream<M> {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.next > self.max_time {
            return None;
        }
        let period = self.next as Period;
        self.next += 1;

        let value = self.model.next_value(&mut self.rng);
        let drawn_ms = self.rng.gen_range(0..DELAY_DRAW_MS);

        Some(Tick {
            row: OutputRow { period, value },
            delay: self.pacing.delay(drawn_ms),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.max_time - self.next + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

/// Stream every tick to `out`, flushing each row before pausing
///
/// Returns the number of rows written.
pub fn emit<M, P, W>(ticks: TickStream<M>, pacer: &mut P, out: &mut W) -> Result<u64>
where
    M: SimModel,
    P: Pacer,
    W: Write,
{
    writeln!(out, "{}", HEADER).map_err(SimError::Output)?;
    out.flush().map_err(SimError::Output)?;

    let mut rows = 0;
    for tick in ticks {
        writeln!(out, "{}", tick.row).map_err(SimError::Output)?;
        out.flush().map_err(SimError::Output)?;
        rows += 1;

        tracing::trace!(
            "Period {} emitted, pausing {}ms",
            tick.row.period,
            tick.delay.as_millis()
        );
        pacer.pause(tick.delay);
    }
    Ok(rows)
}
