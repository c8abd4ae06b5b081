//! Run pipeline: persist parameters, then stream rows
//!
//! Stages run strictly in order on the calling thread:
//! Parsed -> Persisted -> Emitting(1..=max_time) -> Done

pub mod emission;
pub mod model;
pub mod params;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::config::{PacingConfig, RunConfig};
use crate::core::error::Result;
use crate::core::types::FloatText;

pub use emission::{emit, BlockingPacer, NoPacer, Pacer, Tick, TickStream, HEADER};
pub use model::{MultiplicativeNoise, SimModel};
pub use params::{params_file_name, write_params, ParameterRecord};

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub params_path: PathBuf,
    pub rows_emitted: u64,
}

/// Write the parameter file into `params_dir`, then emit every row to `out`
///
/// A persistence failure returns before the header is written.
pub fn run_simulation<P, W>(
    config: &RunConfig,
    pacing: PacingConfig,
    params_dir: &Path,
    pacer: &mut P,
    out: &mut W,
) -> Result<RunSummary>
where
    P: Pacer,
    W: Write,
{
    tracing::info!(
        "Starting run: simtag={} maxTime={} factor={} seed={} ({})",
        config.sim_tag,
        config.max_time,
        FloatText(config.multiplicative_factor),
        config.seed,
        config.seed_source
    );

    let params_path = write_params(params_dir, &ParameterRecord::from(config))?;

    let model = MultiplicativeNoise::new(config.multiplicative_factor);
    let ticks = TickStream::new(config, model, pacing);
    let rows_emitted = emit(ticks, pacer, out)?;

    tracing::info!("Run {} complete: {} rows", config.sim_tag, rows_emitted);
    Ok(RunSummary {
        params_path,
        rows_emitted,
    })
}
