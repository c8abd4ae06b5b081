//! Parameter file persistence
//!
//! One `sim_params<simtag>.txt` per run, read by the external front-end.
//! Key names and order are part of that hand-off and must not change.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::config::RunConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::{FloatText, Period};

pub const PARAMS_FILE_PREFIX: &str = "sim_params";
pub const PARAMS_FILE_EXTENSION: &str = "txt";

/// Persisted snapshot of a run's parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRecord {
    pub seed: i64,
    pub max_time: Period,
    pub sim_tag: i64,
    pub multiplicative_factor: f64,
}

impl From<&RunConfig> for ParameterRecord {
    fn from(config: &RunConfig) -> Self {
        Self {
            seed: config.seed,
            max_time: config.max_time,
            sim_tag: config.sim_tag,
            multiplicative_factor: config.multiplicative_factor,
        }
    }
}

impl fmt::Display for ParameterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed={}", self.seed)?;
        writeln!(f, "maxTime={}", self.max_time)?;
        writeln!(f, "simtag={}", self.sim_tag)?;
        writeln!(f, "multiplicativeFactor={}", FloatText(self.multiplicative_factor))
    }
}

pub fn params_file_name(sim_tag: i64) -> String {
    format!("{}{}.{}", PARAMS_FILE_PREFIX, sim_tag, PARAMS_FILE_EXTENSION)
}

/// Write the record into `dir`, replacing any earlier file with the same tag
pub fn write_params(dir: &Path, record: &ParameterRecord) -> Result<PathBuf> {
    let path = dir.join(params_file_name(record.sim_tag));
    let persistence = |source| SimError::Persistence {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(persistence)?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", record).map_err(persistence)?;
    writer.flush().map_err(persistence)?;

    tracing::info!("Wrote run parameters to {}", path.display());
    Ok(path)
}
