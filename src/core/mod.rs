pub mod config;
pub mod error;
pub mod types;

pub use config::{PacingConfig, RunConfig};
pub use error::{Result, SimError};
pub use types::{FloatText, OutputRow, Period, SeedSource};
