//! Shinysim - stub simulation runner
//!
//! Stands in for a future simulation engine: validates the shared run
//! arguments, records them to `sim_params<simtag>.txt`, and streams synthetic
//! `period,data` rows to stdout at a simulated tick rate.

pub mod command;
pub mod core;
pub mod simulation;
