//! Argument pipeline
//!
//! Converts the process argument list into a validated `RunConfig`:
//! tokens -> Cli -> ParsedArgs -> RunConfig

pub mod args;

pub use args::{parse_tokens, Cli, ParsedArgs, USAGE};
