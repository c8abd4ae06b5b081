//! Command-line argument pipeline
//!
//! Raw tokens -> `Cli` (clap) -> `ParsedArgs` (layout + numbers) -> `RunConfig`
//!
//! The token layout is positional and uses single-dash multi-letter flags, so
//! clap only captures the tokens and handles `--help`/`--version`. The layout
//! itself is checked here.

use clap::Parser;

use crate::core::config::RunConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::{Period, SeedSource};

pub const USAGE: &str =
    "shinysim multiplicativeFactor -maxTime numGenerations -simtag simulationTag [-seed seed]";

pub const MAX_TIME_FLAG: &str = "-maxTime";
pub const SIM_TAG_FLAG: &str = "-simtag";
pub const SEED_FLAG: &str = "-seed";

/// Fewest tokens that make a valid invocation
pub const MIN_TOKENS: usize = 5;
/// Tokens needed before the seed override is read
pub const SEEDED_TOKENS: usize = 7;

/// Shinysim stub - streams synthetic data for a file-driven front-end
#[derive(Parser, Debug)]
#[command(name = "shinysim", version)]
#[command(about = "Emit one synthetic data row per period and record the run parameters")]
#[command(override_usage = USAGE)]
pub struct Cli {
    /// multiplicativeFactor -maxTime <int> -simtag <int64> [-seed <int64>]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Parse the process arguments, turning clap rejections into usage errors
    ///
    /// Help and version requests are not errors: clap prints them and exits 0.
    pub fn from_env() -> Result<Self> {
        Self::try_parse().or_else(handle_clap_error)
    }

    pub fn parse_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).or_else(handle_clap_error)
    }
}

fn handle_clap_error(err: clap::Error) -> Result<Cli> {
    if err.use_stderr() {
        Err(SimError::Cli(
            err.kind().as_str().unwrap_or("invalid arguments").to_string(),
        ))
    } else {
        err.exit()
    }
}

/// Arguments after layout checks and numeric parsing, before seed derivation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    pub multiplicative_factor: f64,
    pub max_time: Period,
    pub sim_tag: i64,
    pub seed: Option<i64>,
}

impl ParsedArgs {
    /// Fix the seed, calling `wall_clock` only when none was supplied
    pub fn into_config(self, wall_clock: impl FnOnce() -> i64) -> RunConfig {
        let (seed, seed_source) = match self.seed {
            Some(seed) => (seed, SeedSource::Explicit),
            None => (wall_clock(), SeedSource::WallClock),
        };
        RunConfig {
            multiplicative_factor: self.multiplicative_factor,
            max_time: self.max_time,
            sim_tag: self.sim_tag,
            seed,
            seed_source,
        }
    }
}

/// Check the positional layout and parse the numeric fields
///
/// Shape is checked before any number is parsed, so a short or misflagged
/// argument list always reports the shape problem.
pub fn parse_tokens(tokens: &[String]) -> Result<ParsedArgs> {
    if tokens.len() < MIN_TOKENS {
        return Err(SimError::MissingArguments {
            expected: MIN_TOKENS,
            found: tokens.len(),
        });
    }
    expect_flag(tokens, 1, MAX_TIME_FLAG)?;
    expect_flag(tokens, 3, SIM_TAG_FLAG)?;

    let max_time = parse_number::<Period>("maxTime", &tokens[2])?;
    let sim_tag = parse_number::<i64>("simtag", &tokens[4])?;
    let multiplicative_factor = parse_number::<f64>("multiplicativeFactor", &tokens[0])?;

    let seed = if tokens.len() >= SEEDED_TOKENS {
        // Only the argument count gates the override; the flag text is advisory.
        if tokens[5] != SEED_FLAG {
            tracing::warn!(
                "Expected `{}` at position 5, found `{}`; reading seed anyway",
                SEED_FLAG,
                tokens[5]
            );
        }
        Some(parse_number::<i64>("seed", &tokens[6])?)
    } else {
        None
    };

    let consumed = if seed.is_some() { SEEDED_TOKENS } else { MIN_TOKENS };
    if tokens.len() > consumed {
        tracing::debug!("Ignoring {} trailing argument(s)", tokens.len() - consumed);
    }

    Ok(ParsedArgs {
        multiplicative_factor,
        max_time,
        sim_tag,
        seed,
    })
}

fn expect_flag(tokens: &[String], position: usize, expected: &'static str) -> Result<()> {
    if tokens[position] == expected {
        Ok(())
    } else {
        Err(SimError::UnexpectedFlag {
            position,
            expected,
            found: tokens[position].clone(),
        })
    }
}

fn parse_number<T>(field: &'static str, token: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    token.parse::<T>().map_err(|e| SimError::InvalidNumber {
        field,
        token: token.to_string(),
        reason: e.to_string(),
    })
}
