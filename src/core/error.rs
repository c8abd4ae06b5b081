use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

use crate::command::args::USAGE;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("expected at least {expected} arguments, got {found}")]
    MissingArguments { expected: usize, found: usize },

    #[error("expected `{expected}` at position {position}, found `{found}`")]
    UnexpectedFlag {
        position: usize,
        expected: &'static str,
        found: String,
    },

    #[error("invalid {field} `{token}`: {reason}")]
    InvalidNumber {
        field: &'static str,
        token: String,
        reason: String,
    },

    #[error("Argument error: {0}")]
    Cli(String),

    #[error("Failed to write parameter file {}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output rows")]
    Output(#[source] std::io::Error),
}

impl SimError {
    /// Errors caused by the shape or content of the argument list
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            SimError::MissingArguments { .. }
                | SimError::UnexpectedFlag { .. }
                | SimError::InvalidNumber { .. }
                | SimError::Cli(_)
        )
    }

    /// Process exit status for this error
    ///
    /// 1 = usage, 2 = parameter file, 3 = stdout closed underneath us.
    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_usage() => 1,
            SimError::Persistence { .. } => 2,
            _ => 3,
        }
    }

    /// Text printed to stderr before exiting
    pub fn report(&self) -> String {
        if self.is_usage() {
            format!("{}\nUsage: {}.", self, USAGE)
        } else {
            let mut text = format!("Error: {}", self);
            let mut source = StdError::source(self);
            while let Some(cause) = source {
                text.push_str(&format!("\n  caused by: {}", cause));
                source = cause.source();
            }
            text
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
