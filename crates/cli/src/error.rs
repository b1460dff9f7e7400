//! CLI failure classes and their exit codes.
//!
//! | code | class |
//! |------|-------|
//! | 0  | run finished (reached the goal or stalled at `--max-steps`) |
//! | 2  | bad command line (reported by clap) |
//! | 10 | a world parameter is out of range (sigma, scan radius, stop distance, ...) |
//! | 11 | reading the config or writing the PNG failed |
//! | 12 | `--params` or the config file is not valid JSON |
//! | 13 | the outcome could not be encoded as JSON |
//! | 14 | the config JSON does not have the shape of a world |

use potential_nav_core::NavError;
use std::fmt;

pub enum CliError {
    /// The world could not be built from otherwise well-formed input.
    World(NavError),
    /// Valid JSON that does not describe a world (missing agent position,
    /// unparseable color, wrong field types).
    Config(String),
    Io(String),
    /// Text given on the command line or in a file that is not JSON.
    Input(String),
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::World(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Config(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::World(e) => write!(f, "cannot build world: {e}"),
            CliError::Config(msg) => write!(f, "world config rejected: {msg}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "cannot encode run outcome: {msg}"),
        }
    }
}

impl From<NavError> for CliError {
    fn from(e: NavError) -> Self {
        match e {
            NavError::Io(msg) => CliError::Io(msg),
            NavError::InvalidConfig(msg) => CliError::Config(msg),
            // A bad color only reaches the CLI through a config file.
            NavError::InvalidColor(msg) => CliError::Config(format!("invalid color: {msg}")),
            other => CliError::World(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
