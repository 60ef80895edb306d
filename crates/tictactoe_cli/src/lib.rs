//! Terminal front end for the tic-tac-toe engine.
//!
//! - **Session**: interactive hot-seat play over stdin/stdout
//! - **Replay**: apply a move list and report the final position
//! - **Config**: TOML settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod output;
mod replay;
mod session;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use input::{Entry, InputError, parse_entry, parse_move};
pub use output::{OutputFormat, render, result_message};
pub use replay::{ReplayError, replay};
pub use session::{Session, SessionSummary};
