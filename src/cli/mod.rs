//! # CLI Module
//!
//! Command-line entry points for the `asset-loadtest` binary.
//!
//! ## Commands
//!
//! ### `run`
//!
//! Execute a goose attack against a running asset service:
//!
//! ```bash
//! asset-loadtest run --host https://assets.example.com -u 50 -r 5 -t 300
//! ```
//!
//! Options:
//! - `--host <URL>` - Base URL of the service (or `ASSETLOAD_HOST`)
//! - `-u, --users <N>` - Concurrent simulated users (default: 1)
//! - `-r, --hatch-rate <R>` - Users started per second (default: 1)
//! - `-t, --run-time <SECS>` - Stop after this many seconds
//! - `--profile <single|bulk|mixed>` - User profiles to run (default: mixed)
//! - `--seed <S>` - Reproducible payloads; user `n` uses `S + n`
//! - `-c, --config <FILE>` - YAML config (or `ASSETLOAD_CONFIG`)
//! - `--report-file <FILE>` - goose HTML report
//!
//! ### `sample`
//!
//! Print generated payloads without touching the network:
//!
//! ```bash
//! asset-loadtest sample --profile bulk -n 2 --seed 7
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run, run_cli, sample, Cli, Commands, RunArgs, SampleArgs, SampleKind};
