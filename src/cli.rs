//! Command-line overrides for the terminal runner.
//!
//! Flags take precedence over the `ELEVATRIS_*` environment variables.

use anyhow::{anyhow, Result};

use crate::core::Adjacency;
use crate::engine::SessionConfig;

pub const USAGE: &str = "usage: elevatris [--seed N] [--tick-ms N] [--elevation-ms N] \
[--min-group N] [--adjacency color|any] [--log PATH] [--no-restart]";

/// Apply command-line flags to `config`.
///
/// Returns `Ok(false)` when `--help` was given.
pub fn apply_args(args: &[String], config: &mut SessionConfig) -> Result<bool> {
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => return Ok(false),
            "--no-restart" => config.auto_restart = false,
            "--seed" => config.seed = number(args, &mut i, flag)?,
            "--tick-ms" => config.tick_ms = positive(args, &mut i, flag)?,
            "--elevation-ms" => config.elevation_ms = positive(args, &mut i, flag)?,
            "--min-group" => config.rules.min_group_size = positive(args, &mut i, flag)? as usize,
            "--adjacency" => {
                let v = value(args, &mut i, flag)?;
                config.rules.adjacency = Adjacency::from_str(v)
                    .ok_or_else(|| anyhow!("invalid --adjacency value: {} (expected color or any)", v))?;
            }
            "--log" => config.log_path = Some(value(args, &mut i, flag)?.to_string()),
            other => return Err(anyhow!("unknown argument: {}\n{}", other, USAGE)),
        }
        i += 1;
    }
    Ok(true)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn number(args: &[String], i: &mut usize, flag: &str) -> Result<u32> {
    let v = value(args, i, flag)?;
    v.parse::<u32>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

fn positive(args: &[String], i: &mut usize, flag: &str) -> Result<u32> {
    match number(args, i, flag)? {
        0 => Err(anyhow!("{} must be greater than zero", flag)),
        n => Ok(n),
    }
}
