/*
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! Config context variable and various constants for intake.
//!
//! After CLI arguments are parsed by `clap` the args object is given to the
//! config constructor via `::from_args(&args)`, and from that + ENV
//! variables a config object is created.

use std::env;
use std::path;

use anyhow::{anyhow, Result};

use crate::arguments::{Args, Commands, DriverCommands};
use crate::registry::RegistryConfig;
use crate::utils;

pub const PROG_NAME: &str = "intake";

// default values
pub const DEFAULT_CONF_DIR: &str = ".intake";
pub const DEFAULT_PLUGIN_DIR: &str = "plugins";

// env var name
pub const ENV_NO_COLOR: &str = "NO_COLOR";
pub const ENV_CONF_DIR: &str = "INTAKE_CONF_DIR";
pub const ENV_PLUGIN_DIR: &str = "INTAKE_PLUGIN_DIR";

/// intake execution modes (subcommands).
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Help,
    DriversHelp,
    List,
    Enable,
    Disable,
}

/// Configuration options derived from the environment and CLI arguments.
///
/// Passed around as the "context" of a single invocation.
#[derive(Debug)]
pub struct Config {
    // env vars or CLI options
    pub colorize: bool,
    pub registry: RegistryConfig,

    // CLI options only
    pub verbose: bool,
    pub operands: Vec<String>,
    pub mode: Mode,
}

impl Config {
    /// Create a `Config` struct from a clap `Args` struct.
    pub fn from_args(args: &Args) -> Result<Self> {
        let colorize = should_colorize_output(&args.color)?;
        let conf_dir = get_conf_dir(&args.conf_dir)?;
        let plugin_dir = get_plugin_dir(&args.plugin_dir, &conf_dir);

        let mut verbose = false;

        // figure out subcommand to run
        let (mode, operands) = match &args.command {
            // `intake`
            None => (Mode::Help, vec![]),
            // `intake drivers`
            Some(Commands::Drivers { command: None }) => {
                (Mode::DriversHelp, vec![])
            }
            // `intake drivers list [-v]`
            Some(Commands::Drivers {
                command: Some(DriverCommands::List { verbose: v }),
            }) => {
                verbose = *v;
                (Mode::List, vec![])
            }
            // `intake drivers enable <name> <driver>`
            Some(Commands::Drivers {
                command: Some(DriverCommands::Enable { name, driver }),
            }) => (Mode::Enable, vec![name.clone(), driver.clone()]),
            // `intake drivers disable <name>...`
            Some(Commands::Drivers {
                command: Some(DriverCommands::Disable { names }),
            }) => (Mode::Disable, names.to_vec()),
        };

        let o = Self {
            colorize,
            registry: RegistryConfig {
                conf_dir,
                plugin_dir,
            },
            verbose,
            operands,
            mode,
        };

        Ok(o)
    }
}

/// Check if the output should be colorized.
///
/// Highest priority (first in this list) wins:
///
/// 1. CLI option (`-c`) given.
/// 2. env `NO_COLOR` given.
/// 3. stderr is a tty (listings are written to stderr).
fn should_colorize_output(color_arg: &Option<String>) -> Result<bool> {
    // check CLI option first
    if let Some(s) = color_arg {
        match s.as_str() {
            "yes" | "on" => return Ok(true),
            "no" | "off" => return Ok(false),
            "auto" => (), // fall through
            _ => return Err(anyhow!("unknown color option: '{}'", s)),
        }
    }

    // check env var next
    if env::var_os(ENV_NO_COLOR).is_some() {
        return Ok(false);
    }

    // lastly check if stderr is a tty
    Ok(utils::isatty(2))
}

/// Determine the configuration directory.
///
/// 1. CLI option (`-d`) given
/// 2. env `INTAKE_CONF_DIR` given
/// 3. `~/.intake`
fn get_conf_dir(dir_arg: &Option<path::PathBuf>) -> Result<path::PathBuf> {
    if let Some(dir) = dir_arg {
        return Ok(dir.to_path_buf());
    }

    if let Some(dir) = env::var_os(ENV_CONF_DIR) {
        return Ok(path::PathBuf::from(dir));
    }

    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow!("failed to determine users home directory"))?;

    Ok(home_dir.join(DEFAULT_CONF_DIR))
}

/// Determine the plugin manifest directory.
///
/// 1. CLI option (`-p`) given
/// 2. env `INTAKE_PLUGIN_DIR` given
/// 3. `<conf_dir>/plugins`
fn get_plugin_dir(
    dir_arg: &Option<path::PathBuf>,
    conf_dir: &path::Path,
) -> path::PathBuf {
    if let Some(dir) = dir_arg {
        return dir.to_path_buf();
    }

    match env::var_os(ENV_PLUGIN_DIR) {
        Some(dir) => path::PathBuf::from(dir),
        None => conf_dir.join(DEFAULT_PLUGIN_DIR),
    }
}
