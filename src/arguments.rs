/*
 * Command line arguments for intake.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! Command line arguments, parsed by `clap`.

use std::path;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::config::PROG_NAME;

#[derive(Debug, Parser)]
#[clap(name = "intake", version, about, long_about = None)]
pub struct Args {
    /// Enable or disable color output [yes|on|no|off|auto].
    #[clap(short, long, value_name = "WHEN")]
    pub color: Option<String>,

    /// Configuration directory holding the driver override store.
    #[clap(short = 'd', long, parse(from_os_str), value_name = "DIR")]
    pub conf_dir: Option<path::PathBuf>,

    /// Directory scanned for plugin driver manifests.
    #[clap(short, long, parse(from_os_str), value_name = "DIR")]
    pub plugin_dir: Option<path::PathBuf>,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List, enable, and disable intake drivers.
    Drivers {
        #[clap(subcommand)]
        command: Option<DriverCommands>,
    },
}

#[derive(Debug, Subcommand)]
pub enum DriverCommands {
    /// Show all intake drivers.
    List {
        /// Show module path.
        #[clap(short, long)]
        verbose: bool,
    },

    /// Enable an intake driver.
    Enable {
        /// Driver name.
        name: String,

        /// Module path and class name, as in package.submodule.ClassName.
        driver: String,
    },

    /// Disable one or more intake drivers.
    Disable {
        /// Driver names.
        #[clap(required = true)]
        names: Vec<String>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

/// Print the help text for `intake [subcommand...]` to stdout.
///
/// This goes through clap's own `--help` handling so the output matches
/// what `intake <subcommand...> --help` prints.
pub fn print_help(subcommands: &[&str]) -> Result<()> {
    let mut argv = vec![PROG_NAME];
    argv.extend_from_slice(subcommands);
    argv.push("--help");

    match Args::try_parse_from(argv) {
        Err(err) => {
            err.print()?;
            Ok(())
        }
        Ok(_) => Err(anyhow!("failed to generate help for {:?}", subcommands)),
    }
}
