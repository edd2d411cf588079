/*
 * List, enable and disable data-source catalog drivers.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

use anyhow::Result;
use yansi::Color;

mod arguments;
mod commands;
mod config;
mod die;
mod logging;
mod registry;
mod utils;

use config::{Config, Mode};
use die::die;

fn do_main() -> Result<()> {
    // parse CLI options + env vars
    let args = arguments::parse();
    let cfg = Config::from_args(&args)?;

    // toggle color if the user wants it or the env dictates
    if !cfg.colorize {
        yansi::Paint::disable();
    }

    logging::init(cfg.colorize);

    match cfg.mode {
        Mode::Help => arguments::print_help(&[]),
        Mode::DriversHelp => arguments::print_help(&["drivers"]),
        Mode::List => commands::list::do_list(&cfg),
        Mode::Enable => commands::enable_disable::do_enable(&cfg),
        Mode::Disable => commands::enable_disable::do_disable(&cfg),
    }
}

fn main() {
    if let Err(err) = do_main() {
        die!(1, "{}: {:?}", Color::Red.paint("error"), err);
    }
}
