/*
 * Diagnostic logging setup.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! Log events go to stderr, alongside the driver listing.  The level comes
//! from `INTAKE_LOG` (any `EnvFilter` directive, e.g. `debug` or
//! `intake=trace`) and defaults to warnings only.

use std::io;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "INTAKE_LOG";
pub const DEFAULT_FILTER: &str = "warn";

pub fn init(colorize: bool) {
    let env_filter = EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(colorize)
        .with_target(false)
        .without_time()
        .try_init();
}
