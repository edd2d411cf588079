/*
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! `intake drivers list`.

use std::collections::BTreeMap;

use anyhow::Result;
use yansi::Style;

use crate::config::Config;
use crate::registry::{DriverEntry, Registry};
use crate::utils;

/// Handle `intake drivers list`.  Output goes to stderr.
pub fn do_list(cfg: &Config) -> Result<()> {
    let registry = Registry::open(&cfg.registry)?;

    let enabled = registry.autodiscover();
    let all = registry.autodiscover_all();

    eprint!("{}", render_listing(&enabled, &all, cfg.verbose));

    Ok(())
}

/// The two-group listing: every enabled driver, then every candidate that
/// is not the enabled implementation for its name.
pub fn render_listing(
    enabled: &BTreeMap<String, DriverEntry>,
    all: &[DriverEntry],
    verbose: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", Style::default().bold().paint("Enabled:")));
    for entry in enabled.values() {
        out.push_str(&utils::format_driver_line(entry, verbose));
        out.push('\n');
    }

    out.push_str(&format!("\n{}\n", Style::default().bold().paint("Not enabled:")));
    for entry in all {
        let shadowed = match enabled.get(&entry.name) {
            Some(winner) => !winner.same_class(entry),
            None => true,
        };

        if shadowed {
            out.push_str(&utils::format_driver_line(entry, verbose));
            out.push('\n');
        }
    }

    out
}
