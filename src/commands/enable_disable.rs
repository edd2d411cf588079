/*
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! `intake drivers enable` and `intake drivers disable`.

use anyhow::{anyhow, Context, Result};

use crate::config::Config;
use crate::registry::Registry;

/// Handle `intake drivers enable <name> <driver>`.
pub fn do_enable(cfg: &Config) -> Result<()> {
    let (name, driver) = match cfg.operands.as_slice() {
        [name, driver] => (name, driver),
        _ => return Err(anyhow!("a driver name and class reference are required")),
    };

    let mut registry = Registry::open(&cfg.registry)?;

    registry
        .enable(name, driver)
        .with_context(|| format!("failed to enable driver '{}'", name))?;

    Ok(())
}

/// Handle `intake drivers disable <name>...`.
///
/// Every name is attempted even if an earlier one fails; the failures are
/// reported together.
pub fn do_disable(cfg: &Config) -> Result<()> {
    if cfg.operands.is_empty() {
        return Err(anyhow!("at least one (1) driver name required"));
    }

    let mut registry = Registry::open(&cfg.registry)?;

    disable_all(&mut registry, &cfg.operands)
}

fn disable_all(registry: &mut Registry, names: &[String]) -> Result<()> {
    let mut error = anyhow!("failed to disable driver(s)");
    let mut had_error = false;

    for name in names {
        if let Err(err) = registry.disable(name) {
            had_error = true;
            error = error.context(format!("{}: {:#}", name, anyhow!(err)));
        }
    }

    if had_error {
        Err(error)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::registry::RegistryConfig;

    #[test]
    fn disable_attempts_every_name() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = RegistryConfig {
            conf_dir: dir.path().join("conf"),
            plugin_dir: dir.path().join("plugins"),
        };

        let mut registry = Registry::open(&cfg).unwrap();
        registry.enable("first", "intake.source.csv.CSVSource").unwrap();
        registry.enable("second", "intake.source.npy.NPySource").unwrap();

        // every save from here on fails
        fs::remove_dir_all(&cfg.conf_dir).unwrap();
        fs::write(&cfg.conf_dir, "").unwrap();

        let names: Vec<String> = ["first", "missing", "second"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let err = disable_all(&mut registry, &names).unwrap_err();
        let msg = format!("{:#}", err);

        assert!(msg.contains("first: failed to write override store"), "{}", msg);
        assert!(msg.contains("second: failed to write override store"), "{}", msg);
        assert!(!msg.contains("missing:"), "{}", msg);

        // nothing reached disk, so nothing is disabled
        let enabled = registry.autodiscover();
        assert!(enabled.contains_key("first"));
        assert!(enabled.contains_key("second"));
    }

    #[test]
    fn disable_all_succeeds_without_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = RegistryConfig {
            conf_dir: dir.path().join("conf"),
            plugin_dir: dir.path().join("plugins"),
        };

        let mut registry = Registry::open(&cfg).unwrap();
        let names = vec!["nonexistent".to_string()];

        assert!(disable_all(&mut registry, &names).is_ok());
        assert!(!cfg.store_path().exists());
    }
}
