/*
 * Plugin manifest discovery.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! Third-party packages announce their drivers with a JSON manifest dropped
//! into the plugin directory:
//!
//! ```json
//! {
//!   "package": "intake_parquet",
//!   "drivers": [
//!     { "name": "parquet", "class": "intake_parquet.source.ParquetSource" }
//!   ]
//! }
//! ```
//!
//! A manifest that can't be read, parsed or validated is skipped with a
//! warning.  One broken package must not hide every other driver.

use std::fs;
use std::io;
use std::path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use super::resolver::split_reference;

pub const MANIFEST_EXTENSION: &str = "json";

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub package: String,
    #[serde(default)]
    pub drivers: Vec<ManifestDriver>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestDriver {
    pub name: String,
    pub class: String,
}

impl Manifest {
    fn validate(&self) -> Result<()> {
        if self.package.is_empty() {
            return Err(anyhow!("empty package name"));
        }

        for driver in &self.drivers {
            if driver.name.trim().is_empty() {
                return Err(anyhow!("driver with empty name"));
            }
            split_reference(&driver.class)?;
        }

        Ok(())
    }
}

/// A manifest and the file it came from.
#[derive(Debug)]
pub struct PluginManifest {
    pub path: path::PathBuf,
    pub manifest: Manifest,
}

fn load_manifest(p: &path::Path) -> Result<Manifest> {
    let s = fs::read_to_string(p)
        .with_context(|| format!("failed to read manifest {:?}", p))?;

    let manifest: Manifest = serde_json::from_str(&s)
        .with_context(|| format!("failed to parse manifest {:?}", p))?;

    manifest
        .validate()
        .with_context(|| format!("invalid manifest {:?}", p))?;

    Ok(manifest)
}

/// Collect every valid manifest in `dir`, sorted by file name.
///
/// A missing directory simply means no plugins are installed.
pub fn scan(dir: &path::Path) -> Vec<PluginManifest> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(?dir, "no plugin directory");
            return vec![];
        }
        Err(err) => {
            warn!(?dir, "failed to read plugin directory: {}", err);
            return vec![];
        }
    };

    let mut paths = Vec::new();
    for entry in entries.flatten() {
        let p = entry.path();

        if !p.is_file() {
            continue;
        }

        if p.extension().and_then(|e| e.to_str()) != Some(MANIFEST_EXTENSION) {
            continue;
        }

        paths.push(p);
    }

    paths.sort();

    let mut manifests = Vec::new();
    for path in paths {
        match load_manifest(&path) {
            Ok(manifest) => {
                debug!(?path, package = %manifest.package, "found plugin");
                manifests.push(PluginManifest { path, manifest });
            }
            Err(err) => warn!("skipping plugin: {:#}", err),
        }
    }

    manifests
}
