/*
 * The driver registry.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! Known drivers and which implementation is enabled for each name.
//!
//! Candidates come from the builtin table followed by plugin manifests (in
//! file name order).  The first candidate for a name is its default; an
//! entry in the override store replaces that default.  The registry is
//! built fresh for every invocation, so every write goes straight to the
//! store and the enabled view is always re-derived from it.

use std::collections::BTreeMap;
use std::io;
use std::path;

use thiserror::Error;
use tracing::{debug, info, warn};

pub mod builtin;
pub mod entry;
pub mod plugins;
pub mod resolver;
pub mod store;

pub use entry::DriverEntry;
pub use resolver::{InvalidReferenceError, Resolver};
pub use store::OverrideStore;

use builtin::BUILTIN_DRIVERS;
use entry::BUILTIN_SOURCE;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidReference(#[from] InvalidReferenceError),

    #[error("driver name must not be empty")]
    EmptyName,

    #[error("failed to read override store {path:?}")]
    ReadStore {
        path: path::PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse override store {path:?}")]
    ParseStore {
        path: path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write override store {path:?}")]
    WriteStore {
        path: path::PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize override store")]
    SerializeStore(#[source] serde_json::Error),
}

/// Where the registry keeps its state.  Passed in, never looked up.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub conf_dir: path::PathBuf,
    pub plugin_dir: path::PathBuf,
}

impl RegistryConfig {
    pub fn store_path(&self) -> path::PathBuf {
        self.conf_dir.join(store::STORE_FILE)
    }
}

#[derive(Debug)]
pub struct Registry {
    resolver: Resolver,
    candidates: Vec<DriverEntry>,
    store: OverrideStore,
}

impl Registry {
    /// Discover builtin and plugin drivers and load the override store.
    pub fn open(cfg: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut resolver = Resolver::new();
        let mut candidates = Vec::new();

        for (name, reference) in BUILTIN_DRIVERS {
            let class = resolver.register(reference, BUILTIN_SOURCE)?;
            candidates.push(DriverEntry::new(name, class));
        }

        for plugin in plugins::scan(&cfg.plugin_dir) {
            let source = plugin.path.display().to_string();

            for driver in &plugin.manifest.drivers {
                let class = resolver.register(&driver.class, &source)?;
                candidates.push(DriverEntry::new(&driver.name, class));
            }
        }

        debug!(
            candidates = candidates.len(),
            classes = resolver.len(),
            "discovery finished"
        );

        let store = OverrideStore::load(&cfg.store_path())?;

        Ok(Self::from_parts(resolver, candidates, store))
    }

    /// Assemble a registry from already-discovered pieces.  Every class in
    /// `candidates` must have come from `resolver`.
    pub fn from_parts(
        resolver: Resolver,
        candidates: Vec<DriverEntry>,
        store: OverrideStore,
    ) -> Self {
        Self {
            resolver,
            candidates,
            store,
        }
    }

    /// The enabled driver for every name.
    pub fn autodiscover(&self) -> BTreeMap<String, DriverEntry> {
        let mut enabled = BTreeMap::new();

        for entry in &self.candidates {
            enabled
                .entry(entry.name.clone())
                .or_insert_with(|| entry.clone());
        }

        for (name, reference) in self.store.iter() {
            match self.resolver.resolve(reference) {
                Ok(class) => {
                    enabled.insert(name.to_string(), DriverEntry::new(name, class));
                }
                Err(err) => {
                    warn!("ignoring override for driver '{}': {}", name, err);
                }
            }
        }

        enabled
    }

    /// Every candidate, shadowed ones included, in discovery order.
    ///
    /// An override that binds a class to a name no candidate carries is
    /// appended, so every enabled entry appears here.
    pub fn autodiscover_all(&self) -> Vec<DriverEntry> {
        let mut all = self.candidates.clone();

        for (name, reference) in self.store.iter() {
            let class = match self.resolver.resolve(reference) {
                Ok(class) => class,
                Err(_) => continue,
            };

            let entry = DriverEntry::new(name, class);
            let known = all
                .iter()
                .any(|e| e.name == entry.name && e.same_class(&entry));

            if !known {
                all.push(entry);
            }
        }

        all
    }

    /// Make `driver` (`package.submodule.ClassName`) the implementation
    /// for `name`.
    pub fn enable(&mut self, name: &str, driver: &str) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let class = self.resolver.resolve(driver)?;

        if self.store.set(name, &class.qualified())? {
            info!(name, driver, "enabled driver");
        } else {
            debug!(name, driver, "driver already enabled");
        }

        Ok(())
    }

    /// Forget the override for `name`.  Returns whether there was one.
    pub fn disable(&mut self, name: &str) -> Result<bool, RegistryError> {
        let removed = self.store.remove(name)?;

        if removed {
            info!(name, "disabled driver");
        } else {
            debug!(name, "no override to disable");
        }

        Ok(removed)
    }
}
