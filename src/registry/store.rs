/*
 * Persisted name -> implementation overrides.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! The override store: `<conf_dir>/drivers.json`.
//!
//! ```json
//! { "drivers": { "csv": "intake_fastcsv.source.FastCSVSource" } }
//! ```
//!
//! Every mutation is written to disk immediately.  There is no locking; two
//! processes writing at once means the last writer wins.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::RegistryError;

pub const STORE_FILE: &str = "drivers.json";

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct StoreFile {
    #[serde(default)]
    drivers: BTreeMap<String, String>,
}

#[derive(Debug)]
pub struct OverrideStore {
    path: path::PathBuf,
    data: StoreFile,
}

impl OverrideStore {
    /// Load the store at `path`.  A missing file is an empty store.
    pub fn load(path: &path::Path) -> Result<Self, RegistryError> {
        let data = match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).map_err(|source| {
                RegistryError::ParseStore {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            // a config dir that is not a directory yet fails on write
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                debug!(?path, "no override store yet");
                StoreFile::default()
            }
            Err(source) => {
                return Err(RegistryError::ReadStore {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.data.drivers.get(name).map(String::as_str)
    }

    /// All overrides, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .drivers
            .iter()
            .map(|(name, reference)| (name.as_str(), reference.as_str()))
    }

    /// Bind `name` to `reference` and save.  Returns false (and writes
    /// nothing) if that exact binding already exists.
    pub fn set(
        &mut self,
        name: &str,
        reference: &str,
    ) -> Result<bool, RegistryError> {
        if self.get(name) == Some(reference) {
            return Ok(false);
        }

        let mut data = self.data.clone();
        data.drivers.insert(name.to_string(), reference.to_string());

        self.save(&data)?;
        self.data = data;

        Ok(true)
    }

    /// Drop the binding for `name` and save.  Returns false (and writes
    /// nothing) if there was none.
    pub fn remove(&mut self, name: &str) -> Result<bool, RegistryError> {
        if self.get(name).is_none() {
            return Ok(false);
        }

        let mut data = self.data.clone();
        data.drivers.remove(name);

        self.save(&data)?;
        self.data = data;

        Ok(true)
    }

    /// Write `data` to disk.  The in-memory copy is only replaced by the
    /// callers once this succeeds.
    fn save(&self, data: &StoreFile) -> Result<(), RegistryError> {
        let write_err = |source| RegistryError::WriteStore {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        let mut s = serde_json::to_string_pretty(data)
            .map_err(RegistryError::SerializeStore)?;
        s.push('\n');

        // write beside the real file then rename over it
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, s).map_err(write_err)?;
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(source));
        }

        debug!(path = ?self.path, "saved override store");

        Ok(())
    }
}
