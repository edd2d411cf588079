/*
 * Turn qualified references into driver classes.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! Qualified-reference resolution.
//!
//! Every class the process knows about (builtins and plugin manifests) is
//! registered here by its `package.submodule.ClassName` reference.  This is
//! the only place a string becomes a class, and the only place that can
//! produce an [`InvalidReferenceError`].

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use thiserror::Error;

use super::entry::DriverClass;

/// Why a reference could not be resolved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceProblem {
    #[error("expected the form package.submodule.ClassName")]
    Malformed,

    #[error("no module named '{0}'")]
    NoModule(String),

    #[error("module '{module}' has no class '{class}'")]
    NoClass { module: String, class: String },
}

/// A qualified reference that does not name a loadable driver class.
#[derive(Debug, Error)]
#[error("invalid driver reference '{reference}': {problem}")]
pub struct InvalidReferenceError {
    pub reference: String,
    pub problem: ReferenceProblem,
}

impl InvalidReferenceError {
    fn new(reference: &str, problem: ReferenceProblem) -> Self {
        Self {
            reference: reference.to_string(),
            problem,
        }
    }
}

/// Split `a.b.Class` into (`a.b`, `Class`).
pub fn split_reference(
    reference: &str,
) -> Result<(&str, &str), InvalidReferenceError> {
    let malformed =
        || InvalidReferenceError::new(reference, ReferenceProblem::Malformed);

    let (module, class) = reference.rsplit_once('.').ok_or_else(malformed)?;

    if !module.split('.').all(is_identifier) || !is_identifier(class) {
        return Err(malformed());
    }

    Ok((module, class))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => (),
        _ => return false,
    }

    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Interning table of every known driver class.
#[derive(Debug, Default)]
pub struct Resolver {
    classes: BTreeMap<String, Arc<DriverClass>>,
    modules: BTreeSet<String>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a class known and return its shared handle.
    ///
    /// Registering a reference twice returns the first handle; the second
    /// `source` is ignored.
    pub fn register(
        &mut self,
        reference: &str,
        source: &str,
    ) -> Result<Arc<DriverClass>, InvalidReferenceError> {
        if let Some(cls) = self.classes.get(reference) {
            return Ok(Arc::clone(cls));
        }

        let (module, class) = split_reference(reference)?;

        // every parent package of a module is importable too
        let mut prefix = String::new();
        for part in module.split('.') {
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(part);
            self.modules.insert(prefix.clone());
        }

        let cls = Arc::new(DriverClass::new(module, class, source));
        self.classes.insert(reference.to_string(), Arc::clone(&cls));

        Ok(cls)
    }

    /// Look up the class named by `reference`.
    pub fn resolve(
        &self,
        reference: &str,
    ) -> Result<Arc<DriverClass>, InvalidReferenceError> {
        let (module, class) = split_reference(reference)?;

        if let Some(cls) = self.classes.get(reference) {
            return Ok(Arc::clone(cls));
        }

        let problem = if self.modules.contains(module) {
            ReferenceProblem::NoClass {
                module: module.to_string(),
                class: class.to_string(),
            }
        } else {
            ReferenceProblem::NoModule(module.to_string())
        };

        Err(InvalidReferenceError::new(reference, problem))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}
