/*
 * Driver classes and the (name, class) entries the registry hands out.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

use std::fmt;
use std::sync::Arc;

/// Where builtin classes "live" when printed with `--verbose`.
pub const BUILTIN_SOURCE: &str = "<builtin>";

/// An implementation of a driver, known by its qualified reference
/// (`package.submodule.ClassName`).
///
/// Classes are interned by the resolver so two handles to the same
/// reference are the same allocation.
#[derive(Debug, PartialEq, Eq)]
pub struct DriverClass {
    pub module: String,
    pub class_name: String,
    pub source: String,
}

impl DriverClass {
    pub fn new(module: &str, class_name: &str, source: &str) -> Self {
        Self {
            module: module.to_string(),
            class_name: class_name.to_string(),
            source: source.to_string(),
        }
    }

    /// `module.ClassName`
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.module, self.class_name)
    }
}

impl fmt::Display for DriverClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.class_name)
    }
}

/// A driver name bound to one implementing class.
#[derive(Debug, Clone)]
pub struct DriverEntry {
    pub name: String,
    pub class: Arc<DriverClass>,
}

impl DriverEntry {
    pub fn new(name: &str, class: Arc<DriverClass>) -> Self {
        Self {
            name: name.to_string(),
            class,
        }
    }

    /// True if both entries point at the very same class handle.
    pub fn same_class(&self, other: &DriverEntry) -> bool {
        Arc::ptr_eq(&self.class, &other.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_joins_module_and_class() {
        let cls = DriverClass::new("intake.source.csv", "CSVSource", BUILTIN_SOURCE);
        assert_eq!(cls.qualified(), "intake.source.csv.CSVSource");
        assert_eq!(cls.to_string(), cls.qualified());
    }

    #[test]
    fn same_class_is_identity_not_equality() {
        let a = Arc::new(DriverClass::new("pkg", "A", "a.json"));
        let twin = Arc::new(DriverClass::new("pkg", "A", "a.json"));

        let e1 = DriverEntry::new("csv", Arc::clone(&a));
        let e2 = DriverEntry::new("csv", a);
        let e3 = DriverEntry::new("csv", twin);

        assert!(e1.same_class(&e2));
        assert!(!e1.same_class(&e3));
    }
}
