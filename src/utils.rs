/*
 * Small helpers shared by the subcommands.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

use libc::c_int;
use yansi::{Color, Style};

use crate::registry::DriverEntry;

/// Width of the driver name column in `intake drivers list`.
pub const NAME_WIDTH: usize = 30;

/// One line of the driver listing:
///
/// ```text
/// csv                           intake.source.csv.CSVSource
/// csv                           intake.source.csv.CSVSource @ <builtin>
/// ```
///
/// Names longer than the column push the reference right rather than being
/// cut off.
pub fn format_driver_line(entry: &DriverEntry, verbose: bool) -> String {
    let name = format!("{:<width$}", entry.name, width = NAME_WIDTH);

    let mut line =
        format!("{}{}", Color::Cyan.paint(name), entry.class.qualified());

    if verbose {
        let source = Style::default().dimmed().paint(&entry.class.source);
        line = format!("{} @ {}", line, source);
    }

    line
}

pub fn isatty(fd: c_int) -> bool {
    unsafe { libc::isatty(fd) != 0 }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::registry::entry::DriverClass;

    fn entry(name: &str) -> DriverEntry {
        let cls = DriverClass::new("intake.source.csv", "CSVSource", "<builtin>");
        DriverEntry::new(name, Arc::new(cls))
    }

    #[test]
    fn driver_line_pads_name() {
        yansi::Paint::disable();

        let line = format_driver_line(&entry("csv"), false);
        assert_eq!(line, format!("{:<30}intake.source.csv.CSVSource", "csv"));
        assert_eq!(line.find("intake"), Some(NAME_WIDTH));
    }

    #[test]
    fn driver_line_verbose_adds_source() {
        yansi::Paint::disable();

        let line = format_driver_line(&entry("csv"), true);
        assert!(line.ends_with("intake.source.csv.CSVSource @ <builtin>"));
    }

    #[test]
    fn driver_line_long_name_is_not_cut() {
        yansi::Paint::disable();

        let name = "a_really_quite_long_driver_name_here";
        let line = format_driver_line(&entry(name), false);
        assert_eq!(line, format!("{}intake.source.csv.CSVSource", name));
    }
}
