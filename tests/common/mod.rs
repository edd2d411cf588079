/*
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// A fresh, empty directory under the cargo target tmpdir.
pub fn get_tmp_path(name: &str) -> PathBuf {
    let p = PathBuf::from(env!("CARGO_TARGET_TMPDIR"))
        .join("tests")
        .join(name);

    // this can fail - that's ok
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();

    p
}

/// `intake` with a clean environment pointed at `conf_dir`.
pub fn intake(conf_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("intake").unwrap();

    cmd.env_clear();
    cmd.env("INTAKE_CONF_DIR", conf_dir);
    cmd.env("NO_COLOR", "1");

    cmd
}

pub fn write_manifest(conf_dir: &Path, file: &str, body: &str) {
    let dir = conf_dir.join("plugins");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), body).unwrap();
}
