/*
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

//! Subcommands for `intake drivers`.

pub mod enable_disable;
pub mod list;
