/*
 * Drivers compiled into the binary.
 *
 * Date: October 18, 2026
 * License: BSD-2-Clause
 */

/// (driver name, qualified class reference), in discovery order.
pub static BUILTIN_DRIVERS: &[(&str, &str)] = &[
    ("alias", "intake.source.derived.AliasSource"),
    ("catalog", "intake.catalog.base.Catalog"),
    ("csv", "intake.source.csv.CSVSource"),
    ("intake_remote", "intake.catalog.remote.RemoteCatalog"),
    ("json", "intake.source.jsonfiles.JSONFileSource"),
    ("jsonl", "intake.source.jsonfiles.JSONLinesFileSource"),
    ("ndzarr", "intake.source.zarr.ZarrArraySource"),
    ("numpy", "intake.source.npy.NPySource"),
    ("textfiles", "intake.source.textfiles.TextFilesSource"),
    ("yaml_file_cat", "intake.catalog.local.YAMLFileCatalog"),
    ("yaml_files_cat", "intake.catalog.local.YAMLFilesCatalog"),
    ("zarr_cat", "intake.catalog.zarr.ZarrGroupCatalog"),
];
