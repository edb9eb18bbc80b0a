// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic layered TOML sources.

use git_vendor::config::Config;
use git_vendor::config::loader::ConfigLoader;
use std::path::PathBuf;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "/var/log/git-vendor.log"

[vendor]
version = "2.45.1"
dir = "/opt/git-vendor"

[tools]
tar = "/usr/bin/bsdtar"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        serde_json::json!({
            "global": {
                "output_log_level": 4,
                "file_log_level": 5,
                "log_file": "/var/log/git-vendor.log",
            },
            "vendor": {
                "version": "2.45.1",
                "dir": "/opt/git-vendor",
            },
            "exec": {},
            "tools": { "tar": "/usr/bin/bsdtar" },
        })
    );
    assert_eq!(
        config.vendor.archive_path(),
        PathBuf::from("/opt/git-vendor/git-2.45.1.tar")
    );
}

#[test]
fn config_parse_invalid_toml() {
    assert!(Config::parse("[vendor\nversion = ").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("git-vendor.toml");
    let extra = dir.path().join("extra.toml");
    std::fs::write(&base, "[vendor]\nroot = \"/base\"\nversion = \"2.4.3\"\n").unwrap();
    std::fs::write(&extra, "[vendor]\nroot = \"/extra\"\n").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file_optional(&base)
        .add_toml_file(&extra)
        .build()
        .unwrap();

    assert_eq!(config.vendor.root(), PathBuf::from("/extra"));
    assert_eq!(config.vendor.version, "2.4.3");
}

#[test]
fn config_override_beats_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("extra.toml");
    std::fs::write(&file, "[global]\noutput_log_level = 1\n").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&file)
        .set("global.output_log_level", "4")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level.as_u8(), 4);
}

#[test]
fn config_missing_optional_file_is_ignored() {
    let config = ConfigLoader::new()
        .add_toml_file_optional("/nonexistent/git-vendor.toml")
        .build()
        .unwrap();
    assert_eq!(config.tools.tar, PathBuf::from("tar"));
}
