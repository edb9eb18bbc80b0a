// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::GIT_VERSION;
use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.vendor.version, GIT_VERSION);
    assert_eq!(config.vendor.archive_name(), "git-2.4.3.tar");
    assert_eq!(config.vendor.root(), std::env::temp_dir());
    assert_eq!(config.exec.default_cwd(), std::env::temp_dir());
    assert_eq!(config.tools.tar, PathBuf::from("tar"));
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert!(config.global.log_file.is_none());
}

#[test]
fn test_parse_vendor_section() {
    let config = Config::parse(
        r#"
        [vendor]
        version = "2.45.1"
        dir = "/opt/bundle"
        root = "/var/tmp/git"

        [exec]
        default_cwd = "/srv/work"
        "#,
    )
    .unwrap();

    assert_eq!(
        config.vendor.archive_path(),
        PathBuf::from("/opt/bundle/git-2.45.1.tar")
    );
    assert_eq!(config.vendor.root(), PathBuf::from("/var/tmp/git"));
    assert_eq!(config.exec.default_cwd(), PathBuf::from("/srv/work"));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let err = Config::parse("[vendor]\nflavour = \"x\"\n").unwrap_err();
    assert!(
        format!("{err:#}").contains("flavour"),
        "unexpected error: {err:#}"
    );
}

#[test]
fn test_parse_rejects_bad_version() {
    let err = Config::parse("[vendor]\nversion = \"../2.4.3\"\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'version' in section '[vendor]': version must not contain path separators"
    );

    assert!(Config::parse("[vendor]\nversion = \" \"\n").is_err());
}

#[test]
fn test_parse_rejects_bad_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
    let config = Config::parse("[global]\noutput_log_level = 5\n").unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
}

#[test]
fn test_loader_override_wins() {
    let config = ConfigLoader::new()
        .add_toml_str("[tools]\ntar = \"gtar\"\n")
        .set("tools.tar", "/usr/bin/bsdtar")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.tools.tar, PathBuf::from("/usr/bin/bsdtar"));
}

#[test]
fn test_loader_files_tracking() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("git-vendor.toml");
    std::fs::write(&file, "[vendor]\nroot = \"/x\"\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&file)
        .add_toml_file_optional(dir.path().join("missing.toml"));
    assert_eq!(loader.loaded_files().len(), 1);
    assert_eq!(
        loader.format_loaded_files(),
        [format!("1. [file] {}", file.display())]
    );

    let config = loader.build().unwrap();
    assert_eq!(config.vendor.root(), PathBuf::from("/x"));
}

#[test]
fn test_loader_missing_required_file() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/git-vendor.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        "[vendor]\ndir = \"/opt/bundle\"\nroot = \"/r\"\n[exec]\ndefault_cwd = \"/w\"\n",
    )
    .unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    exec.default_cwd        = /w
    global.file_log_level   = 5
    global.log_file         = -
    global.output_log_level = 3
    tools.tar               = tar
    vendor.archive          = /opt/bundle/git-2.4.3.tar
    vendor.dir              = /opt/bundle
    vendor.root             = /r
    vendor.version          = 2.4.3
    ");
}
