// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for git execution.
//!
//! Runs the host git against real temporary repositories when one is
//! installed, and a vendored layout built from a local tarball.

#![cfg(unix)]

use git_vendor::git::bootstrap::{ResolutionState, Resolver};
use git_vendor::git::extract::TarExtractor;
use git_vendor::git::layout::VendorLayout;
use git_vendor::git::toolchain::ToolchainSource;
use git_vendor::git::{ExecOptions, GitExecutor, Toolchain};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn host_git() -> Option<Toolchain> {
    which::which("git").ok().map(Toolchain::host)
}

fn in_dir(dir: &Path) -> ExecOptions {
    ExecOptions::builder().with_cwd(dir).build()
}

/// Packs a fake distribution whose `git` echoes its arguments and helper dir.
fn pack_distribution(dir: &Path) -> std::path::PathBuf {
    let staging = dir.join("staging");
    let bin = VendorLayout::new(&staging).bin_dir();
    std::fs::create_dir_all(&bin).unwrap();
    let git = bin.join("git");
    std::fs::write(
        &git,
        "#!/bin/sh\nprintf 'vendored %s exec=%s' \"$*\" \"$GIT_EXEC_PATH\"\n",
    )
    .unwrap();
    std::fs::set_permissions(&git, std::fs::Permissions::from_mode(0o755)).unwrap();

    let archive = dir.join("git-2.4.3.tar");
    let status = std::process::Command::new("tar")
        .arg("-cf")
        .arg(&archive)
        .arg("-C")
        .arg(&staging)
        .arg("usr")
        .status()
        .unwrap();
    assert!(status.success());
    archive
}

// =============================================================================
// Host git
// =============================================================================

#[test]
fn exec_init_and_query_repository() {
    let Some(toolchain) = host_git() else {
        return;
    };
    let repo = temp_dir();
    let git = GitExecutor::new(&toolchain);

    git.exec(&["init", "-q"], &in_dir(repo.path())).unwrap();
    let output = git
        .exec(&["rev-parse", "--is-inside-work-tree"], &in_dir(repo.path()))
        .unwrap();
    assert_eq!(output.stdout_text().trim(), "true");
}

#[test]
fn exec_failure_outside_repository() {
    let Some(toolchain) = host_git() else {
        return;
    };
    let dir = temp_dir();

    let err = GitExecutor::new(&toolchain)
        .exec(&["rev-parse", "HEAD"], &in_dir(dir.path()))
        .unwrap_err();
    let failure = err.as_exec().expect("expected execution error");

    assert_eq!(failure.command, ["git", "rev-parse", "HEAD"]);
    assert_eq!(failure.code, 128);
    assert!(failure.stderr.contains("fatal"), "stderr: {}", failure.stderr);
}

#[test]
fn exec_version_prints_to_stdout() {
    let Some(toolchain) = host_git() else {
        return;
    };
    let dir = temp_dir();

    let output = GitExecutor::new(&toolchain)
        .exec(&["--version"], &in_dir(dir.path()))
        .unwrap();
    assert_eq!(output.exit_code(), 0);
    assert!(
        output.stdout_text().starts_with("git version "),
        "stdout: {}",
        output.stdout_text()
    );
}

#[test]
fn exec_clone_unreachable_remote_fails() {
    let Some(toolchain) = host_git() else {
        return;
    };
    let dir = temp_dir();
    let args = ["clone", "file:///nonexistent/repo.git"];

    let err = GitExecutor::new(&toolchain)
        .exec(&args, &in_dir(dir.path()))
        .unwrap_err();
    let failure = err.as_exec().expect("expected execution error");

    assert_eq!(
        failure.command,
        ["git", "clone", "file:///nonexistent/repo.git"]
    );
    assert_eq!(failure.code, 128);
    assert!(!failure.stderr.is_empty());
    assert!(!dir.path().join("repo").exists());
}

#[test]
fn exec_commit_with_stdin_message() {
    let Some(toolchain) = host_git() else {
        return;
    };
    let repo = temp_dir();
    let git = GitExecutor::new(&toolchain);
    let opts = in_dir(repo.path());

    git.exec(&["init", "-q"], &opts).unwrap();
    std::fs::write(repo.path().join("README"), "hello\n").unwrap();
    git.exec(&["add", "README"], &opts).unwrap();

    let commit = ExecOptions::builder()
        .with_cwd(repo.path())
        .with_clinput(vec!["first line".to_string(), "second line".to_string()])
        .build();
    git.exec(
        &[
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "-F",
            "-",
        ],
        &commit,
    )
    .unwrap();

    let log = git.exec(&["log", "--format=%B", "-n", "1"], &opts).unwrap();
    assert_eq!(log.stdout_text().trim_end(), "first line\nsecond line");
}

// =============================================================================
// Vendored git
// =============================================================================

#[test]
fn vendored_distribution_end_to_end() {
    let dir = temp_dir();
    let archive = pack_distribution(dir.path());
    let layout = VendorLayout::new(dir.path().join("root"));
    let empty = dir.path().join("no-git");
    std::fs::create_dir_all(&empty).unwrap();

    let resolver = Resolver::new(layout.clone(), &archive, TarExtractor::default())
        .with_search_path(Some(empty.into_os_string()));
    let state = resolver.resolve();
    assert!(matches!(state, ResolutionState::Vendored { extracted: true }));

    let toolchain = state.into_toolchain(&layout).unwrap();
    assert_eq!(
        toolchain.source(),
        ToolchainSource::Vendored { extracted: true }
    );

    let output = GitExecutor::new(&toolchain)
        .exec(&["status", "--short"], &ExecOptions::default())
        .unwrap();
    assert_eq!(
        output.stdout_text(),
        format!("vendored status --short exec={}", layout.exec_path().display())
    );

    // Unpacked copy is reused without touching the archive.
    std::fs::remove_file(&archive).unwrap();
    assert!(matches!(
        resolver.resolve(),
        ResolutionState::Vendored { extracted: false }
    ));
}
