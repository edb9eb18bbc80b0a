// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::bootstrap::describe_toolchain;
use super::exec::{ExecReport, exec_options};
use crate::cli::exec::ExecArgs;
use crate::error::GitExecutionError;
use crate::git::layout::VendorLayout;
use crate::git::toolchain::Toolchain;

fn exec_args(input: &[&str]) -> ExecArgs {
    ExecArgs {
        cwd: Some(PathBuf::from("/srv/repo")),
        input: input.iter().map(ToString::to_string).collect(),
        json: false,
        args: vec!["status".to_string()],
    }
}

#[cfg(unix)]
#[test]
fn test_describe_vendored_toolchain() {
    let toolchain = Toolchain::vendored(&VendorLayout::new("/tmp"), false);
    insta::assert_snapshot!(describe_toolchain(&toolchain).join("\n"), @r"
    source  = vendored
    program = /tmp/usr/bin/git
    PATH   += /tmp/usr/bin
    GIT_TEMPLATE_DIR = /tmp/usr/share/git-core/templates
    GIT_EXEC_PATH = /tmp/usr/libexec/git-core
    LD_LIBRARY_PATH = /tmp/usr/lib64
    ");
}

#[test]
fn test_describe_host_toolchain() {
    let toolchain = Toolchain::host("/usr/bin/git");
    assert_eq!(
        describe_toolchain(&toolchain),
        ["source  = host", "program = /usr/bin/git"]
    );
}

#[test]
fn test_exec_options_from_args() {
    let opts = exec_options(&exec_args(&[]));
    assert_eq!(opts.cwd(), Some(Path::new("/srv/repo")));
    assert!(opts.clinput().is_none());

    let opts = exec_options(&exec_args(&["user", "token"]));
    assert_eq!(
        opts.clinput().map(<[String]>::to_vec),
        Some(vec!["user".to_string(), "token".to_string()])
    );
}

#[test]
fn test_exec_report_json() {
    let failure = GitExecutionError {
        command: vec!["git".into(), "pull".into()],
        code: 1,
        stdout: String::new(),
        stderr: "fatal: no upstream\n".into(),
    };
    let json = serde_json::to_string_pretty(&ExecReport::failure(&failure)).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "command": [
        "git",
        "pull"
      ],
      "returncode": 1,
      "stdout": "",
      "stderr": "fatal: no upstream\n"
    }
    "#);
}
