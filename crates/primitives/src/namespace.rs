// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builds the argument list for the external namespace-entry helper
//! (an `unshare(1)`-equivalent). We never create namespaces ourselves;
//! entering them is delegated to a helper binary so this crate doesn't need
//! `CLONE_NEW*` handling of its own.

/// Which set of namespaces a launch enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceMode {
    /// The assistant itself: new mount namespace, plus pid (with a fresh
    /// `/proc` mount) so the assistant sees only its own workload tree.
    Assistant,
    /// The workload: everything the assistant gets, plus ipc, uts, and
    /// cgroup namespaces.
    Container,
}

impl NamespaceMode {
    fn flags(self) -> &'static [&'static str] {
        match self {
            NamespaceMode::Assistant => &["--mount", "--pid", "--fork", "--mount-proc"],
            NamespaceMode::Container => {
                &["--mount", "--pid", "--fork", "--mount-proc", "--ipc", "--uts", "--cgroup"]
            }
        }
    }
}

/// Build the full argv for invoking `helper_bin` to enter namespaces and
/// exec `cmd` with `args`.
pub fn build_argv(mode: NamespaceMode, cmd: &str, args: &[String]) -> Vec<String> {
    let mut argv: Vec<String> = mode.flags().iter().map(|s| s.to_string()).collect();
    argv.push(cmd.to_string());
    argv.extend(args.iter().cloned());
    argv
}
