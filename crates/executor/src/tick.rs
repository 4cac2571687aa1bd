// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The executor's one-tick-per-second loop: launch newly-ready assistants,
//! then reap anything that exited.

use std::collections::HashMap;
use std::path::PathBuf;

use nix::unistd::Pid;
use tracing::{info, warn};
use warden_core::Tag;
use warden_primitives::{cgroup, handshake, namespace::NamespaceMode, reap};

pub struct Executor {
    parent_cgroup: PathBuf,
    assistant_bin: PathBuf,
    manager_addr: (String, u16),
    /// assistant pid -> tag, owned exclusively by the executor.
    children: HashMap<Pid, Tag>,
}

impl Executor {
    pub fn new(parent_cgroup: PathBuf, assistant_bin: PathBuf, manager_addr: (String, u16)) -> Self {
        Self { parent_cgroup, assistant_bin, manager_addr, children: HashMap::new() }
    }

    /// Launch one assistant per ready tag. Forking happens synchronously
    /// (it must: see `warden_primitives::handshake`), so this briefly blocks
    /// the tick.
    pub fn launch_ready(&mut self, ready: Vec<Tag>) {
        for tag in ready {
            match self.launch_one(&tag) {
                Ok(pid) => {
                    info!(%tag, %pid, "launched assistant");
                    self.children.insert(pid, tag);
                }
                Err(e) => {
                    warn!(%tag, error = %e, "failed to launch assistant, leaving it READY");
                }
            }
        }
    }

    fn launch_one(&self, tag: &Tag) -> Result<Pid, handshake::HandshakeError> {
        let cgroup_dir = self.parent_cgroup.join(tag.as_str());
        let assistant_bin = self.assistant_bin.clone();
        let port = self.manager_addr.1.to_string();
        let parent_cgroup = self.parent_cgroup.display().to_string();
        let tag_str = tag.to_string();

        handshake::fork_into_cgroup(&cgroup_dir, move || {
            let argv = warden_primitives::namespace::build_argv(
                NamespaceMode::Assistant,
                assistant_bin.to_str().unwrap_or("assistant"),
                &[port, tag_str, parent_cgroup],
            );
            exec_namespace_helper(&argv)
        })
    }

    /// Non-blocking reap of at most one exited assistant per call.
    pub fn reap_one(&mut self) {
        match reap::try_reap_any() {
            Ok(Some((pid, exit_info))) => {
                if let Some(tag) = self.children.remove(&pid) {
                    info!(%tag, %pid, ?exit_info, "reaped assistant");
                    let cgroup_dir = self.parent_cgroup.join(tag.as_str());
                    if let Err(e) = cgroup::teardown(&cgroup_dir) {
                        warn!(%tag, error = %e, "cgroup teardown failed, will retry next tick");
                    }
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "waitpid failed"),
        }
    }

    pub fn children(&self) -> &HashMap<Pid, Tag> {
        &self.children
    }
}

/// Replace the current process image with the namespace-entry helper. Only
/// ever called in the forked child between release and exec; never returns
/// on success.
fn exec_namespace_helper(argv: &[String]) -> std::io::Error {
    use std::os::unix::process::CommandExt;
    std::process::Command::new("unshare").args(argv).exec()
}
