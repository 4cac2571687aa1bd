// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawns the executor as a genuine sibling OS process and tears it down on
//! shutdown.
//!
//! The original prototype this system is modeled on forked the executor
//! in-process without exec'ing, which was safe there because the parent
//! was a single-threaded, non-async script. Our manager runs a
//! multi-threaded tokio runtime, and forking a live multi-threaded process
//! is exactly the hazard the executor itself goes to lengths to avoid (see
//! `warden-executor`) — so here we spawn a genuinely separate binary
//! instead of forking this process.

use std::path::PathBuf;
use std::process::Stdio;

use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tokio::process::{Child, Command};
use tracing::{info, warn};

pub struct ExecutorChild {
    child: Child,
}

impl ExecutorChild {
    pub fn spawn(
        executor_bin: &PathBuf,
        port: u16,
        parent_cgroup: &str,
        assistant_bin: &PathBuf,
    ) -> std::io::Result<Self> {
        let child = Command::new(executor_bin)
            .arg("--port")
            .arg(port.to_string())
            .arg("--parent-cgroup")
            .arg(parent_cgroup)
            .arg("--assistant-bin")
            .arg(assistant_bin)
            .stdin(Stdio::null())
            .spawn()?;
        info!(pid = child.id(), "spawned executor");
        Ok(Self { child })
    }

    /// SIGKILL the executor and reap it, best-effort. Called on manager
    /// shutdown; failures are logged, never propagated, since we're on our
    /// way out regardless.
    pub async fn kill_and_reap(mut self) {
        if let Some(pid) = self.child.id() {
            if let Err(e) = signal::kill(Pid::from_raw(pid as i32), Signal::SIGKILL) {
                warn!(pid, error = %e, "failed to signal executor, it may already be gone");
            }
        }
        match self.child.wait().await {
            Ok(status) => info!(?status, "executor reaped"),
            Err(e) => warn!(error = %e, "failed to reap executor"),
        }
    }
}
