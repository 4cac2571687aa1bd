// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The assistant's once-per-second loop: reap, report, honor the directive.

use std::path::PathBuf;

use nix::sys::signal::Signal;
use nix::unistd::Pid;
use tokio::net::TcpStream;
use tokio::process::Child;
use tracing::{info, warn};
use warden_core::{Command, ContainerState, ExitInfo, ManagerResponse, Tag};
use warden_primitives::{namespace::NamespaceMode, signal as cgroup_signal};

use crate::{client, exit_status};

pub struct Assistant {
    tag: Tag,
    own_cgroup: PathBuf,
    workload: Child,
    /// Captured once at construction: `Child::id()` goes back to `None` the
    /// moment the child has been polled to completion, but every status
    /// report — including the terminal DEAD one — must still carry it.
    workload_pid: u32,
    /// Set once the workload has been reaped. Kept across ticks because a
    /// child can only be `try_wait`'d into `Some` once; if the report that
    /// should follow fails, we need to remember the outcome to keep
    /// re-reporting it rather than silently losing it.
    reaped: Option<ExitInfo>,
}

impl Assistant {
    /// Spawn the workload via the namespace-entry helper, in container mode.
    pub fn spawn_workload(command: &Command) -> std::io::Result<Child> {
        let argv = warden_primitives::namespace::build_argv(
            NamespaceMode::Container,
            &command.cmd,
            &command.arguments,
        );
        tokio::process::Command::new("unshare").args(argv).spawn()
    }

    /// `workload` must not have been polled to completion yet — `new` reads
    /// its pid while it is still available.
    pub fn new(tag: Tag, own_cgroup: PathBuf, workload: Child) -> Self {
        let workload_pid = workload.id().unwrap_or(0);
        Self { tag, own_cgroup, workload, workload_pid, reaped: None }
    }

    /// Run one iteration of the monitor loop. Returns `Some(exit_code)` once
    /// the assistant should terminate.
    pub async fn tick(&mut self, stream: &mut TcpStream) -> Option<i32> {
        if self.reaped.is_none() {
            match self.workload.try_wait() {
                Ok(Some(status)) => self.reaped = Some(exit_status::from_exit_status(status)),
                Ok(None) => {}
                Err(e) => warn!(tag = %self.tag, error = %e, "try_wait failed on workload"),
            }
        }

        let state = if self.reaped.is_some() { ContainerState::Dead } else { ContainerState::Running };
        let own_pid = std::process::id();

        let report = client::report_container_status(
            stream,
            &self.tag,
            state,
            own_pid,
            self.workload_pid,
            self.own_cgroup.display().to_string(),
            self.reaped,
        )
        .await;

        let report_succeeded = match report {
            Ok(directive) => {
                self.honor(directive);
                if directive == ManagerResponse::Abort {
                    return Some(1);
                }
                true
            }
            Err(e) => {
                // The manager may be transiently unreachable; this is never
                // fatal mid-loop.
                warn!(tag = %self.tag, error = %e, "status report failed, will retry next tick");
                false
            }
        };

        if self.reaped.is_some() && report_succeeded {
            info!(tag = %self.tag, "workload reaped and reported, exiting");
            return Some(0);
        }
        None
    }

    fn honor(&self, directive: ManagerResponse) {
        let exclude = [Pid::from_raw(std::process::id() as i32)];
        match directive {
            ManagerResponse::Abort => {
                if let Err(e) = cgroup_signal::signal_cgroup(&self.own_cgroup, Signal::SIGKILL, &exclude) {
                    warn!(tag = %self.tag, error = %e, "failed to deliver SIGKILL fan-out");
                }
            }
            ManagerResponse::Stop => {
                if let Err(e) = cgroup_signal::signal_cgroup(&self.own_cgroup, Signal::SIGTERM, &exclude) {
                    warn!(tag = %self.tag, error = %e, "failed to deliver SIGTERM fan-out");
                }
            }
            ManagerResponse::Okay => {}
        }
    }
}
