// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort signal fan-out over a cgroup's current membership.

use std::collections::HashSet;
use std::path::Path;

use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tracing::debug;

use crate::cgroup;
use crate::error::CgroupError;

/// Send `signal` to every pid currently in the cgroup rooted at `dir`,
/// except those in `exclude` (normally the caller's own pid, so it survives
/// to report the outcome). Membership is read once and is not atomic with
/// the signal delivery — a pid that exits between the read and the `kill`
/// call is simply skipped, which is fine for this cooperative shutdown path.
pub fn signal_cgroup(dir: &Path, signal: Signal, exclude: &[Pid]) -> Result<(), CgroupError> {
    let members = cgroup::read_pids(dir)?;
    let excluded: HashSet<Pid> = exclude.iter().copied().collect();
    for pid in members {
        if excluded.contains(&pid) {
            continue;
        }
        if let Err(e) = signal::kill(pid, signal) {
            debug!(%pid, signal = %signal, error = %e, "signal delivery failed, ignoring");
        }
    }
    Ok(())
}
