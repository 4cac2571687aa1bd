// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fork/pipe synchronization barrier that lets the executor place a
//! freshly forked child into its cgroup before the child execs.
//!
//! We need the child's pid to write it to `cgroup.procs`, but the pid isn't
//! known until after `fork()` returns in the parent — and the child must
//! not run the workload (or even exec the namespace-entry helper) until
//! that write has happened, or some of its work escapes the cgroup. A raw
//! `fork()` plus a one-byte pipe is the barrier: the child blocks reading
//! the pipe immediately after fork, the parent creates the cgroup and moves
//! the child's pid into it, then releases the child by writing to the pipe.
//!
//! `std::process::Command::spawn`'s `pre_exec` hook cannot implement this:
//! `spawn()` doesn't return the child's pid to the parent until the child
//! has already called `execve` (or failed to), so a `pre_exec` closure that
//! blocks waiting for a release signal would deadlock `spawn()` itself. We
//! fork directly instead, exactly as conmon-rs does for the same reason
//! (see its `server.rs`), and the caller is expected to run on a
//! single-threaded runtime so the fork is taken with only one live OS
//! thread in the process.

use std::os::fd::{AsRawFd, BorrowedFd, RawFd};
use std::path::Path;

use nix::unistd::{fork, pipe, read, write, ForkResult, Pid};

use crate::cgroup;
use crate::error::CgroupError;

#[derive(Debug, thiserror::Error)]
pub enum HandshakeError {
    #[error("fork failed: {0}")]
    Fork(#[from] nix::Error),
    #[error(transparent)]
    Cgroup(#[from] CgroupError),
}

/// Fork a child that blocks on a pipe, place it in the cgroup rooted at
/// `cgroup_dir`, then release it. `on_child` is called in the child after
/// release and must not return on success (it should exec); if it does
/// return, the child process exits 1.
///
/// Returns the child's pid to the parent.
pub fn fork_into_cgroup(
    cgroup_dir: &Path,
    on_child: impl FnOnce() -> std::io::Error,
) -> Result<Pid, HandshakeError> {
    let (read_end, write_end) = pipe()?;

    match unsafe { fork()? } {
        ForkResult::Child => {
            drop(write_end);
            block_on_release(read_end.as_raw_fd());
            drop(read_end);

            let err = on_child();
            eprintln!("exec failed: {err}");
            std::process::exit(1);
        }
        ForkResult::Parent { child } => {
            drop(read_end);
            let result = place_and_release(cgroup_dir, child, write_end.as_raw_fd());
            drop(write_end);
            result?;
            Ok(child)
        }
    }
}

fn block_on_release(read_fd: RawFd) {
    let mut buf = [0u8; 1];
    // A short read (0 bytes) means the parent died without releasing us;
    // proceed rather than hang forever — the exec that follows will simply
    // run outside the intended cgroup, which is no worse than the parent
    // having crashed.
    let _ = read(read_fd, &mut buf);
}

fn place_and_release(cgroup_dir: &Path, child: Pid, write_fd: RawFd) -> Result<(), HandshakeError> {
    cgroup::create_dir(cgroup_dir)?;
    cgroup::add_pid(cgroup_dir, child)?;
    let fd = unsafe { BorrowedFd::borrow_raw(write_fd) };
    write(fd, &[0u8]).map_err(HandshakeError::Fork)?;
    Ok(())
}
