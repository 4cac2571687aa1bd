// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cgroup v2 directory and membership operations.
//!
//! We never touch control files beyond `cgroup.procs`; teardown only ever
//! unlinks directories, bottom-up, since control files in a cgroup v2
//! hierarchy cannot be removed with `rmdir`/`unlink` directly — the kernel
//! frees them when the directory itself is removed.

use std::collections::HashSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use nix::unistd::Pid;

use crate::error::CgroupError;

const DIR_MODE: u32 = 0o755;

/// Create `dir` (and any missing ancestors) with mode 0755. Idempotent: an
/// already-existing directory is not an error.
pub fn create_dir(dir: &Path) -> Result<(), CgroupError> {
    match fs::create_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
        Err(source) => return Err(CgroupError::Create { path: dir.to_path_buf(), source }),
    }
    let perms = fs::Permissions::from_mode(DIR_MODE);
    fs::set_permissions(dir, perms)
        .map_err(|source| CgroupError::Create { path: dir.to_path_buf(), source })
}

/// Move `pid` into the cgroup rooted at `dir` by writing it to
/// `dir/cgroup.procs`.
pub fn add_pid(dir: &Path, pid: Pid) -> Result<(), CgroupError> {
    let procs = dir.join("cgroup.procs");
    fs::write(&procs, pid.as_raw().to_string())
        .map_err(|source| CgroupError::WritePid { path: procs, source })
}

/// Read the set of pids currently in the cgroup rooted at `dir`.
pub fn read_pids(dir: &Path) -> Result<HashSet<Pid>, CgroupError> {
    let procs = dir.join("cgroup.procs");
    let contents = fs::read_to_string(&procs)
        .map_err(|source| CgroupError::ReadMembership { path: procs, source })?;
    Ok(contents
        .lines()
        .filter_map(|line| line.trim().parse::<i32>().ok())
        .map(Pid::from_raw)
        .collect())
}

/// Recursively remove the directory subtree rooted at `dir`, bottom-up,
/// directories only. Scoped strictly to `dir` — never walks up into parent
/// directories, unlike a naive `removedirs`-style cleanup would.
pub fn teardown(dir: &Path) -> Result<(), CgroupError> {
    if !dir.exists() {
        return Ok(());
    }
    remove_bottom_up(dir).map_err(|source| CgroupError::Teardown { path: dir.to_path_buf(), source })
}

fn remove_bottom_up(dir: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        if entry.file_type()?.is_dir() {
            remove_bottom_up(&entry.path())?;
        }
    }
    fs::remove_dir(dir)
}
