// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discovering and validating the calling process's own cgroup v2 path.

use std::path::{Path, PathBuf};

use crate::error::ProcCgroupError;

/// Parse a cgroup v2 `/proc/<pid>/cgroup` entry (`0::<relative-path>`) and
/// root it at `cgroup_root` (normally `/sys/fs/cgroup`).
pub fn parse_v2_entry(contents: &str, cgroup_root: &Path) -> Result<PathBuf, ProcCgroupError> {
    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix("0::") {
            let rest = rest.trim_start_matches('/');
            return Ok(cgroup_root.join(rest));
        }
    }
    Err(ProcCgroupError::NoV2Entry)
}

/// Read and parse this process's own cgroup v2 path.
pub fn own_cgroup_path(cgroup_root: &Path) -> Result<PathBuf, ProcCgroupError> {
    let contents = std::fs::read_to_string("/proc/self/cgroup")?;
    parse_v2_entry(&contents, cgroup_root)
}

/// Assert `own` is `parent` or a descendant of it. A safety guard against a
/// misconfigured parent cgroup causing signals to be mis-scoped.
pub fn assert_within(own: &Path, parent: &Path) -> Result<(), ProcCgroupError> {
    if own.starts_with(parent) {
        Ok(())
    } else {
        Err(ProcCgroupError::NotContained { own: own.to_path_buf(), parent: parent.to_path_buf() })
    }
}
