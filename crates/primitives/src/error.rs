// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CgroupError {
    #[error("creating cgroup directory {path}: {source}")]
    Create { path: PathBuf, source: std::io::Error },

    #[error("writing pid to {path}: {source}")]
    WritePid { path: PathBuf, source: std::io::Error },

    #[error("reading membership of {path}: {source}")]
    ReadMembership { path: PathBuf, source: std::io::Error },

    #[error("tearing down {path}: {source}")]
    Teardown { path: PathBuf, source: std::io::Error },
}

#[derive(Debug, Error)]
pub enum ProcCgroupError {
    #[error("reading /proc/self/cgroup: {0}")]
    Read(#[from] std::io::Error),

    #[error("/proc/self/cgroup has no recognizable v2 entry")]
    NoV2Entry,

    #[error("own cgroup {own} is not contained within the configured parent {parent}")]
    NotContained { own: PathBuf, parent: PathBuf },
}
