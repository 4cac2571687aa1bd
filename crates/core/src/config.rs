// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Defaults and environment-variable overrides shared by every binary. CLI
//! flags win when given; otherwise an env var; otherwise these defaults.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 9090;
pub const DEFAULT_PARENT_CGROUP: &str = "/sys/fs/cgroup/containers.slice";
pub const DEFAULT_CGROUP_ROOT: &str = "/sys/fs/cgroup";

/// How long the executor retries connecting to the manager on startup
/// before giving up.
pub fn server_wait_deadline() -> Duration {
    Duration::from_millis(env_u64("WARDEN_SERVER_WAIT_MS").unwrap_or(5_000))
}

/// Tick interval shared by the executor's and assistant's monitor loops.
pub fn tick_interval() -> Duration {
    Duration::from_millis(env_u64("WARDEN_TICK_MS").unwrap_or(1_000))
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
