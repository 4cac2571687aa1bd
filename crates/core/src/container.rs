// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container and assistant bookkeeping entities owned by the manager.

use serde::{Deserialize, Serialize};

use crate::{Command, ContainerState, ExitInfo, Tag};

/// The manager's view of one container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerInfo {
    pub tag: Tag,
    pub state: ContainerState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_info: Option<ExitInfo>,
}

impl ContainerInfo {
    pub fn new(tag: Tag) -> Self {
        Self { tag, state: ContainerState::Ready, exit_info: None }
    }
}

/// What the manager knows about the assistant commissioned for a container,
/// once `startContainer` has been called for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantInfo {
    pub tag: Tag,
    pub command: Command,
    /// The assistant's own pid, as reported on its first status update. Zero
    /// until then.
    #[serde(default)]
    pub pid: u32,
    /// The namespace-entry helper's pid in the host pid namespace. Zero until
    /// the assistant's first status update.
    #[serde(default)]
    pub workload_pid: u32,
    #[serde(default)]
    pub cgroup_path: String,
}

impl AssistantInfo {
    pub fn new(tag: Tag, command: Command) -> Self {
        Self { tag, command, pid: 0, workload_pid: 0, cgroup_path: String::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_container_starts_ready_with_no_exit_info() {
        let info = ContainerInfo::new(Tag::from("one"));
        assert_eq!(info.state, ContainerState::Ready);
        assert!(info.exit_info.is_none());
    }

    #[test]
    fn new_assistant_info_has_zero_pids() {
        let info = AssistantInfo::new(Tag::from("one"), Command::new("/bin/true", vec![]));
        assert_eq!(info.pid, 0);
        assert_eq!(info.workload_pid, 0);
    }
}
