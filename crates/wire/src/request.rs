// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Requests accepted by the manager, covering both the user-facing and the
//! agent-facing surfaces. Both are served by the same actor mailbox, so a
//! single framed connection can carry either kind.

use serde::{Deserialize, Serialize};
use warden_core::{Command, ContainerState, ExitInfo, Tag};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    // --- user surface ---
    CreateContainer {
        tag: Tag,
    },
    StartContainer {
        tag: Tag,
        command: Command,
    },
    StopContainer {
        tag: Tag,
    },
    DeleteContainer {
        tag: Tag,
    },
    /// `tags: None` (or an empty list) returns every known container.
    ListContainers {
        #[serde(default)]
        tags: Option<Vec<Tag>>,
    },

    // --- agent surface ---
    DequeueReadyContainers,
    GetAssistantManagerStatus {
        tag: Tag,
    },
    GetRunningContainers,
    ReportContainerStatus {
        tag: Tag,
        state: ContainerState,
        #[serde(default)]
        pid: u32,
        #[serde(default)]
        workload_pid: u32,
        #[serde(default)]
        cgroup_path: String,
        #[serde(default)]
        exit_info: Option<ExitInfo>,
    },
}
