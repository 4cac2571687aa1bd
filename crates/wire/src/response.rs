// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Responses returned by the manager.

use serde::{Deserialize, Serialize};
use warden_core::{AssistantInfo, ContainerInfo, ManagerResponse, Tag};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// Generic acknowledgement for operations with no payload to return.
    Ok,

    /// A rejected request; no state was mutated.
    Error { reason: String },

    /// Result of `listContainers`.
    Containers { containers: Vec<ContainerInfo> },

    /// Result of `dequeueReadyContainers`.
    ReadyTags { tags: Vec<Tag> },

    /// Result of `getAssistantManagerStatus`. `None` means the tag is
    /// unknown to the manager — the caller must treat this as "you are
    /// rogue" and self-terminate.
    AssistantManagerInfo { info: Option<AssistantInfo> },

    /// Result of `getRunningContainers`.
    RunningTags { tags: Vec<Tag> },

    /// Result of `reportContainerStatus`.
    Directive { directive: ManagerResponse },
}
