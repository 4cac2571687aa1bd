// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single actor task that owns [`ManagerState`] outright.
//!
//! Every RPC handler body, from either the user surface or the agent
//! surface, is funneled through this one mailbox instead of reaching for a
//! shared `Mutex<ManagerState>`. That gives the "single serialized handler,
//! zero locks" property by construction: there is exactly one task with
//! `&mut ManagerState`, and it never awaits anything but the next mailbox
//! message.

use tokio::sync::{mpsc, oneshot};
use tracing::warn;
use warden_core::{AssistantInfo, Command as WorkloadCommand, ContainerInfo, ContainerState, ExitInfo, InvalidOperation, ManagerResponse, Tag};

use crate::state::ManagerState;

type Reply<T> = oneshot::Sender<T>;

pub enum Mail {
    CreateContainer { tag: Tag, reply: Reply<Result<(), InvalidOperation>> },
    StartContainer { tag: Tag, command: WorkloadCommand, reply: Reply<Result<(), InvalidOperation>> },
    StopContainer { tag: Tag, reply: Reply<Result<(), InvalidOperation>> },
    DeleteContainer { tag: Tag, reply: Reply<Result<(), InvalidOperation>> },
    ListContainers { tags: Option<Vec<Tag>>, reply: Reply<Result<Vec<ContainerInfo>, InvalidOperation>> },
    DequeueReadyContainers { reply: Reply<Vec<Tag>> },
    GetAssistantManagerStatus { tag: Tag, reply: Reply<Option<AssistantInfo>> },
    GetRunningContainers { reply: Reply<Vec<Tag>> },
    ReportContainerStatus {
        tag: Tag,
        state: ContainerState,
        pid: u32,
        workload_pid: u32,
        cgroup_path: String,
        exit_info: Option<ExitInfo>,
        reply: Reply<ManagerResponse>,
    },
}

/// A cloneable front door to the actor. Every connection task gets its own
/// clone; all of them write into the same channel.
#[derive(Clone)]
pub struct ManagerHandle {
    tx: mpsc::Sender<Mail>,
}

/// Mailbox depth. Generous: handler bodies are all O(1)/O(n) in-memory work,
/// so the actor drains faster than any plausible connection count can fill
/// this, but an unbounded channel would let a runaway client queue unbounded
/// memory.
const MAILBOX_CAPACITY: usize = 1024;

/// Spawn the actor task and return a handle to it.
pub fn spawn() -> ManagerHandle {
    let (tx, rx) = mpsc::channel(MAILBOX_CAPACITY);
    tokio::spawn(run(ManagerState::new(), rx));
    ManagerHandle { tx }
}

async fn run(mut state: ManagerState, mut rx: mpsc::Receiver<Mail>) {
    while let Some(mail) = rx.recv().await {
        match mail {
            Mail::CreateContainer { tag, reply } => {
                let _ = reply.send(state.create_container(tag));
            }
            Mail::StartContainer { tag, command, reply } => {
                let _ = reply.send(state.start_container(tag, command));
            }
            Mail::StopContainer { tag, reply } => {
                let _ = reply.send(state.stop_container(&tag));
            }
            Mail::DeleteContainer { tag, reply } => {
                let _ = reply.send(state.delete_container(&tag));
            }
            Mail::ListContainers { tags, reply } => {
                let _ = reply.send(state.list_containers(tags.as_deref()));
            }
            Mail::DequeueReadyContainers { reply } => {
                let _ = reply.send(state.dequeue_ready_containers());
            }
            Mail::GetAssistantManagerStatus { tag, reply } => {
                let _ = reply.send(state.get_assistant_manager_status(&tag));
            }
            Mail::GetRunningContainers { reply } => {
                let _ = reply.send(state.get_running_containers());
            }
            Mail::ReportContainerStatus { tag, state: new_state, pid, workload_pid, cgroup_path, exit_info, reply } => {
                let directive = state.report_container_status(
                    &tag,
                    new_state,
                    pid,
                    workload_pid,
                    cgroup_path,
                    exit_info,
                );
                let _ = reply.send(directive);
            }
        }
    }
    warn!("manager mailbox closed, actor task exiting");
}

macro_rules! call {
    ($self:ident, $variant:ident { $($field:ident),* }) => {{
        let (reply, rx) = oneshot::channel();
        $self.tx.send(Mail::$variant { $($field,)* reply }).await
            .expect("manager actor task is gone");
        rx.await.expect("manager actor dropped the reply channel")
    }};
}

impl ManagerHandle {
    pub async fn create_container(&self, tag: Tag) -> Result<(), InvalidOperation> {
        call!(self, CreateContainer { tag })
    }

    pub async fn start_container(
        &self,
        tag: Tag,
        command: WorkloadCommand,
    ) -> Result<(), InvalidOperation> {
        call!(self, StartContainer { tag, command })
    }

    pub async fn stop_container(&self, tag: Tag) -> Result<(), InvalidOperation> {
        call!(self, StopContainer { tag })
    }

    pub async fn delete_container(&self, tag: Tag) -> Result<(), InvalidOperation> {
        call!(self, DeleteContainer { tag })
    }

    pub async fn list_containers(
        &self,
        tags: Option<Vec<Tag>>,
    ) -> Result<Vec<ContainerInfo>, InvalidOperation> {
        call!(self, ListContainers { tags })
    }

    pub async fn dequeue_ready_containers(&self) -> Vec<Tag> {
        call!(self, DequeueReadyContainers {})
    }

    pub async fn get_assistant_manager_status(&self, tag: Tag) -> Option<AssistantInfo> {
        call!(self, GetAssistantManagerStatus { tag })
    }

    pub async fn get_running_containers(&self) -> Vec<Tag> {
        call!(self, GetRunningContainers {})
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn report_container_status(
        &self,
        tag: Tag,
        state: ContainerState,
        pid: u32,
        workload_pid: u32,
        cgroup_path: String,
        exit_info: Option<ExitInfo>,
    ) -> ManagerResponse {
        call!(self, ReportContainerStatus { tag, state, pid, workload_pid, cgroup_path, exit_info })
    }
}
