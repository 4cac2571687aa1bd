// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Talking to the manager's agent-facing surface.

use tokio::net::TcpStream;
use warden_core::{AssistantInfo, ExitInfo, ManagerResponse, Tag};
use warden_wire::{ProtocolError, Request, Response};

pub async fn get_assistant_manager_status(
    stream: &mut TcpStream,
    tag: &Tag,
) -> Result<Option<AssistantInfo>, ProtocolError> {
    match warden_wire::call(stream, &Request::GetAssistantManagerStatus { tag: tag.clone() }).await? {
        Response::AssistantManagerInfo { info } => Ok(info),
        other => {
            tracing::warn!(?other, "unexpected response to GetAssistantManagerStatus");
            Ok(None)
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn report_container_status(
    stream: &mut TcpStream,
    tag: &Tag,
    state: warden_core::ContainerState,
    pid: u32,
    workload_pid: u32,
    cgroup_path: String,
    exit_info: Option<ExitInfo>,
) -> Result<ManagerResponse, ProtocolError> {
    let request = Request::ReportContainerStatus {
        tag: tag.clone(),
        state,
        pid,
        workload_pid,
        cgroup_path,
        exit_info,
    };
    match warden_wire::call(stream, &request).await? {
        Response::Directive { directive } => Ok(directive),
        other => {
            tracing::warn!(?other, "unexpected response to ReportContainerStatus");
            Ok(ManagerResponse::Okay)
        }
    }
}
