// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The TCP accept loop. Each connection gets its own task that decodes
//! requests and forwards them to the actor; the actor itself never touches
//! a socket.

use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};
use warden_wire::{read_message, write_message, Request, Response};

use crate::actor::ManagerHandle;
use crate::error::ConnectionError;

pub async fn run(listener: TcpListener, handle: ManagerHandle) {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "accept failed, continuing");
                continue;
            }
        };
        debug!(%peer, "accepted connection");
        let handle = handle.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, &handle).await {
                debug!(%peer, error = %e, "connection closed with error");
            }
        });
    }
}

async fn handle_connection(
    mut socket: TcpStream,
    handle: &ManagerHandle,
) -> Result<(), ConnectionError> {
    loop {
        let request: Request = match read_message(&mut socket).await {
            Ok(req) => req,
            Err(warden_wire::ProtocolError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let response = dispatch(handle, request).await;
        write_message(&mut socket, &response).await?;
    }
}

async fn dispatch(handle: &ManagerHandle, request: Request) -> Response {
    match request {
        Request::CreateContainer { tag } => match handle.create_container(tag).await {
            Ok(()) => Response::Ok,
            Err(e) => Response::Error { reason: e.reason },
        },
        Request::StartContainer { tag, command } => {
            match handle.start_container(tag, command).await {
                Ok(()) => Response::Ok,
                Err(e) => Response::Error { reason: e.reason },
            }
        }
        Request::StopContainer { tag } => match handle.stop_container(tag).await {
            Ok(()) => Response::Ok,
            Err(e) => Response::Error { reason: e.reason },
        },
        Request::DeleteContainer { tag } => match handle.delete_container(tag).await {
            Ok(()) => Response::Ok,
            Err(e) => Response::Error { reason: e.reason },
        },
        Request::ListContainers { tags } => match handle.list_containers(tags).await {
            Ok(containers) => Response::Containers { containers },
            Err(e) => Response::Error { reason: e.reason },
        },
        Request::DequeueReadyContainers => {
            Response::ReadyTags { tags: handle.dequeue_ready_containers().await }
        }
        Request::GetAssistantManagerStatus { tag } => {
            Response::AssistantManagerInfo { info: handle.get_assistant_manager_status(tag).await }
        }
        Request::GetRunningContainers => {
            Response::RunningTags { tags: handle.get_running_containers().await }
        }
        Request::ReportContainerStatus { tag, state, pid, workload_pid, cgroup_path, exit_info } => {
            let directive = handle
                .report_container_status(tag, state, pid, workload_pid, cgroup_path, exit_info)
                .await;
            Response::Directive { directive }
        }
    }
}

pub async fn bind(port: u16) -> std::io::Result<TcpListener> {
    let addr = ("127.0.0.1", port);
    let listener = TcpListener::bind(addr).await?;
    info!(port, "manager listening");
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::Tag;

    #[tokio::test]
    async fn round_trip_create_and_list_over_a_real_socket() {
        let handle = crate::actor::spawn();
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(run(listener, handle));

        let mut client = TcpStream::connect(addr).await.unwrap();
        write_message(&mut client, &Request::CreateContainer { tag: Tag::from("one") })
            .await
            .unwrap();
        let resp: Response = read_message(&mut client).await.unwrap();
        assert_eq!(resp, Response::Ok);

        write_message(&mut client, &Request::ListContainers { tags: None }).await.unwrap();
        let resp: Response = read_message(&mut client).await.unwrap();
        match resp {
            Response::Containers { containers } => assert_eq!(containers.len(), 1),
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
