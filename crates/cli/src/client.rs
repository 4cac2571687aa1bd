// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Query and command methods against the manager's user-facing surface.

use tokio::net::TcpStream;
use warden_core::{Command, ContainerInfo, Tag};
use warden_wire::{Request, Response};

use crate::exit_error::ExitError;

pub struct ManagerClient {
    stream: TcpStream,
}

impl ManagerClient {
    pub async fn connect(port: u16) -> Result<Self, ExitError> {
        let stream = TcpStream::connect(("127.0.0.1", port))
            .await
            .map_err(|e| ExitError::unreachable(port, e))?;
        Ok(Self { stream })
    }

    async fn send(&mut self, request: &Request) -> Result<Response, ExitError> {
        Ok(warden_wire::call(&mut self.stream, request).await?)
    }

    pub async fn create_container(&mut self, tag: Tag) -> Result<(), ExitError> {
        match self.send(&Request::CreateContainer { tag }).await? {
            Response::Ok => Ok(()),
            other => Err(ExitError::reject(other)),
        }
    }

    pub async fn start_container(&mut self, tag: Tag, command: Command) -> Result<(), ExitError> {
        match self.send(&Request::StartContainer { tag, command }).await? {
            Response::Ok => Ok(()),
            other => Err(ExitError::reject(other)),
        }
    }

    pub async fn stop_container(&mut self, tag: Tag) -> Result<(), ExitError> {
        match self.send(&Request::StopContainer { tag }).await? {
            Response::Ok => Ok(()),
            other => Err(ExitError::reject(other)),
        }
    }

    pub async fn delete_container(&mut self, tag: Tag) -> Result<(), ExitError> {
        match self.send(&Request::DeleteContainer { tag }).await? {
            Response::Ok => Ok(()),
            other => Err(ExitError::reject(other)),
        }
    }

    pub async fn list_containers(&mut self, tags: Option<Vec<Tag>>) -> Result<Vec<ContainerInfo>, ExitError> {
        match self.send(&Request::ListContainers { tags }).await? {
            Response::Containers { containers } => Ok(containers),
            other => Err(ExitError::reject(other)),
        }
    }
}
