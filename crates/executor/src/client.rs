// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connecting to, and talking to, the manager's agent-facing surface.

use std::time::{Duration, Instant};

use tokio::net::TcpStream;
use tokio::time::sleep;
use tracing::{debug, warn};
use warden_core::Tag;
use warden_wire::{Request, Response};

/// Retry connecting to the manager until `deadline` elapses.
pub async fn connect_with_retry(addr: (&str, u16), deadline: Duration) -> std::io::Result<TcpStream> {
    let start = Instant::now();
    loop {
        match TcpStream::connect(addr).await {
            Ok(stream) => return Ok(stream),
            Err(e) if start.elapsed() < deadline => {
                debug!(error = %e, "manager not ready yet, retrying");
                sleep(Duration::from_millis(100)).await;
            }
            Err(e) => return Err(e),
        }
    }
}

pub async fn dequeue_ready_containers(stream: &mut TcpStream) -> std::io::Result<Vec<Tag>> {
    match warden_wire::call(stream, &Request::DequeueReadyContainers).await {
        Ok(Response::ReadyTags { tags }) => Ok(tags),
        Ok(other) => {
            warn!(?other, "unexpected response to DequeueReadyContainers");
            Ok(Vec::new())
        }
        Err(e) => Err(std::io::Error::other(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn connect_with_retry_succeeds_once_listener_is_up() {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        // Rebind shortly after to simulate the manager starting up slightly
        // behind the executor.
        tokio::spawn(async move {
            sleep(Duration::from_millis(20)).await;
            let _listener = TcpListener::bind(addr).await.unwrap();
            sleep(Duration::from_millis(200)).await;
        });
        let result =
            connect_with_retry(("127.0.0.1", addr.port()), Duration::from_secs(1)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn connect_with_retry_gives_up_after_deadline() {
        // Nothing listening on this port.
        let result =
            connect_with_retry(("127.0.0.1", 1), Duration::from_millis(50)).await;
        assert!(result.is_err());
    }
}
