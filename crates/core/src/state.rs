// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container lifecycle states and the manager's response directive.

use serde::{Deserialize, Serialize};

/// The lifecycle state of a container as tracked by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerState {
    /// Created, not yet (re)started. Waiting to be enqueued or re-enqueued.
    Ready,
    /// An assistant has confirmed the workload is alive.
    Running,
    /// A stop was requested; waiting for the assistant to report DEAD.
    Stopping,
    /// The assistant reported the workload has exited.
    Dead,
}

crate::simple_display! {
    ContainerState {
        Ready => "ready",
        Running => "running",
        Stopping => "stopping",
        Dead => "dead",
    }
}

/// Directive returned to an assistant in response to a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerResponse {
    /// Keep going.
    Okay,
    /// Terminate the workload gracefully (SIGTERM fan-out) and keep reporting.
    Stop,
    /// The manager has no record of this container; kill everything and exit.
    Abort,
}

crate::simple_display! {
    ManagerResponse {
        Okay => "okay",
        Stop => "stop",
        Abort => "abort",
    }
}
