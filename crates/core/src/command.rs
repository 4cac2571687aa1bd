// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The workload a container was started with.

use serde::{Deserialize, Serialize};

/// A workload command line, as supplied to `startContainer` and later handed
/// to the assistant for execution inside the new namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub cmd: String,
    #[serde(default)]
    pub arguments: Vec<String>,
}

impl Command {
    pub fn new(cmd: impl Into<String>, arguments: Vec<String>) -> Self {
        Self { cmd: cmd.into(), arguments }
    }
}

crate::builder! {
    pub struct CommandBuilder => Command {
        into { cmd: String = "/bin/true" }
        set { arguments: Vec<String> = Vec::new() }
    }
}
