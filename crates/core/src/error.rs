// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors shared across the manager's user-facing and agent-facing surfaces.

use thiserror::Error;

/// A rejected user or agent request. Never accompanies a partial state
/// mutation — the manager either applies a transition in full or returns
/// this and changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
#[error("invalid operation: {reason}")]
pub struct InvalidOperation {
    pub reason: String,
}

impl InvalidOperation {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    pub fn tag_exists(tag: &crate::Tag) -> Self {
        Self::new(format!("container {tag} already exists"))
    }

    pub fn tag_unknown(tag: &crate::Tag) -> Self {
        Self::new(format!("no such container: {tag}"))
    }

    pub fn wrong_state(tag: &crate::Tag, expected: &str, actual: crate::ContainerState) -> Self {
        Self::new(format!("container {tag} must be {expected}, is {actual}"))
    }
}
