// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Failure of a single RPC connection. Never propagates beyond the
/// connection task that hit it — the actor and every other connection are
/// unaffected.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error(transparent)]
    Protocol(#[from] warden_wire::ProtocolError),
}
