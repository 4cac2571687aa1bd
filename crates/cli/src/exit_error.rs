// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors `cmctl` can hit talking to the manager.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, so `main()` is the single place that turns a failure into a
//! process exit.

use thiserror::Error;
use warden_wire::{ProtocolError, Response};

#[derive(Debug, Error)]
pub enum ExitError {
    #[error("cannot reach manager on port {port}: {source}")]
    Unreachable {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("manager connection failed: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("{reason}")]
    Rejected { reason: String },

    #[error("unexpected response from manager: {0:?}")]
    UnexpectedResponse(Response),
}

impl ExitError {
    /// Every failure here is reported on stderr and exits nonzero; none of
    /// the manager's own rejection reasons need a distinct exit code.
    pub const CODE: i32 = 1;

    pub fn unreachable(port: u16, source: std::io::Error) -> Self {
        Self::Unreachable { port, source }
    }

    /// Turn a non-`Ok` response into the right variant.
    pub fn reject(response: Response) -> Self {
        match response {
            Response::Error { reason } => Self::Rejected { reason },
            other => Self::UnexpectedResponse(other),
        }
    }
}
