// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoded wait(2) status, as reported by an assistant's reap of its workload.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitCode {
    /// The process called `exit()` or returned from `main`.
    Exit,
    /// The process was terminated by a signal.
    Signal,
}

/// How a workload (or assistant-reaped child) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitInfo {
    pub code: ExitCode,
    pub status: u8,
}

impl ExitInfo {
    /// Decode a raw `waitpid` status into `{EXIT, code}` / `{SIGNAL, number}`.
    ///
    /// Mirrors the sign convention of the Python prototype this system is based
    /// on: a non-negative raw status is a normal exit code, negative is `-signum`.
    pub fn from_raw(raw: i32) -> Self {
        if raw >= 0 {
            ExitInfo { code: ExitCode::Exit, status: raw as u8 }
        } else {
            ExitInfo { code: ExitCode::Signal, status: raw.unsigned_abs() as u8 }
        }
    }
}
