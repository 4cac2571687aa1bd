// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Converting a std `ExitStatus` into our wire-level `ExitInfo`.

use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use warden_core::{ExitCode, ExitInfo};

pub fn from_exit_status(status: ExitStatus) -> ExitInfo {
    match status.code() {
        Some(code) => ExitInfo { code: ExitCode::Exit, status: code as u8 },
        None => match status.signal() {
            Some(signal) => ExitInfo { code: ExitCode::Signal, status: signal as u8 },
            None => ExitInfo { code: ExitCode::Exit, status: 0 },
        },
    }
}
