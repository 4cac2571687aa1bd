// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-blocking reaping, shared by the executor (reaping assistants) and the
//! assistant (reaping its workload).

use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;
use warden_core::ExitInfo;

/// Non-blocking wait for any child of the calling process. Returns `Ok(None)`
/// if nothing has exited yet (`ECHILD` is also folded into `Ok(None)`, since
/// "no children left to wait for" and "nothing exited yet" are both just
/// "nothing to report" from the caller's point of view).
pub fn try_reap_any() -> nix::Result<Option<(Pid, ExitInfo)>> {
    match waitpid(None, Some(WaitPidFlag::WNOHANG)) {
        Ok(WaitStatus::Exited(pid, code)) => Ok(Some((pid, ExitInfo::from_raw(code)))),
        Ok(WaitStatus::Signaled(pid, signal, _core_dumped)) => {
            Ok(Some((pid, ExitInfo::from_raw(-(signal as i32)))))
        }
        Ok(_) => Ok(None),
        Err(nix::errno::Errno::ECHILD) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::sys::signal::Signal;
    use nix::unistd::{fork, ForkResult};

    #[test]
    fn reaps_a_normally_exiting_child() {
        match unsafe { fork() }.unwrap() {
            ForkResult::Child => unsafe { nix::libc::_exit(7) },
            ForkResult::Parent { child } => {
                // Poll: WNOHANG can race the child's actual exit.
                let mut result = None;
                for _ in 0..1000 {
                    if let Some(found) = try_reap_any().unwrap() {
                        result = Some(found);
                        break;
                    }
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                let (pid, exit_info) = result.expect("child should have been reaped");
                assert_eq!(pid, child);
                assert_eq!(exit_info.status, 7);
            }
        }
    }

    #[test]
    fn reaps_a_signal_killed_child() {
        match unsafe { fork() }.unwrap() {
            ForkResult::Child => loop {
                std::thread::sleep(std::time::Duration::from_secs(10));
            },
            ForkResult::Parent { child } => {
                nix::sys::signal::kill(child, Signal::SIGKILL).unwrap();
                let mut result = None;
                for _ in 0..1000 {
                    if let Some(found) = try_reap_any().unwrap() {
                        result = Some(found);
                        break;
                    }
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                let (pid, exit_info) = result.expect("child should have been reaped");
                assert_eq!(pid, child);
                assert_eq!(exit_info.status, Signal::SIGKILL as u8);
            }
        }
    }
}
