// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared support for the end-to-end specs: spawning a `wardend` with no
//! executor attached, and running `cmctl` against it.

use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Binaries built into the same `target/debug` directory as this test
/// binary are not exposed via `CARGO_BIN_EXE_*` across package boundaries,
/// so we locate them the same way `wardend` locates its own executor
/// sibling: relative to `current_exe()`.
fn bin_path(name: &str) -> PathBuf {
    let mut path = std::env::current_exe().expect("current_exe");
    path.pop(); // deps/
    path.pop(); // debug/
    path.push(name);
    path
}

fn free_port() -> u16 {
    TcpListener::bind(("127.0.0.1", 0)).expect("bind ephemeral port").local_addr().unwrap().port()
}

pub struct Manager {
    child: Child,
    pub port: u16,
}

impl Manager {
    /// Start a `wardend` with the executor disabled and wait for it to
    /// accept connections.
    pub fn start() -> Self {
        let port = free_port();
        let child = Command::new(bin_path("wardend"))
            .args([
                "--port",
                &port.to_string(),
                "--assistant-bin",
                "/bin/true",
                "--no-executor",
            ])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn wardend");

        let manager = Self { child, port };
        manager.wait_until_listening();
        manager
    }

    fn wait_until_listening(&self) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if std::net::TcpStream::connect(("127.0.0.1", self.port)).is_ok() {
                return;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        panic!("wardend never started listening on port {}", self.port);
    }

    pub fn cmctl(&self) -> Command {
        let mut cmd = Command::new(bin_path("cmctl"));
        cmd.args(["--port", &self.port.to_string()]);
        cmd
    }
}

impl Drop for Manager {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn run(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run cmctl");
    assert!(
        output.status.success(),
        "cmctl failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

pub fn run_expect_failure(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run cmctl");
    assert!(!output.status.success(), "cmctl unexpectedly succeeded");
    String::from_utf8(output.stderr).expect("utf8 stderr")
}
