// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `warden-assistant`: supervises exactly one container's workload.
//!
//! Invoked by the executor, never directly: `assistant PORT TAG PARENT_CGROUP`.
//! A failed initial handshake with the manager means this process is rogue
//! (its tag is unknown, or the manager never commissioned it) and it exits 1
//! without touching anything.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpStream;
use tracing::{error, info};
use warden_assistant::{client, Assistant};
use warden_core::{config, Tag};
use warden_primitives::proc_cgroup;

#[derive(Parser, Debug)]
#[command(name = "warden-assistant", about = "per-container workload supervisor")]
struct Args {
    port: u16,
    tag: String,
    parent_cgroup: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let tag = Tag::from(args.tag);

    let mut stream = match TcpStream::connect(("127.0.0.1", args.port)).await {
        Ok(s) => s,
        Err(e) => {
            error!(%tag, error = %e, "cannot reach manager, exiting as rogue");
            return ExitCode::FAILURE;
        }
    };

    let commission = match client::get_assistant_manager_status(&mut stream, &tag).await {
        Ok(Some(info)) => info,
        Ok(None) => {
            error!(%tag, "manager has no record of this tag, exiting as rogue");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!(%tag, error = %e, "initial status call failed, exiting as rogue");
            return ExitCode::FAILURE;
        }
    };

    let own_cgroup = match proc_cgroup::own_cgroup_path(std::path::Path::new(config::DEFAULT_CGROUP_ROOT)) {
        Ok(path) => path,
        Err(e) => {
            error!(%tag, error = %e, "cannot determine own cgroup, exiting as rogue");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = proc_cgroup::assert_within(&own_cgroup, &args.parent_cgroup) {
        error!(%tag, error = %e, "own cgroup is not under the configured parent, exiting as rogue");
        return ExitCode::FAILURE;
    }

    let workload = match Assistant::spawn_workload(&commission.command) {
        Ok(child) => child,
        Err(e) => {
            error!(%tag, error = %e, "failed to spawn workload");
            return ExitCode::FAILURE;
        }
    };
    info!(%tag, cgroup = %own_cgroup.display(), "workload spawned, entering monitor loop");

    let mut assistant = Assistant::new(tag, own_cgroup, workload);
    let mut tick = tokio::time::interval(config::tick_interval());
    loop {
        tick.tick().await;
        if let Some(code) = assistant.tick(&mut stream).await {
            return if code == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE };
        }
    }
}
