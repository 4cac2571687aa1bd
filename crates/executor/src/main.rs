// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `warden-executor`: forks and supervises assistants on behalf of the
//! manager.
//!
//! Runs on a single-threaded runtime. The fork/cgroup-placement handshake
//! this binary performs on every launch is only safe with one live OS
//! thread in the process — see `warden_primitives::handshake`.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use warden_core::config;
use warden_executor::{client, tick::Executor};

#[derive(Parser, Debug)]
#[command(name = "warden-executor", about = "fork/cgroup supervisor for assistants")]
struct Args {
    #[arg(long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    #[arg(long, default_value = config::DEFAULT_PARENT_CGROUP)]
    parent_cgroup: PathBuf,

    #[arg(long)]
    assistant_bin: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    warden_primitives::cgroup::create_dir(&args.parent_cgroup)?;

    let manager_addr = ("127.0.0.1".to_string(), args.port);
    let mut stream = client::connect_with_retry(
        (manager_addr.0.as_str(), manager_addr.1),
        config::server_wait_deadline(),
    )
    .await
    .map_err(|e| {
        error!(error = %e, "manager never became reachable");
        e
    })?;
    info!(port = args.port, "connected to manager");

    let mut executor = Executor::new(args.parent_cgroup, args.assistant_bin, manager_addr);
    let mut tick = tokio::time::interval(config::tick_interval());

    loop {
        tick.tick().await;
        let ready = client::dequeue_ready_containers(&mut stream).await?;
        if !ready.is_empty() {
            executor.launch_ready(ready);
        }
        if !executor.children().is_empty() {
            executor.reap_one();
        }
    }
}
