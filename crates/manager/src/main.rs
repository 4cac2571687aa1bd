// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wardend`: binds the manager's RPC listener and, unless told otherwise,
//! launches the executor as a sibling process.

use std::path::PathBuf;

use clap::Parser;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};
use warden_core::config;
use warden_manager::{actor, launcher::ExecutorChild, listener};

#[derive(Parser, Debug)]
#[command(name = "wardend", about = "container lifecycle manager")]
struct Args {
    #[arg(long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    #[arg(long, default_value = config::DEFAULT_PARENT_CGROUP)]
    parent_cgroup: String,

    #[arg(long)]
    assistant_bin: PathBuf,

    /// Skip launching the executor; useful when something else (a process
    /// supervisor, a test harness) is responsible for running it.
    #[arg(long)]
    no_executor: bool,

    /// Override the executor binary location. Defaults to a binary named
    /// `warden-executor` next to this one.
    #[arg(long)]
    executor_bin: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let listener_socket = listener::bind(args.port).await?;
    let handle = actor::spawn();

    let executor = if args.no_executor {
        None
    } else {
        let executor_bin = args.executor_bin.unwrap_or_else(default_executor_bin);
        match ExecutorChild::spawn(&executor_bin, args.port, &args.parent_cgroup, &args.assistant_bin)
        {
            Ok(child) => Some(child),
            Err(e) => {
                error!(error = %e, path = %executor_bin.display(), "failed to spawn executor");
                return Err(e.into());
            }
        }
    };

    let serve = tokio::spawn(listener::run(listener_socket, handle));

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    tokio::select! {
        _ = sigterm.recv() => info!("received SIGTERM"),
        _ = sigint.recv() => info!("received SIGINT"),
    }

    serve.abort();
    if let Some(executor) = executor {
        executor.kill_and_reap().await;
    }
    Ok(())
}

fn default_executor_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("wardend"));
    path.set_file_name("warden-executor");
    path
}
