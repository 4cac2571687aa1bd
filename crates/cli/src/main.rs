// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cmctl`: talk to a running manager over its user-facing RPC surface.

use clap::{Parser, Subcommand};
use cmctl::commands;
use cmctl::exit_error::ExitError;
use cmctl::output::OutputFormat;
use warden_core::config;

#[derive(Parser, Debug)]
#[command(name = "cmctl", about = "control a warden manager")]
struct Cli {
    #[arg(long, global = true, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a new container tag, in the READY state.
    Create { tag: String },
    /// Commission a workload for a READY container and enqueue it for launch.
    Start {
        tag: String,
        cmd: String,
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Request a graceful stop of a RUNNING container.
    Stop { tag: String },
    /// Forget a container once it is READY or DEAD.
    Delete { tag: String },
    /// List known containers, optionally filtered by tag.
    List {
        tags: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Create { tag } => commands::create::handle(cli.port, tag).await,
        Commands::Start { tag, cmd, args } => commands::start::handle(cli.port, tag, cmd, args).await,
        Commands::Stop { tag } => commands::stop::handle(cli.port, tag).await,
        Commands::Delete { tag } => commands::delete::handle(cli.port, tag).await,
        Commands::List { tags, format } => commands::list::handle(cli.port, tags, format).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(ExitError::CODE);
    }
}
