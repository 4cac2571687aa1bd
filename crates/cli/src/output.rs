// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use warden_core::ContainerInfo;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn print_containers(format: OutputFormat, containers: &[ContainerInfo]) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(containers).unwrap_or_default());
        }
        OutputFormat::Text => {
            if containers.is_empty() {
                println!("No containers");
                return;
            }
            println!("{:<24}{:<10}EXIT", "TAG", "STATE");
            for c in containers {
                let exit = match &c.exit_info {
                    Some(info) => format!("{:?} {}", info.code, info.status),
                    None => "-".to_string(),
                };
                println!("{:<24}{:<10}{}", c.tag, c.state, exit);
            }
        }
    }
}
