// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Start command handler

use warden_core::{Command, Tag};

use crate::client::ManagerClient;
use crate::exit_error::ExitError;

pub async fn handle(port: u16, tag: String, cmd: String, args: Vec<String>) -> Result<(), ExitError> {
    let mut client = ManagerClient::connect(port).await?;
    client.start_container(Tag::from(tag.clone()), Command::new(cmd, args)).await?;
    println!("started {tag}");
    Ok(())
}
