// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stop command handler

use warden_core::Tag;

use crate::client::ManagerClient;
use crate::exit_error::ExitError;

pub async fn handle(port: u16, tag: String) -> Result<(), ExitError> {
    let mut client = ManagerClient::connect(port).await?;
    client.stop_container(Tag::from(tag.clone())).await?;
    println!("stop requested for {tag}");
    Ok(())
}
