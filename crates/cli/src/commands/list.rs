// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List command handler

use warden_core::Tag;

use crate::client::ManagerClient;
use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

pub async fn handle(port: u16, tags: Vec<String>, format: OutputFormat) -> Result<(), ExitError> {
    let mut client = ManagerClient::connect(port).await?;
    let filter = if tags.is_empty() { None } else { Some(tags.into_iter().map(Tag::from).collect()) };
    let containers = client.list_containers(filter).await?;
    output::print_containers(format, &containers);
    Ok(())
}
