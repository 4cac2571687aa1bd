// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! RPC protocol for manager/agent/client communication.
//!
//! Wire format: 4-byte length prefix (big-endian) + JSON payload.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod client;
mod codec;
mod request;
mod response;

pub use client::call;
pub use codec::{decode, encode, read_message, write_message, ProtocolError, MAX_MESSAGE_BYTES};
pub use request::Request;
pub use response::Response;
