// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A minimal request/response helper shared by the executor, the assistant,
//! and the thin CLI client — all of them just want to send one `Request`
//! and read back the matching `Response` on a connection they manage
//! themselves.

use tokio::io::{AsyncRead, AsyncWrite};

use crate::{read_message, write_message, ProtocolError, Request, Response};

pub async fn call<S>(stream: &mut S, request: &Request) -> Result<Response, ProtocolError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    write_message(stream, request).await?;
    read_message(stream).await
}
