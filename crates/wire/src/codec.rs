// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Length-prefixed JSON framing: a 4-byte big-endian length prefix followed
//! by a JSON payload. Used for both the user-facing and agent-facing RPC
//! surfaces over a plain TCP socket on loopback.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Refuse to allocate more than this many bytes for a single message body.
/// Guards against a corrupt or hostile length prefix turning into an
/// unbounded allocation; every real request/response in this protocol is
/// well under a kilobyte.
pub const MAX_MESSAGE_BYTES: u32 = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("message body of {len} bytes exceeds the {MAX_MESSAGE_BYTES} byte limit")]
    MessageTooLarge { len: u32 },

    #[error("connection closed before a full message was read")]
    Eof,
}

/// Serialize `value` as JSON and prepend the 4-byte big-endian length prefix.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, ProtocolError> {
    let body = serde_json::to_vec(value)?;
    let len: u32 = body
        .len()
        .try_into()
        .map_err(|_| ProtocolError::MessageTooLarge { len: u32::MAX })?;
    if len > MAX_MESSAGE_BYTES {
        return Err(ProtocolError::MessageTooLarge { len });
    }
    let mut framed = Vec::with_capacity(4 + body.len());
    framed.extend_from_slice(&len.to_be_bytes());
    framed.extend_from_slice(&body);
    Ok(framed)
}

/// Deserialize a JSON payload (without the length prefix).
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ProtocolError> {
    Ok(serde_json::from_slice(body)?)
}

/// Read one length-prefixed message from `reader`.
pub async fn read_message<T, R>(reader: &mut R) -> Result<T, ProtocolError>
where
    T: DeserializeOwned,
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Err(ProtocolError::Eof),
        Err(e) => return Err(e.into()),
    }
    let len = u32::from_be_bytes(len_buf);
    if len > MAX_MESSAGE_BYTES {
        return Err(ProtocolError::MessageTooLarge { len });
    }
    let mut body = vec![0u8; len as usize];
    reader.read_exact(&mut body).await?;
    decode(&body)
}

/// Write one length-prefixed message to `writer`.
pub async fn write_message<T, W>(writer: &mut W, value: &T) -> Result<(), ProtocolError>
where
    T: Serialize,
    W: AsyncWrite + Unpin,
{
    let framed = encode(value)?;
    writer.write_all(&framed).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Ping {
        n: u32,
    }

    #[test]
    fn encode_prefixes_length_big_endian() {
        let framed = encode(&Ping { n: 1 }).unwrap();
        let body = serde_json::to_vec(&Ping { n: 1 }).unwrap();
        assert_eq!(&framed[..4], &(body.len() as u32).to_be_bytes());
        assert_eq!(&framed[4..], &body[..]);
    }

    #[tokio::test]
    async fn round_trips_over_an_in_memory_duplex_stream() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        write_message(&mut client, &Ping { n: 42 }).await.unwrap();
        let received: Ping = read_message(&mut server).await.unwrap();
        assert_eq!(received, Ping { n: 42 });
    }

    #[tokio::test]
    async fn read_on_immediately_closed_stream_is_eof() {
        let (client, mut server) = tokio::io::duplex(1024);
        drop(client);
        let result: Result<Ping, _> = read_message(&mut server).await;
        assert!(matches!(result, Err(ProtocolError::Eof)));
    }

    #[tokio::test]
    async fn oversized_length_prefix_is_rejected_before_reading_body() {
        let (mut client, mut server) = tokio::io::duplex(64);
        let oversized = MAX_MESSAGE_BYTES + 1;
        client.write_all(&oversized.to_be_bytes()).await.unwrap();
        let result: Result<Ping, _> = read_message(&mut server).await;
        assert!(matches!(result, Err(ProtocolError::MessageTooLarge { len }) if len == oversized));
    }
}
