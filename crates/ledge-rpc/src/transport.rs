//! Length-prefixed framing for JSON-RPC messages.
//!
//! Each frame is a 4-byte big-endian payload length followed by the JSON
//! payload. Icons travel inline as base64, so frames are capped well below
//! anything a shelf enumeration can legitimately produce.

use bytes::{Buf, BufMut, BytesMut};
use std::io;
use tokio_util::codec::{Decoder, Encoder};

use crate::protocol::Message;

/// Maximum frame size (4 MB)
const MAX_FRAME_SIZE: usize = 4 * 1024 * 1024;

const PREFIX_SIZE: usize = 4;

/// Codec for length-prefixed JSON-RPC frames
#[derive(Debug, Default)]
pub struct WireCodec {
    pending_length: Option<usize>,
}

impl WireCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for WireCodec {
    type Item = Message;
    type Error = WireError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let length = match self.pending_length {
            Some(length) => length,
            None => {
                if src.len() < PREFIX_SIZE {
                    return Ok(None);
                }
                let length = src.get_u32() as usize;
                if length > MAX_FRAME_SIZE {
                    return Err(WireError::FrameTooLarge(length));
                }
                self.pending_length = Some(length);
                length
            }
        };

        if src.len() < length {
            src.reserve(length - src.len());
            return Ok(None);
        }

        let payload = src.split_to(length);
        self.pending_length = None;

        let message = serde_json::from_str(std::str::from_utf8(&payload)?)?;
        Ok(Some(message))
    }
}

impl Encoder<Message> for WireCodec {
    type Error = WireError;

    // Payload size is checked against MAX_FRAME_SIZE (fits in u32)
    #[allow(clippy::cast_possible_truncation)]
    fn encode(&mut self, item: Message, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let payload = serde_json::to_vec(&item)?;
        if payload.len() > MAX_FRAME_SIZE {
            return Err(WireError::FrameTooLarge(payload.len()));
        }

        dst.reserve(PREFIX_SIZE + payload.len());
        dst.put_u32(payload.len() as u32);
        dst.put_slice(&payload);
        Ok(())
    }
}

/// Errors that can occur while framing or unframing messages
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Frame too large: {0} bytes (max: {MAX_FRAME_SIZE})")]
    FrameTooLarge(usize),
}
