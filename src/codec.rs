// ABOUTME: SMPP v3.4 wire codec: the 16-byte PDU header and the primitive field encoders/decoders
// ABOUTME: every PDU type builds on (c_octet_str, u8_octet_str, enum_u8, enum_flag)

use crate::datatypes::{CommandId, CommandStatus};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::io::Cursor;

/// Largest command_length this crate will accept. The protocol itself has no
/// hard ceiling; this bounds how much a single PDU can make us buffer.
pub const MAX_PDU_SIZE: usize = 64 * 1024;

/// Errors raised while encoding or decoding a single PDU's fields.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("buffer contains fewer bytes than the frame requires")]
    Truncated,
    #[error("field {field} exceeds its maximum length (max {max}, got {actual})")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("required field {field} was not present")]
    NotPresent { field: &'static str },
    #[error("command_id {0:#010x} is not a recognized SMPP command")]
    InvalidCommandId(u32),
    #[error("command_length field is inconsistent with the bytes available")]
    InvalidCommandLength,
    #[error("sequence_number 0 is reserved and may not appear on the wire")]
    ReservedSequenceNumber,
    #[error("request PDUs must carry command_status 0")]
    InvalidRequestStatus,
    #[error("field is not valid UTF-8")]
    Utf8Error,
}

/// The fixed 16-byte header every SMPP PDU begins with.
///
/// `command_id` is kept as the raw wire `u32` rather than the typed
/// `CommandId` enum: a header must decode successfully (so its
/// `command_length` is available to the caller for framing) even when the
/// id doesn't name a command this crate recognizes. Resolving it to a
/// `CommandId` — and falling back to `Pdu::InvalidPdu` when that fails — is
/// `Pdu::decode`'s job, not the header's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PduHeader {
    pub command_length: u32,
    pub command_id: u32,
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

impl PduHeader {
    pub const SIZE: usize = 16;

    /// Response PDUs carry bit 31 set in their command_id; mirrors
    /// `CommandId::is_response`, inlined here since an unrecognized raw id
    /// still needs this check.
    const RESPONSE_BIT: u32 = 0x8000_0000;

    /// Decodes a header from exactly `Self::SIZE` bytes. Does not consume
    /// `cursor`'s remaining bytes beyond the header itself. An unrecognized
    /// `command_id` is not a decode error here — only `command_length`,
    /// `sequence_number`, and the request/response status invariant are
    /// validated at this layer.
    pub fn decode(cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        if cursor.remaining() < Self::SIZE {
            return Err(CodecError::Truncated);
        }
        let command_length = cursor.get_u32();
        let command_id = cursor.get_u32();
        let raw_command_status = cursor.get_u32();
        let sequence_number = cursor.get_u32();

        if (command_length as usize) < Self::SIZE || (command_length as usize) > MAX_PDU_SIZE {
            return Err(CodecError::InvalidCommandLength);
        }
        if sequence_number == 0 {
            return Err(CodecError::ReservedSequenceNumber);
        }
        let command_status =
            CommandStatus::try_from(raw_command_status).unwrap_or(CommandStatus::UnknownError);
        if command_id & Self::RESPONSE_BIT == 0 && command_status != CommandStatus::Ok {
            return Err(CodecError::InvalidRequestStatus);
        }

        Ok(Self {
            command_length,
            command_id,
            command_status,
            sequence_number,
        })
    }

    /// Writes the header, with `command_length` fixed up by the caller once
    /// the full frame length is known (see `Encodable::to_bytes`).
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u32(self.command_length);
        buf.put_u32(self.command_id);
        buf.put_u32(self.command_status as u32);
        buf.put_u32(self.sequence_number);
    }
}

/// Implemented by every PDU body type. `encode_body` writes only the body
/// (the header is filled in by the blanket `to_bytes` helper).
pub trait Encodable {
    fn command_id(&self) -> CommandId;
    fn command_status(&self) -> CommandStatus;
    fn sequence_number(&self) -> u32;
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError>;

    /// Encodes the full frame: header followed by body, with
    /// `command_length` patched in once the total size is known.
    fn to_bytes(&self) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::with_capacity(PduHeader::SIZE);
        let header = PduHeader {
            command_length: 0,
            command_id: self.command_id() as u32,
            command_status: self.command_status(),
            sequence_number: self.sequence_number(),
        };
        header.encode(&mut buf);
        self.encode_body(&mut buf)?;

        let length = buf.len() as u32;
        buf[0..4].copy_from_slice(&length.to_be_bytes());
        Ok(buf.freeze())
    }
}

/// Implemented by every PDU body type to parse itself out of the bytes
/// following a successfully-decoded header.
pub trait Decodable: Sized {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError>;
}

// --- primitive field codecs -------------------------------------------------

pub fn encode_u8(buf: &mut BytesMut, value: u8) {
    buf.put_u8(value);
}

pub fn decode_u8(cursor: &mut Cursor<&[u8]>) -> Result<u8, CodecError> {
    if cursor.remaining() < 1 {
        return Err(CodecError::Truncated);
    }
    Ok(cursor.get_u8())
}

pub fn encode_u16(buf: &mut BytesMut, value: u16) {
    buf.put_u16(value);
}

pub fn decode_u16(cursor: &mut Cursor<&[u8]>) -> Result<u16, CodecError> {
    if cursor.remaining() < 2 {
        return Err(CodecError::Truncated);
    }
    Ok(cursor.get_u16())
}

pub fn encode_u32(buf: &mut BytesMut, value: u32) {
    buf.put_u32(value);
}

pub fn decode_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32, CodecError> {
    if cursor.remaining() < 4 {
        return Err(CodecError::Truncated);
    }
    Ok(cursor.get_u32())
}

/// Encodes a NUL-terminated string field whose wire representation (content
/// plus terminator) must fit in `max_len` bytes.
pub fn encode_c_octet_str(
    buf: &mut BytesMut,
    field: &'static str,
    value: &[u8],
    max_len: usize,
) -> Result<(), CodecError> {
    if value.len() >= max_len {
        return Err(CodecError::FieldTooLong {
            field,
            max: max_len - 1,
            actual: value.len(),
        });
    }
    buf.extend_from_slice(value);
    buf.put_u8(0);
    Ok(())
}

/// Decodes a NUL-terminated string field, rejecting content that would not
/// have fit in `max_len` bytes including the terminator.
pub fn decode_c_octet_str(
    cursor: &mut Cursor<&[u8]>,
    field: &'static str,
    max_len: usize,
) -> Result<Vec<u8>, CodecError> {
    let remaining = cursor.chunk();
    let nul_pos = remaining
        .iter()
        .position(|&b| b == 0)
        .ok_or(CodecError::Truncated)?;
    if nul_pos >= max_len {
        return Err(CodecError::FieldTooLong {
            field,
            max: max_len - 1,
            actual: nul_pos,
        });
    }
    let content = remaining[..nul_pos].to_vec();
    cursor.advance(nul_pos + 1);
    Ok(content)
}

/// Encodes a length-prefixed (one byte) string field, at most `max_len`
/// content bytes.
pub fn encode_u8_octet_str(
    buf: &mut BytesMut,
    field: &'static str,
    value: &[u8],
    max_len: usize,
) -> Result<(), CodecError> {
    if value.len() > max_len {
        return Err(CodecError::FieldTooLong {
            field,
            max: max_len,
            actual: value.len(),
        });
    }
    buf.put_u8(value.len() as u8);
    buf.extend_from_slice(value);
    Ok(())
}

/// Decodes a length-prefixed (one byte) string field.
pub fn decode_u8_octet_str(
    cursor: &mut Cursor<&[u8]>,
    field: &'static str,
    max_len: usize,
) -> Result<Vec<u8>, CodecError> {
    let len = decode_u8(cursor)? as usize;
    if len > max_len {
        return Err(CodecError::FieldTooLong {
            field,
            max: max_len,
            actual: len,
        });
    }
    if cursor.remaining() < len {
        return Err(CodecError::Truncated);
    }
    let mut content = vec![0u8; len];
    cursor.copy_to_slice(&mut content);
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trip() {
        let header = PduHeader {
            command_length: 16,
            command_id: CommandId::EnquireLink as u32,
            command_status: CommandStatus::Ok,
            sequence_number: 42,
        };
        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        let bytes = buf.freeze();
        let mut cursor = Cursor::new(&bytes[..]);
        let decoded = PduHeader::decode(&mut cursor).unwrap();
        assert_eq!(header, decoded);
    }

    #[test]
    fn header_decode_accepts_unrecognized_command_id() {
        // An id framing doesn't recognize must still decode: command_length
        // is the caller's only way to skip the frame and keep the stream in
        // sync, so the header can't fail just because the id is unknown.
        let mut buf = BytesMut::new();
        buf.put_u32(16);
        buf.put_u32(0x0000_00F0);
        buf.put_u32(0);
        buf.put_u32(7);
        let bytes = buf.freeze();
        let mut cursor = Cursor::new(&bytes[..]);
        let header = PduHeader::decode(&mut cursor).unwrap();
        assert_eq!(header.command_id, 0x0000_00F0);
        assert_eq!(header.sequence_number, 7);
    }

    #[test]
    fn header_rejects_reserved_sequence_number() {
        let mut buf = BytesMut::new();
        buf.put_u32(16);
        buf.put_u32(CommandId::EnquireLink as u32);
        buf.put_u32(0);
        buf.put_u32(0);
        let bytes = buf.freeze();
        let mut cursor = Cursor::new(&bytes[..]);
        assert_eq!(
            PduHeader::decode(&mut cursor),
            Err(CodecError::ReservedSequenceNumber)
        );
    }

    #[test]
    fn header_rejects_bad_status_on_request() {
        let mut buf = BytesMut::new();
        buf.put_u32(16);
        buf.put_u32(CommandId::EnquireLink as u32);
        buf.put_u32(CommandStatus::SystemError as u32);
        buf.put_u32(1);
        let bytes = buf.freeze();
        let mut cursor = Cursor::new(&bytes[..]);
        assert_eq!(
            PduHeader::decode(&mut cursor),
            Err(CodecError::InvalidRequestStatus)
        );
    }

    #[test]
    fn c_octet_str_round_trip() {
        let mut buf = BytesMut::new();
        encode_c_octet_str(&mut buf, "system_id", b"hello", 16).unwrap();
        let bytes = buf.freeze();
        let mut cursor = Cursor::new(&bytes[..]);
        let decoded = decode_c_octet_str(&mut cursor, "system_id", 16).unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn c_octet_str_enforces_max_len_boundary() {
        let mut buf = BytesMut::new();
        // exactly max_len - 1 content bytes is fine
        assert!(encode_c_octet_str(&mut buf, "f", &[b'a'; 15], 16).is_ok());
        let mut buf2 = BytesMut::new();
        // max_len content bytes must be rejected
        assert!(encode_c_octet_str(&mut buf2, "f", &[b'a'; 16], 16).is_err());
    }

    #[test]
    fn u8_octet_str_round_trip() {
        let mut buf = BytesMut::new();
        encode_u8_octet_str(&mut buf, "short_message", b"payload", 254).unwrap();
        let bytes = buf.freeze();
        let mut cursor = Cursor::new(&bytes[..]);
        let decoded = decode_u8_octet_str(&mut cursor, "short_message", 254).unwrap();
        assert_eq!(decoded, b"payload");
    }
}
