// ABOUTME: Ordered map of SMPP optional (TLV) parameters shared by every PDU that carries them
// ABOUTME: tags module carries the full SMPP v3.4 optional-parameter tag catalog

use crate::codec::CodecError;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::collections::BTreeMap;
use std::io::Cursor;

/// SMPP v3.4 optional parameter tags (Section 5.3.2 of the spec).
pub mod tags {
    pub const DEST_ADDR_SUBUNIT: u16 = 0x0005;
    pub const DEST_NETWORK_TYPE: u16 = 0x0006;
    pub const DEST_BEARER_TYPE: u16 = 0x0007;
    pub const DEST_TELEMATICS_ID: u16 = 0x0008;
    pub const SOURCE_ADDR_SUBUNIT: u16 = 0x000d;
    pub const SOURCE_NETWORK_TYPE: u16 = 0x000e;
    pub const SOURCE_BEARER_TYPE: u16 = 0x000f;
    pub const SOURCE_TELEMATICS_ID: u16 = 0x0010;
    pub const QOS_TIME_TO_LIVE: u16 = 0x0017;
    pub const PAYLOAD_TYPE: u16 = 0x0019;
    pub const ADDITIONAL_STATUS_INFO_TEXT: u16 = 0x001d;
    pub const RECEIPTED_MESSAGE_ID: u16 = 0x001e;
    pub const MS_MSG_WAIT_FACILITIES: u16 = 0x0030;
    pub const PRIVACY_INDICATOR: u16 = 0x0201;
    pub const SOURCE_SUBADDRESS: u16 = 0x0202;
    pub const DEST_SUBADDRESS: u16 = 0x0203;
    pub const USER_MESSAGE_REFERENCE: u16 = 0x0204;
    pub const USER_RESPONSE_CODE: u16 = 0x0205;
    pub const SOURCE_PORT: u16 = 0x020a;
    pub const DESTINATION_PORT: u16 = 0x020b;
    pub const SAR_MSG_REF_NUM: u16 = 0x020c;
    pub const LANGUAGE_INDICATOR: u16 = 0x020d;
    pub const SAR_TOTAL_SEGMENTS: u16 = 0x020e;
    pub const SAR_SEGMENT_SEQNUM: u16 = 0x020f;
    pub const SC_INTERFACE_VERSION: u16 = 0x0210;
    pub const CALLBACK_NUM_PRES_IND: u16 = 0x0302;
    pub const CALLBACK_NUM_ATAG: u16 = 0x0303;
    pub const NUMBER_OF_MESSAGES: u16 = 0x0304;
    pub const CALLBACK_NUM: u16 = 0x0381;
    pub const DPF_RESULT: u16 = 0x0420;
    pub const SET_DPF: u16 = 0x0421;
    pub const MS_AVAILABILITY_STATUS: u16 = 0x0422;
    pub const NETWORK_ERROR_CODE: u16 = 0x0423;
    pub const MESSAGE_PAYLOAD: u16 = 0x0424;
    pub const DELIVERY_FAILURE_REASON: u16 = 0x0425;
    pub const MORE_MESSAGES_TO_SEND: u16 = 0x0426;
    pub const MESSAGE_STATE: u16 = 0x0427;
    pub const USSD_SERVICE_OP: u16 = 0x0501;
    pub const DISPLAY_TIME: u16 = 0x1201;
    pub const SMS_SIGNAL: u16 = 0x1203;
    pub const MS_VALIDITY: u16 = 0x1204;
    pub const ALERT_ON_MESSAGE_DELIVERY: u16 = 0x130c;
    pub const ITS_REPLY_TYPE: u16 = 0x1380;
    pub const ITS_SESSION_INFO: u16 = 0x1383;
}

/// An ordered tag -> value map of SMPP optional parameters, consuming the
/// remainder of a PDU body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TlvMap {
    entries: BTreeMap<u16, Bytes>,
}

impl TlvMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, tag: u16) -> bool {
        self.entries.contains_key(&tag)
    }

    pub fn erase(&mut self, tag: u16) -> Option<Bytes> {
        self.entries.remove(&tag)
    }

    pub fn get(&self, tag: u16) -> Option<&Bytes> {
        self.entries.get(&tag)
    }

    pub fn set(&mut self, tag: u16, value: Bytes) -> Result<(), CodecError> {
        if value.len() > u16::MAX as usize {
            return Err(CodecError::FieldTooLong {
                field: "tlv_value",
                max: u16::MAX as usize,
                actual: value.len(),
            });
        }
        self.entries.insert(tag, value);
        Ok(())
    }

    pub fn get_string(&self, tag: u16) -> Option<Result<String, CodecError>> {
        self.entries
            .get(&tag)
            .map(|v| String::from_utf8(v.to_vec()).map_err(|_| CodecError::Utf8Error))
    }

    pub fn set_string(&mut self, tag: u16, value: &str) -> Result<(), CodecError> {
        self.set(tag, Bytes::copy_from_slice(value.as_bytes()))
    }

    pub fn get_u8(&self, tag: u16) -> Option<u8> {
        self.entries.get(&tag).and_then(|v| v.first().copied())
    }

    pub fn set_u8(&mut self, tag: u16, value: u8) -> Result<(), CodecError> {
        self.set(tag, Bytes::copy_from_slice(&[value]))
    }

    pub fn get_u16(&self, tag: u16) -> Option<u16> {
        self.entries.get(&tag).and_then(|v| {
            if v.len() >= 2 {
                Some(u16::from_be_bytes([v[0], v[1]]))
            } else {
                None
            }
        })
    }

    pub fn set_u16(&mut self, tag: u16, value: u16) -> Result<(), CodecError> {
        self.set(tag, Bytes::copy_from_slice(&value.to_be_bytes()))
    }

    /// Encodes every entry in ascending tag order, matching the reference
    /// implementation's map-backed iteration.
    pub fn encode(&self, buf: &mut BytesMut) {
        for (&tag, value) in &self.entries {
            buf.put_u16(tag);
            buf.put_u16(value.len() as u16);
            buf.extend_from_slice(value);
        }
    }

    /// Consumes the remainder of `cursor` as a sequence of TLV entries.
    pub fn decode(cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let mut entries = BTreeMap::new();
        while cursor.remaining() >= 4 {
            let tag = cursor.get_u16();
            let length = cursor.get_u16() as usize;
            if cursor.remaining() < length {
                return Err(CodecError::Truncated);
            }
            let value = cursor.copy_to_bytes(length);
            entries.insert(tag, value);
        }
        if cursor.has_remaining() {
            return Err(CodecError::Truncated);
        }
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_entries_in_ascending_tag_order() {
        let mut map = TlvMap::new();
        map.set_u8(tags::MORE_MESSAGES_TO_SEND, 1).unwrap();
        map.set_string(tags::RECEIPTED_MESSAGE_ID, "abc123").unwrap();

        let mut buf = BytesMut::new();
        map.encode(&mut buf);
        let bytes = buf.freeze();
        let mut cursor = Cursor::new(&bytes[..]);
        let decoded = TlvMap::decode(&mut cursor).unwrap();

        assert_eq!(decoded.get_u8(tags::MORE_MESSAGES_TO_SEND), Some(1));
        assert_eq!(
            decoded.get_string(tags::RECEIPTED_MESSAGE_ID).unwrap().unwrap(),
            "abc123"
        );
    }

    #[test]
    fn decode_rejects_length_overrunning_buffer() {
        let mut buf = BytesMut::new();
        buf.put_u16(tags::PAYLOAD_TYPE);
        buf.put_u16(10); // claims 10 bytes but none follow
        let bytes = buf.freeze();
        let mut cursor = Cursor::new(&bytes[..]);
        assert!(TlvMap::decode(&mut cursor).is_err());
    }

    #[test]
    fn empty_map_encodes_to_nothing() {
        let map = TlvMap::new();
        let mut buf = BytesMut::new();
        map.encode(&mut buf);
        assert!(buf.is_empty());
    }
}
