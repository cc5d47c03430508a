// ABOUTME: SMPP v3.4 message_state field, Section 5.2.28 — carried in query_sm_resp

use crate::datatypes::enum_u8::enum_u8;

enum_u8! {
    MessageState {
        Enroute = 0x01,
        Delivered = 0x02,
        Expired = 0x03,
        Deleted = 0x04,
        Undeliverable = 0x05,
        Accepted = 0x06,
        Unknown = 0x07,
        Rejected = 0x08,
    }
}
