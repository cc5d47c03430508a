// ABOUTME: SMPP interface_version field, Section 5.2.26

use crate::datatypes::enum_u8::enum_u8;

enum_u8! {
    InterfaceVersion {
        SmppV33 = 0x33,
        SmppV34 = 0x34,
    }
}
