// ABOUTME: SMPP v3.4 replace_if_present_flag field, Section 5.2.31

use crate::datatypes::enum_u8::enum_u8;

enum_u8! {
    ReplaceIfPresentFlag {
        No = 0x00,
        Yes = 0x01,
    }
}
