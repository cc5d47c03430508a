// ABOUTME: SMPP v3.4 priority_flag field, Section 5.2.20
// ABOUTME: message priority; exact meaning of levels 1-3 depends on the underlying network

use crate::datatypes::enum_u8::enum_u8;

enum_u8! {
    /// Four priority levels (0 = lowest). GSM only distinguishes
    /// non-priority (0) from priority (1); ANSI-136 and IS-95 networks use
    /// all four levels.
    PriorityFlag {
        Level0 = 0x00,
        Level1 = 0x01,
        Level2 = 0x02,
        Level3 = 0x03,
    }
}
