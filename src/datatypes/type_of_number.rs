// ABOUTME: SMPP v3.4 Type of Number (TON) field, Section 5.2.5
// ABOUTME: classifies the address format used by source/destination/ESME addresses

use crate::datatypes::enum_u8::enum_u8;

enum_u8! {
    /// Type of Number: the address format used alongside a Numbering Plan
    /// Indicator to fully describe an address. Reserved/vendor-specific
    /// values round-trip through `Other` rather than being rejected.
    TypeOfNumber {
        Unknown = 0x00,
        International = 0x01,
        National = 0x02,
        NetworkSpecific = 0x03,
        SubscriberNumber = 0x04,
        Alphanumeric = 0x05,
        Abbreviated = 0x06,
    }
}
