// ABOUTME: SMPP v3.4 Numbering Plan Indicator (NPI) field, Section 5.2.6
// ABOUTME: classifies the numbering plan used alongside Type of Number for addressing

use crate::datatypes::enum_u8::enum_u8;

enum_u8! {
    NumericPlanIndicator {
        Unknown = 0x00,
        Isdn = 0x01,
        Data = 0x03,
        Telex = 0x04,
        LandMobile = 0x06,
        National = 0x08,
        Private = 0x09,
        Ermes = 0x0a,
        Internet = 0x0e,
        WapClientId = 0x12,
    }
}
