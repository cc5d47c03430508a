// ABOUTME: SMPP v3.4 data_coding field, Section 5.2.19
// ABOUTME: identifies the character set/encoding of a short message's payload

use crate::datatypes::enum_u8::enum_u8;

enum_u8! {
    DataCoding {
        Defaults = 0x00,
        Ia5 = 0x01,
        BinaryAlias = 0x02,
        Iso8859_1 = 0x03,
        Binary = 0x04,
        Jis = 0x05,
        Iso8859_5 = 0x06,
        Iso8859_8 = 0x07,
        Ucs2 = 0x08,
        Pictogram = 0x09,
        Iso2022Jp = 0x0A,
        Kanji = 0x0D,
        Ksc5601 = 0x0E,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_round_trip() {
        assert_eq!(DataCoding::from_u8(0x7f).to_u8(), 0x7f);
    }
}
