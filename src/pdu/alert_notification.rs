// ABOUTME: alert_notification — SMSC informs an ESME that a subscriber is now reachable
// ABOUTME: one-way notification, no _resp PDU exists for it (Section 4.12.1)

use crate::codec::{CodecError, Decodable, Encodable, PduHeader, decode_c_octet_str, decode_u8, encode_c_octet_str, encode_u8};
use crate::datatypes::{CommandId, CommandStatus, LongAddr, NumericPlanIndicator, TypeOfNumber};
use crate::tlv::TlvMap;
use bytes::BytesMut;
use std::io::Cursor;

#[derive(Clone, Debug, PartialEq)]
pub struct AlertNotification {
    pub sequence_number: u32,
    pub source_addr_ton: TypeOfNumber,
    pub source_addr_npi: NumericPlanIndicator,
    pub source_addr: LongAddr,
    pub esme_addr_ton: TypeOfNumber,
    pub esme_addr_npi: NumericPlanIndicator,
    pub esme_addr: LongAddr,
    pub tlv: TlvMap,
}

impl Encodable for AlertNotification {
    fn command_id(&self) -> CommandId {
        CommandId::AlertNotification
    }
    fn command_status(&self) -> CommandStatus {
        CommandStatus::Ok
    }
    fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_u8(buf, self.source_addr_ton.to_u8());
        encode_u8(buf, self.source_addr_npi.to_u8());
        encode_c_octet_str(buf, "source_addr", self.source_addr.as_str_bytes(), 65)?;
        encode_u8(buf, self.esme_addr_ton.to_u8());
        encode_u8(buf, self.esme_addr_npi.to_u8());
        encode_c_octet_str(buf, "esme_addr", self.esme_addr.as_str_bytes(), 65)?;
        self.tlv.encode(buf);
        Ok(())
    }
}

impl Decodable for AlertNotification {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let source_addr_ton = TypeOfNumber::from_u8(decode_u8(cursor)?);
        let source_addr_npi = NumericPlanIndicator::from_u8(decode_u8(cursor)?);
        let source_addr = LongAddr::new(&decode_c_octet_str(cursor, "source_addr", 65)?)
            .map_err(|_| CodecError::FieldTooLong {
                field: "source_addr",
                max: 64,
                actual: 65,
            })?;
        let esme_addr_ton = TypeOfNumber::from_u8(decode_u8(cursor)?);
        let esme_addr_npi = NumericPlanIndicator::from_u8(decode_u8(cursor)?);
        let esme_addr = LongAddr::new(&decode_c_octet_str(cursor, "esme_addr", 65)?).map_err(
            |_| CodecError::FieldTooLong {
                field: "esme_addr",
                max: 64,
                actual: 65,
            },
        )?;
        let tlv = TlvMap::decode(cursor)?;
        Ok(Self {
            sequence_number: header.sequence_number,
            source_addr_ton,
            source_addr_npi,
            source_addr,
            esme_addr_ton,
            esme_addr_npi,
            esme_addr,
            tlv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let pdu = AlertNotification {
            sequence_number: 40,
            source_addr_ton: TypeOfNumber::International,
            source_addr_npi: NumericPlanIndicator::Isdn,
            source_addr: "12025550123".parse().unwrap(),
            esme_addr_ton: TypeOfNumber::International,
            esme_addr_npi: NumericPlanIndicator::Isdn,
            esme_addr: "12025550199".parse().unwrap(),
            tlv: TlvMap::new(),
        };
        let bytes = pdu.to_bytes().unwrap();
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let mut cursor = Cursor::new(&bytes[PduHeader::SIZE..]);
        let decoded = AlertNotification::decode_body(&header, &mut cursor).unwrap();
        assert_eq!(decoded, pdu);
    }
}
