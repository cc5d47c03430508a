// ABOUTME: cancel_sm / cancel_sm_resp — withdraws a previously submitted message, empty response body

use crate::codec::{
    CodecError, Decodable, Encodable, PduHeader, decode_c_octet_str, decode_u8, encode_c_octet_str,
    encode_u8,
};
use crate::datatypes::{CommandId, CommandStatus, MessageId, NumericPlanIndicator, ServiceType, ShortAddr, TypeOfNumber};
use crate::macros::impl_header_only_pdu;
use bytes::BytesMut;
use std::io::Cursor;

#[derive(Clone, Debug, PartialEq)]
pub struct CancelSm {
    pub sequence_number: u32,
    pub service_type: ServiceType,
    pub message_id: MessageId,
    pub source_addr_ton: TypeOfNumber,
    pub source_addr_npi: NumericPlanIndicator,
    pub source_addr: ShortAddr,
    pub dest_addr_ton: TypeOfNumber,
    pub dest_addr_npi: NumericPlanIndicator,
    pub destination_addr: ShortAddr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CancelSmResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

impl_header_only_pdu!(CancelSmResponse, CommandId::CancelSmResp);

impl Encodable for CancelSm {
    fn command_id(&self) -> CommandId {
        CommandId::CancelSm
    }
    fn command_status(&self) -> CommandStatus {
        CommandStatus::Ok
    }
    fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_c_octet_str(buf, "service_type", self.service_type.as_str_bytes(), 6)?;
        encode_c_octet_str(buf, "message_id", self.message_id.as_str_bytes(), 65)?;
        encode_u8(buf, self.source_addr_ton.to_u8());
        encode_u8(buf, self.source_addr_npi.to_u8());
        encode_c_octet_str(buf, "source_addr", self.source_addr.as_str_bytes(), 21)?;
        encode_u8(buf, self.dest_addr_ton.to_u8());
        encode_u8(buf, self.dest_addr_npi.to_u8());
        encode_c_octet_str(
            buf,
            "destination_addr",
            self.destination_addr.as_str_bytes(),
            21,
        )?;
        Ok(())
    }
}

impl Decodable for CancelSm {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let service_type = ServiceType::new(&decode_c_octet_str(cursor, "service_type", 6)?)
            .map_err(|_| CodecError::FieldTooLong {
                field: "service_type",
                max: 5,
                actual: 6,
            })?;
        let message_id = MessageId::new(&decode_c_octet_str(cursor, "message_id", 65)?).map_err(
            |_| CodecError::FieldTooLong {
                field: "message_id",
                max: 64,
                actual: 65,
            },
        )?;
        let source_addr_ton = TypeOfNumber::from_u8(decode_u8(cursor)?);
        let source_addr_npi = NumericPlanIndicator::from_u8(decode_u8(cursor)?);
        let source_addr = ShortAddr::new(&decode_c_octet_str(cursor, "source_addr", 21)?)
            .map_err(|_| CodecError::FieldTooLong {
                field: "source_addr",
                max: 20,
                actual: 21,
            })?;
        let dest_addr_ton = TypeOfNumber::from_u8(decode_u8(cursor)?);
        let dest_addr_npi = NumericPlanIndicator::from_u8(decode_u8(cursor)?);
        let destination_addr =
            ShortAddr::new(&decode_c_octet_str(cursor, "destination_addr", 21)?).map_err(|_| {
                CodecError::FieldTooLong {
                    field: "destination_addr",
                    max: 20,
                    actual: 21,
                }
            })?;
        Ok(Self {
            sequence_number: header.sequence_number,
            service_type,
            message_id,
            source_addr_ton,
            source_addr_npi,
            source_addr,
            dest_addr_ton,
            dest_addr_npi,
            destination_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let pdu = CancelSm {
            sequence_number: 11,
            service_type: "".parse().unwrap(),
            message_id: "abc-123".parse().unwrap(),
            source_addr_ton: TypeOfNumber::International,
            source_addr_npi: NumericPlanIndicator::Isdn,
            source_addr: "12025550123".parse().unwrap(),
            dest_addr_ton: TypeOfNumber::International,
            dest_addr_npi: NumericPlanIndicator::Isdn,
            destination_addr: "12025550199".parse().unwrap(),
        };
        let bytes = pdu.to_bytes().unwrap();
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let mut cursor = Cursor::new(&bytes[PduHeader::SIZE..]);
        let decoded = CancelSm::decode_body(&header, &mut cursor).unwrap();
        assert_eq!(decoded, pdu);
    }
}
