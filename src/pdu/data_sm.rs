// ABOUTME: data_sm / data_sm_resp — interactive/real-time message exchange, all variable
// ABOUTME: content carried in optional parameters rather than the fixed short_message field

use crate::codec::{
    CodecError, Decodable, Encodable, PduHeader, decode_c_octet_str, decode_u8, encode_c_octet_str,
    encode_u8,
};
use crate::datatypes::{
    CommandId, CommandStatus, DataCoding, EsmClass, LongAddr, MessageId, NumericPlanIndicator,
    RegisteredDelivery, TypeOfNumber,
};
use crate::tlv::TlvMap;
use bytes::BytesMut;
use std::io::Cursor;

#[derive(Clone, Debug, PartialEq)]
pub struct DataSm {
    pub sequence_number: u32,
    pub service_type: crate::datatypes::ServiceType,
    pub source_addr_ton: TypeOfNumber,
    pub source_addr_npi: NumericPlanIndicator,
    pub source_addr: LongAddr,
    pub dest_addr_ton: TypeOfNumber,
    pub dest_addr_npi: NumericPlanIndicator,
    pub destination_addr: LongAddr,
    pub esm_class: EsmClass,
    pub registered_delivery: RegisteredDelivery,
    pub data_coding: DataCoding,
    pub tlv: TlvMap,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataSmResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
    pub message_id: MessageId,
    pub tlv: TlvMap,
}

impl Encodable for DataSm {
    fn command_id(&self) -> CommandId {
        CommandId::DataSm
    }
    fn command_status(&self) -> CommandStatus {
        CommandStatus::Ok
    }
    fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_c_octet_str(buf, "service_type", self.service_type.as_str_bytes(), 6)?;
        encode_u8(buf, self.source_addr_ton.to_u8());
        encode_u8(buf, self.source_addr_npi.to_u8());
        encode_c_octet_str(buf, "source_addr", self.source_addr.as_str_bytes(), 65)?;
        encode_u8(buf, self.dest_addr_ton.to_u8());
        encode_u8(buf, self.dest_addr_npi.to_u8());
        encode_c_octet_str(
            buf,
            "destination_addr",
            self.destination_addr.as_str_bytes(),
            65,
        )?;
        encode_u8(buf, self.esm_class.to_u8());
        encode_u8(buf, self.registered_delivery.to_u8());
        encode_u8(buf, self.data_coding.to_u8());
        self.tlv.encode(buf);
        Ok(())
    }
}

impl Decodable for DataSm {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let service_type = crate::datatypes::ServiceType::new(&decode_c_octet_str(
            cursor,
            "service_type",
            6,
        )?)
        .map_err(|_| CodecError::FieldTooLong {
            field: "service_type",
            max: 5,
            actual: 6,
        })?;
        let source_addr_ton = TypeOfNumber::from_u8(decode_u8(cursor)?);
        let source_addr_npi = NumericPlanIndicator::from_u8(decode_u8(cursor)?);
        let source_addr = LongAddr::new(&decode_c_octet_str(cursor, "source_addr", 65)?)
            .map_err(|_| CodecError::FieldTooLong {
                field: "source_addr",
                max: 64,
                actual: 65,
            })?;
        let dest_addr_ton = TypeOfNumber::from_u8(decode_u8(cursor)?);
        let dest_addr_npi = NumericPlanIndicator::from_u8(decode_u8(cursor)?);
        let destination_addr =
            LongAddr::new(&decode_c_octet_str(cursor, "destination_addr", 65)?).map_err(|_| {
                CodecError::FieldTooLong {
                    field: "destination_addr",
                    max: 64,
                    actual: 65,
                }
            })?;
        let esm_class = EsmClass::from_u8(decode_u8(cursor)?);
        let registered_delivery = RegisteredDelivery::from_u8(decode_u8(cursor)?);
        let data_coding = DataCoding::from_u8(decode_u8(cursor)?);
        let tlv = TlvMap::decode(cursor)?;
        Ok(Self {
            sequence_number: header.sequence_number,
            service_type,
            source_addr_ton,
            source_addr_npi,
            source_addr,
            dest_addr_ton,
            dest_addr_npi,
            destination_addr,
            esm_class,
            registered_delivery,
            data_coding,
            tlv,
        })
    }
}

impl Encodable for DataSmResponse {
    fn command_id(&self) -> CommandId {
        CommandId::DataSmResp
    }
    fn command_status(&self) -> CommandStatus {
        self.command_status
    }
    fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_c_octet_str(buf, "message_id", self.message_id.as_str_bytes(), 65)?;
        self.tlv.encode(buf);
        Ok(())
    }
}

impl Decodable for DataSmResponse {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let message_id = MessageId::new(&decode_c_octet_str(cursor, "message_id", 65)?).map_err(
            |_| CodecError::FieldTooLong {
                field: "message_id",
                max: 64,
                actual: 65,
            },
        )?;
        let tlv = TlvMap::decode(cursor)?;
        Ok(Self {
            command_status: header.command_status,
            sequence_number: header.sequence_number,
            message_id,
            tlv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlv::tags;

    #[test]
    fn round_trips_with_tlv() {
        let mut pdu = DataSm {
            sequence_number: 30,
            service_type: "".parse().unwrap(),
            source_addr_ton: TypeOfNumber::International,
            source_addr_npi: NumericPlanIndicator::Isdn,
            source_addr: "12025550123".parse().unwrap(),
            dest_addr_ton: TypeOfNumber::International,
            dest_addr_npi: NumericPlanIndicator::Isdn,
            destination_addr: "12025550199".parse().unwrap(),
            esm_class: EsmClass::default(),
            registered_delivery: RegisteredDelivery::default(),
            data_coding: DataCoding::Defaults,
            tlv: TlvMap::new(),
        };
        pdu.tlv.set_string(tags::MESSAGE_PAYLOAD, "hello").unwrap();
        let bytes = pdu.to_bytes().unwrap();
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let mut cursor = Cursor::new(&bytes[PduHeader::SIZE..]);
        let decoded = DataSm::decode_body(&header, &mut cursor).unwrap();
        assert_eq!(decoded, pdu);
    }
}
