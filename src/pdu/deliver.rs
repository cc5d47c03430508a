// ABOUTME: deliver_sm / deliver_sm_resp — SMSC-to-ESME delivery, same shape as submit_sm
// ABOUTME: except schedule/validity and the response message_id are always empty on the wire

use crate::codec::{
    CodecError, Decodable, Encodable, PduHeader, decode_c_octet_str, decode_u8,
    decode_u8_octet_str, encode_c_octet_str, encode_u8, encode_u8_octet_str,
};
use crate::datatypes::{
    CommandId, CommandStatus, DataCoding, EmptyDateTime, EmptyMessageId, EsmClass,
    NumericPlanIndicator, PriorityFlag, RegisteredDelivery, ReplaceIfPresentFlag, ServiceType,
    ShortAddr, ShortMessage, TypeOfNumber,
};
use crate::tlv::TlvMap;
use bytes::BytesMut;
use std::io::Cursor;

#[derive(Clone, Debug, PartialEq)]
pub struct DeliverSm {
    pub sequence_number: u32,
    pub service_type: ServiceType,
    pub source_addr_ton: TypeOfNumber,
    pub source_addr_npi: NumericPlanIndicator,
    pub source_addr: ShortAddr,
    pub dest_addr_ton: TypeOfNumber,
    pub dest_addr_npi: NumericPlanIndicator,
    pub destination_addr: ShortAddr,
    pub esm_class: EsmClass,
    pub protocol_id: u8,
    pub priority_flag: PriorityFlag,
    pub schedule_delivery_time: EmptyDateTime,
    pub validity_period: EmptyDateTime,
    pub registered_delivery: RegisteredDelivery,
    pub replace_if_present_flag: ReplaceIfPresentFlag,
    pub data_coding: DataCoding,
    pub sm_default_msg_id: u8,
    pub short_message: ShortMessage,
    pub tlv: TlvMap,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeliverSmResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
    pub message_id: EmptyMessageId,
}

impl Encodable for DeliverSm {
    fn command_id(&self) -> CommandId {
        CommandId::DeliverSm
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
        encode_c_octet_str(buf, "source_addr", self.source_addr.as_str_bytes(), 21)?;
        encode_u8(buf, self.dest_addr_ton.to_u8());
        encode_u8(buf, self.dest_addr_npi.to_u8());
        encode_c_octet_str(
            buf,
            "destination_addr",
            self.destination_addr.as_str_bytes(),
            21,
        )?;
        encode_u8(buf, self.esm_class.to_u8());
        encode_u8(buf, self.protocol_id);
        encode_u8(buf, self.priority_flag.to_u8());
        encode_c_octet_str(
            buf,
            "schedule_delivery_time",
            self.schedule_delivery_time.as_str_bytes(),
            1,
        )?;
        encode_c_octet_str(
            buf,
            "validity_period",
            self.validity_period.as_str_bytes(),
            1,
        )?;
        encode_u8(buf, self.registered_delivery.to_u8());
        encode_u8(buf, self.replace_if_present_flag.to_u8());
        encode_u8(buf, self.data_coding.to_u8());
        encode_u8(buf, self.sm_default_msg_id);
        encode_u8_octet_str(buf, "short_message", self.short_message.as_bytes(), 254)?;
        self.tlv.encode(buf);
        Ok(())
    }
}

impl Decodable for DeliverSm {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let service_type = ServiceType::new(&decode_c_octet_str(cursor, "service_type", 6)?)
            .map_err(|_| CodecError::FieldTooLong {
                field: "service_type",
                max: 5,
                actual: 6,
            })?;
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
        let esm_class = EsmClass::from_u8(decode_u8(cursor)?);
        let protocol_id = decode_u8(cursor)?;
        let priority_flag = PriorityFlag::from_u8(decode_u8(cursor)?);
        let schedule_delivery_time = EmptyDateTime::new(&decode_c_octet_str(
            cursor,
            "schedule_delivery_time",
            1,
        )?)
        .map_err(|_| CodecError::FieldTooLong {
            field: "schedule_delivery_time",
            max: 0,
            actual: 1,
        })?;
        let validity_period =
            EmptyDateTime::new(&decode_c_octet_str(cursor, "validity_period", 1)?).map_err(
                |_| CodecError::FieldTooLong {
                    field: "validity_period",
                    max: 0,
                    actual: 1,
                },
            )?;
        let registered_delivery = RegisteredDelivery::from_u8(decode_u8(cursor)?);
        let replace_if_present_flag = ReplaceIfPresentFlag::from_u8(decode_u8(cursor)?);
        let data_coding = DataCoding::from_u8(decode_u8(cursor)?);
        let sm_default_msg_id = decode_u8(cursor)?;
        let short_message =
            ShortMessage::new(&decode_u8_octet_str(cursor, "short_message", 254)?).map_err(
                |_| CodecError::FieldTooLong {
                    field: "short_message",
                    max: 254,
                    actual: 255,
                },
            )?;
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
            protocol_id,
            priority_flag,
            schedule_delivery_time,
            validity_period,
            registered_delivery,
            replace_if_present_flag,
            data_coding,
            sm_default_msg_id,
            short_message,
            tlv,
        })
    }
}

impl Encodable for DeliverSmResponse {
    fn command_id(&self) -> CommandId {
        CommandId::DeliverSmResp
    }
    fn command_status(&self) -> CommandStatus {
        self.command_status
    }
    fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_c_octet_str(buf, "message_id", self.message_id.as_str_bytes(), 1)
    }
}

impl Decodable for DeliverSmResponse {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let message_id = EmptyMessageId::new(&decode_c_octet_str(cursor, "message_id", 1)?)
            .map_err(|_| CodecError::FieldTooLong {
                field: "message_id",
                max: 0,
                actual: 1,
            })?;
        Ok(Self {
            command_status: header.command_status,
            sequence_number: header.sequence_number,
            message_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let pdu = DeliverSm {
            sequence_number: 9,
            service_type: "".parse().unwrap(),
            source_addr_ton: TypeOfNumber::International,
            source_addr_npi: NumericPlanIndicator::Isdn,
            source_addr: "12025550123".parse().unwrap(),
            dest_addr_ton: TypeOfNumber::International,
            dest_addr_npi: NumericPlanIndicator::Isdn,
            destination_addr: "12025550199".parse().unwrap(),
            esm_class: EsmClass::default(),
            protocol_id: 0,
            priority_flag: PriorityFlag::Level0,
            schedule_delivery_time: "".parse().unwrap(),
            validity_period: "".parse().unwrap(),
            registered_delivery: RegisteredDelivery::default(),
            replace_if_present_flag: ReplaceIfPresentFlag::No,
            data_coding: DataCoding::Defaults,
            sm_default_msg_id: 0,
            short_message: "hi".parse().unwrap(),
            tlv: TlvMap::new(),
        };
        let bytes = pdu.to_bytes().unwrap();
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let mut cursor = Cursor::new(&bytes[PduHeader::SIZE..]);
        let decoded = DeliverSm::decode_body(&header, &mut cursor).unwrap();
        assert_eq!(decoded, pdu);
    }
}
