// ABOUTME: replace_sm / replace_sm_resp — replaces the body of a previously submitted message

use crate::codec::{
    CodecError, Decodable, Encodable, PduHeader, decode_c_octet_str, decode_u8,
    decode_u8_octet_str, encode_c_octet_str, encode_u8, encode_u8_octet_str,
};
use crate::datatypes::{
    CommandId, CommandStatus, MessageId, NumericPlanIndicator, RegisteredDelivery, ScheduleTime,
    ShortAddr, ShortMessage, TypeOfNumber,
};
use crate::macros::impl_header_only_pdu;
use bytes::BytesMut;
use std::io::Cursor;

#[derive(Clone, Debug, PartialEq)]
pub struct ReplaceSm {
    pub sequence_number: u32,
    pub message_id: MessageId,
    pub source_addr_ton: TypeOfNumber,
    pub source_addr_npi: NumericPlanIndicator,
    pub source_addr: ShortAddr,
    pub schedule_delivery_time: ScheduleTime,
    pub validity_period: ScheduleTime,
    pub registered_delivery: RegisteredDelivery,
    pub sm_default_msg_id: u8,
    pub short_message: ShortMessage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplaceSmResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

impl_header_only_pdu!(ReplaceSmResponse, CommandId::ReplaceSmResp);

impl Encodable for ReplaceSm {
    fn command_id(&self) -> CommandId {
        CommandId::ReplaceSm
    }
    fn command_status(&self) -> CommandStatus {
        CommandStatus::Ok
    }
    fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_c_octet_str(buf, "message_id", self.message_id.as_str_bytes(), 65)?;
        encode_u8(buf, self.source_addr_ton.to_u8());
        encode_u8(buf, self.source_addr_npi.to_u8());
        encode_c_octet_str(buf, "source_addr", self.source_addr.as_str_bytes(), 21)?;
        encode_c_octet_str(
            buf,
            "schedule_delivery_time",
            self.schedule_delivery_time.as_str_bytes(),
            17,
        )?;
        encode_c_octet_str(
            buf,
            "validity_period",
            self.validity_period.as_str_bytes(),
            17,
        )?;
        encode_u8(buf, self.registered_delivery.to_u8());
        encode_u8(buf, self.sm_default_msg_id);
        encode_u8_octet_str(buf, "short_message", self.short_message.as_bytes(), 254)?;
        Ok(())
    }
}

impl Decodable for ReplaceSm {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
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
        let schedule_delivery_time = ScheduleTime::new(&decode_c_octet_str(
            cursor,
            "schedule_delivery_time",
            17,
        )?)
        .map_err(|_| CodecError::FieldTooLong {
            field: "schedule_delivery_time",
            max: 16,
            actual: 17,
        })?;
        let validity_period =
            ScheduleTime::new(&decode_c_octet_str(cursor, "validity_period", 17)?).map_err(
                |_| CodecError::FieldTooLong {
                    field: "validity_period",
                    max: 16,
                    actual: 17,
                },
            )?;
        let registered_delivery = RegisteredDelivery::from_u8(decode_u8(cursor)?);
        let sm_default_msg_id = decode_u8(cursor)?;
        let short_message =
            ShortMessage::new(&decode_u8_octet_str(cursor, "short_message", 254)?).map_err(
                |_| CodecError::FieldTooLong {
                    field: "short_message",
                    max: 254,
                    actual: 255,
                },
            )?;
        Ok(Self {
            sequence_number: header.sequence_number,
            message_id,
            source_addr_ton,
            source_addr_npi,
            source_addr,
            schedule_delivery_time,
            validity_period,
            registered_delivery,
            sm_default_msg_id,
            short_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let pdu = ReplaceSm {
            sequence_number: 12,
            message_id: "abc-123".parse().unwrap(),
            source_addr_ton: TypeOfNumber::International,
            source_addr_npi: NumericPlanIndicator::Isdn,
            source_addr: "12025550123".parse().unwrap(),
            schedule_delivery_time: "".parse().unwrap(),
            validity_period: "".parse().unwrap(),
            registered_delivery: RegisteredDelivery::default(),
            sm_default_msg_id: 0,
            short_message: "updated".parse().unwrap(),
        };
        let bytes = pdu.to_bytes().unwrap();
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let mut cursor = Cursor::new(&bytes[PduHeader::SIZE..]);
        let decoded = ReplaceSm::decode_body(&header, &mut cursor).unwrap();
        assert_eq!(decoded, pdu);
    }
}
