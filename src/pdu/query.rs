// ABOUTME: query_sm / query_sm_resp — ESME polls the SMSC for a previously submitted message's state

use crate::codec::{
    CodecError, Decodable, Encodable, PduHeader, decode_c_octet_str, decode_u8, encode_c_octet_str,
    encode_u8,
};
use crate::datatypes::{
    CommandId, CommandStatus, MessageId, MessageState, NumericPlanIndicator, ScheduleTime,
    ShortAddr, TypeOfNumber,
};
use bytes::BytesMut;
use std::io::Cursor;

#[derive(Clone, Debug, PartialEq)]
pub struct QuerySm {
    pub sequence_number: u32,
    pub message_id: MessageId,
    pub source_addr_ton: TypeOfNumber,
    pub source_addr_npi: NumericPlanIndicator,
    pub source_addr: ShortAddr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuerySmResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
    pub message_id: MessageId,
    pub final_date: ScheduleTime,
    pub message_state: MessageState,
    pub error_code: u8,
}

impl Encodable for QuerySm {
    fn command_id(&self) -> CommandId {
        CommandId::QuerySm
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
        Ok(())
    }
}

impl Decodable for QuerySm {
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
        Ok(Self {
            sequence_number: header.sequence_number,
            message_id,
            source_addr_ton,
            source_addr_npi,
            source_addr,
        })
    }
}

impl Encodable for QuerySmResponse {
    fn command_id(&self) -> CommandId {
        CommandId::QuerySmResp
    }
    fn command_status(&self) -> CommandStatus {
        self.command_status
    }
    fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_c_octet_str(buf, "message_id", self.message_id.as_str_bytes(), 65)?;
        encode_c_octet_str(buf, "final_date", self.final_date.as_str_bytes(), 17)?;
        encode_u8(buf, self.message_state.to_u8());
        encode_u8(buf, self.error_code);
        Ok(())
    }
}

impl Decodable for QuerySmResponse {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let message_id = MessageId::new(&decode_c_octet_str(cursor, "message_id", 65)?).map_err(
            |_| CodecError::FieldTooLong {
                field: "message_id",
                max: 64,
                actual: 65,
            },
        )?;
        let final_date = ScheduleTime::new(&decode_c_octet_str(cursor, "final_date", 17)?)
            .map_err(|_| CodecError::FieldTooLong {
                field: "final_date",
                max: 16,
                actual: 17,
            })?;
        let message_state = MessageState::from_u8(decode_u8(cursor)?);
        let error_code = decode_u8(cursor)?;
        Ok(Self {
            command_status: header.command_status,
            sequence_number: header.sequence_number,
            message_id,
            final_date,
            message_state,
            error_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let pdu = QuerySm {
            sequence_number: 3,
            message_id: "abc-123".parse().unwrap(),
            source_addr_ton: TypeOfNumber::International,
            source_addr_npi: NumericPlanIndicator::Isdn,
            source_addr: "12025550123".parse().unwrap(),
        };
        let bytes = pdu.to_bytes().unwrap();
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let mut cursor = Cursor::new(&bytes[PduHeader::SIZE..]);
        let decoded = QuerySm::decode_body(&header, &mut cursor).unwrap();
        assert_eq!(decoded, pdu);
    }

    #[test]
    fn response_round_trips() {
        let resp = QuerySmResponse {
            command_status: CommandStatus::Ok,
            sequence_number: 3,
            message_id: "abc-123".parse().unwrap(),
            final_date: "".parse().unwrap(),
            message_state: MessageState::Delivered,
            error_code: 0,
        };
        let bytes = resp.to_bytes().unwrap();
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let mut cursor = Cursor::new(&bytes[PduHeader::SIZE..]);
        let decoded = QuerySmResponse::decode_body(&header, &mut cursor).unwrap();
        assert_eq!(decoded, resp);
    }
}
