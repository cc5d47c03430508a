// ABOUTME: bind_transmitter/bind_receiver/bind_transceiver (+ _resp) and outbind
// ABOUTME: the three bind requests share one wire shape; generated via a local macro

use crate::codec::{
    CodecError, Decodable, Encodable, PduHeader, decode_c_octet_str, decode_u8,
    encode_c_octet_str, encode_u8,
};
use crate::datatypes::{
    AddressRange, CommandId, CommandStatus, InterfaceVersion, NumericPlanIndicator, Password,
    SystemId, SystemType, TypeOfNumber,
};
use crate::tlv::TlvMap;
use bytes::BytesMut;
use std::io::Cursor;

macro_rules! bind_pdu {
    ($request:ident, $response:ident, $command_id:expr, $resp_command_id:expr) => {
        #[derive(Clone, Debug, PartialEq)]
        pub struct $request {
            pub sequence_number: u32,
            pub system_id: SystemId,
            pub password: Password,
            pub system_type: SystemType,
            pub interface_version: InterfaceVersion,
            pub addr_ton: TypeOfNumber,
            pub addr_npi: NumericPlanIndicator,
            pub address_range: AddressRange,
        }

        #[derive(Clone, Debug, PartialEq)]
        pub struct $response {
            pub command_status: CommandStatus,
            pub sequence_number: u32,
            pub system_id: SystemId,
            pub tlv: TlvMap,
        }

        impl Encodable for $request {
            fn command_id(&self) -> CommandId {
                $command_id
            }
            fn command_status(&self) -> CommandStatus {
                CommandStatus::Ok
            }
            fn sequence_number(&self) -> u32 {
                self.sequence_number
            }
            fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
                encode_c_octet_str(buf, "system_id", self.system_id.as_str_bytes(), 16)?;
                encode_c_octet_str(buf, "password", self.password.as_str_bytes(), 9)?;
                encode_c_octet_str(buf, "system_type", self.system_type.as_str_bytes(), 13)?;
                encode_u8(buf, self.interface_version.to_u8());
                encode_u8(buf, self.addr_ton.to_u8());
                encode_u8(buf, self.addr_npi.to_u8());
                encode_c_octet_str(buf, "address_range", self.address_range.as_str_bytes(), 41)?;
                Ok(())
            }
        }

        impl Decodable for $request {
            fn decode_body(
                header: &PduHeader,
                cursor: &mut Cursor<&[u8]>,
            ) -> Result<Self, CodecError> {
                let system_id = SystemId::new(&decode_c_octet_str(cursor, "system_id", 16)?)
                    .map_err(|_| CodecError::FieldTooLong {
                        field: "system_id",
                        max: 15,
                        actual: 16,
                    })?;
                let password = Password::new(&decode_c_octet_str(cursor, "password", 9)?)
                    .map_err(|_| CodecError::FieldTooLong {
                        field: "password",
                        max: 8,
                        actual: 9,
                    })?;
                let system_type =
                    SystemType::new(&decode_c_octet_str(cursor, "system_type", 13)?).map_err(
                        |_| CodecError::FieldTooLong {
                            field: "system_type",
                            max: 12,
                            actual: 13,
                        },
                    )?;
                let interface_version = InterfaceVersion::from_u8(decode_u8(cursor)?);
                let addr_ton = TypeOfNumber::from_u8(decode_u8(cursor)?);
                let addr_npi = NumericPlanIndicator::from_u8(decode_u8(cursor)?);
                let address_range = AddressRange::new(&decode_c_octet_str(
                    cursor,
                    "address_range",
                    41,
                )?)
                .map_err(|_| CodecError::FieldTooLong {
                    field: "address_range",
                    max: 40,
                    actual: 41,
                })?;
                Ok(Self {
                    sequence_number: header.sequence_number,
                    system_id,
                    password,
                    system_type,
                    interface_version,
                    addr_ton,
                    addr_npi,
                    address_range,
                })
            }
        }

        impl Encodable for $response {
            fn command_id(&self) -> CommandId {
                $resp_command_id
            }
            fn command_status(&self) -> CommandStatus {
                self.command_status
            }
            fn sequence_number(&self) -> u32 {
                self.sequence_number
            }
            fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
                encode_c_octet_str(buf, "system_id", self.system_id.as_str_bytes(), 16)?;
                self.tlv.encode(buf);
                Ok(())
            }
        }

        impl Decodable for $response {
            fn decode_body(
                header: &PduHeader,
                cursor: &mut Cursor<&[u8]>,
            ) -> Result<Self, CodecError> {
                let system_id = SystemId::new(&decode_c_octet_str(cursor, "system_id", 16)?)
                    .map_err(|_| CodecError::FieldTooLong {
                        field: "system_id",
                        max: 15,
                        actual: 16,
                    })?;
                let tlv = TlvMap::decode(cursor)?;
                Ok(Self {
                    command_status: header.command_status,
                    sequence_number: header.sequence_number,
                    system_id,
                    tlv,
                })
            }
        }
    };
}

bind_pdu!(
    BindTransmitter,
    BindTransmitterResponse,
    CommandId::BindTransmitter,
    CommandId::BindTransmitterResp
);
bind_pdu!(
    BindReceiver,
    BindReceiverResponse,
    CommandId::BindReceiver,
    CommandId::BindReceiverResp
);
bind_pdu!(
    BindTransceiver,
    BindTransceiverResponse,
    CommandId::BindTransceiver,
    CommandId::BindTransceiverResp
);

/// SMSC-initiated request that an ESME bind back to it. Unlike the bind
/// requests above, outbind carries no optional parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Outbind {
    pub sequence_number: u32,
    pub system_id: SystemId,
    pub password: Password,
}

impl Encodable for Outbind {
    fn command_id(&self) -> CommandId {
        CommandId::Outbind
    }
    fn command_status(&self) -> CommandStatus {
        CommandStatus::Ok
    }
    fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_c_octet_str(buf, "system_id", self.system_id.as_str_bytes(), 16)?;
        encode_c_octet_str(buf, "password", self.password.as_str_bytes(), 9)?;
        Ok(())
    }
}

impl Decodable for Outbind {
    fn decode_body(header: &PduHeader, cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let system_id = SystemId::new(&decode_c_octet_str(cursor, "system_id", 16)?).map_err(
            |_| CodecError::FieldTooLong {
                field: "system_id",
                max: 15,
                actual: 16,
            },
        )?;
        let password = Password::new(&decode_c_octet_str(cursor, "password", 9)?).map_err(|_| {
            CodecError::FieldTooLong {
                field: "password",
                max: 8,
                actual: 9,
            }
        })?;
        Ok(Self {
            sequence_number: header.sequence_number,
            system_id,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlv::tags;

    #[test]
    fn bind_transmitter_round_trips() {
        let pdu = BindTransmitter {
            sequence_number: 1,
            system_id: "sysid".parse().unwrap(),
            password: "pass".parse().unwrap(),
            system_type: "".parse().unwrap(),
            interface_version: InterfaceVersion::SmppV34,
            addr_ton: TypeOfNumber::International,
            addr_npi: NumericPlanIndicator::Isdn,
            address_range: "".parse().unwrap(),
        };
        let bytes = pdu.to_bytes().unwrap();
        let mut cursor = Cursor::new(&bytes[PduHeader::SIZE..]);
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let decoded = BindTransmitter::decode_body(&header, &mut cursor).unwrap();
        assert_eq!(decoded, pdu);
    }

    #[test]
    fn bind_transmitter_resp_carries_tlv() {
        let mut resp = BindTransmitterResponse {
            command_status: CommandStatus::Ok,
            sequence_number: 7,
            system_id: "smsc01".parse().unwrap(),
            tlv: TlvMap::new(),
        };
        resp.tlv.set_u8(tags::SC_INTERFACE_VERSION, 0x34).unwrap();
        let bytes = resp.to_bytes().unwrap();
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let mut cursor = Cursor::new(&bytes[PduHeader::SIZE..]);
        let decoded = BindTransmitterResponse::decode_body(&header, &mut cursor).unwrap();
        assert_eq!(decoded, resp);
    }
}
