// ABOUTME: Shared macro to implement Encodable/Decodable for header-only PDUs
// ABOUTME: (enquire_link, enquire_link_resp, unbind, unbind_resp, generic_nack)

/// Implements `Encodable`/`Decodable` plus `new`/`error` constructors for a
/// PDU whose wire body is empty.
macro_rules! impl_header_only_pdu {
    ($pdu_type:ident, $command_id:expr) => {
        impl $crate::codec::Encodable for $pdu_type {
            fn command_id(&self) -> $crate::datatypes::CommandId {
                $command_id
            }

            fn command_status(&self) -> $crate::datatypes::CommandStatus {
                self.command_status
            }

            fn sequence_number(&self) -> u32 {
                self.sequence_number
            }

            fn encode_body(
                &self,
                _buf: &mut bytes::BytesMut,
            ) -> Result<(), $crate::codec::CodecError> {
                Ok(())
            }
        }

        impl $crate::codec::Decodable for $pdu_type {
            fn decode_body(
                header: &$crate::codec::PduHeader,
                _cursor: &mut std::io::Cursor<&[u8]>,
            ) -> Result<Self, $crate::codec::CodecError> {
                Ok($pdu_type {
                    command_status: header.command_status,
                    sequence_number: header.sequence_number,
                })
            }
        }

        impl $pdu_type {
            pub fn new(sequence_number: u32) -> Self {
                Self {
                    command_status: $crate::datatypes::CommandStatus::Ok,
                    sequence_number,
                }
            }

            pub fn error(sequence_number: u32, status: $crate::datatypes::CommandStatus) -> Self {
                Self {
                    command_status: status,
                    sequence_number,
                }
            }
        }
    };
}

pub(crate) use impl_header_only_pdu;
