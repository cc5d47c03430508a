// ABOUTME: synthetic PDU returned by the session layer when a body fails to decode
// ABOUTME: or the command_id is not recognized; carries the raw body for diagnostics

use crate::codec::{CodecError, Encodable};
use crate::datatypes::{CommandId, CommandStatus};
use bytes::{Bytes, BytesMut};

/// Not a real SMPP PDU type. Produced internally when a frame's header
/// decodes cleanly but its body does not, so the session can still respond
/// with `generic_nack` without losing the offending bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidPdu {
    pub command_id: u32,
    pub sequence_number: u32,
    pub error: CodecError,
    pub body: Bytes,
}

impl InvalidPdu {
    pub fn new(command_id: u32, sequence_number: u32, error: CodecError, body: Bytes) -> Self {
        Self {
            command_id,
            sequence_number,
            error,
            body,
        }
    }
}

impl Encodable for InvalidPdu {
    fn command_id(&self) -> CommandId {
        CommandId::GenericNack
    }
    fn command_status(&self) -> CommandStatus {
        CommandStatus::UnknownError
    }
    fn sequence_number(&self) -> u32 {
        self.sequence_number
    }
    fn encode_body(&self, _buf: &mut BytesMut) -> Result<(), CodecError> {
        Ok(())
    }
}
