// ABOUTME: generic_nack — acknowledges receipt of a PDU this side could not process, no body

use crate::datatypes::CommandId;
use crate::datatypes::CommandStatus;
use crate::macros::impl_header_only_pdu;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericNack {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

impl_header_only_pdu!(GenericNack, CommandId::GenericNack);
