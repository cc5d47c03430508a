// ABOUTME: unbind / unbind_resp — orderly session teardown request, no body

use crate::datatypes::CommandId;
use crate::datatypes::CommandStatus;
use crate::macros::impl_header_only_pdu;

/// Deregisters the session; the sender no longer wishes to submit or
/// receive messages over this connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unbind {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnbindResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

impl_header_only_pdu!(Unbind, CommandId::Unbind);
impl_header_only_pdu!(UnbindResponse, CommandId::UnbindResp);
