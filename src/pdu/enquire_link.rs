// ABOUTME: enquire_link / enquire_link_resp — link-status keepalive, no body

use crate::datatypes::CommandId;
use crate::datatypes::CommandStatus;
use crate::macros::impl_header_only_pdu;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnquireLink {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnquireLinkResponse {
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

impl_header_only_pdu!(EnquireLink, CommandId::EnquireLink);
impl_header_only_pdu!(EnquireLinkResponse, CommandId::EnquireLinkResp);
