// ABOUTME: Pdu enum and dispatch registry — decodes a frame's body given its already-parsed
// ABOUTME: header, routing to the PDU type registered for that command_id or InvalidPdu on failure

mod alert_notification;
mod bind;
mod cancel;
mod data_sm;
mod deliver;
mod enquire_link;
mod generic_nack;
mod invalid_pdu;
mod query;
mod replace;
mod submit;
mod submit_multi;
mod unbind;

pub use alert_notification::AlertNotification;
pub use bind::{
    BindReceiver, BindReceiverResponse, BindTransceiver, BindTransceiverResponse,
    BindTransmitter, BindTransmitterResponse, Outbind,
};
pub use cancel::{CancelSm, CancelSmResponse};
pub use data_sm::{DataSm, DataSmResponse};
pub use deliver::{DeliverSm, DeliverSmResponse};
pub use enquire_link::{EnquireLink, EnquireLinkResponse};
pub use generic_nack::GenericNack;
pub use invalid_pdu::InvalidPdu;
pub use query::{QuerySm, QuerySmResponse};
pub use replace::{ReplaceSm, ReplaceSmResponse};
pub use submit::{SubmitSm, SubmitSmResponse};
pub use submit_multi::{Destination, SubmitMulti, SubmitMultiResponse, UnsuccessSme};
pub use unbind::{Unbind, UnbindResponse};

use crate::codec::{CodecError, Decodable, Encodable, PduHeader};
use crate::datatypes::CommandId;
use bytes::{Bytes, BytesMut};
use std::io::Cursor;

/// Any SMPP PDU this crate understands, plus the synthetic `InvalidPdu`
/// fallback. One variant per type in the catalog (Section 3 of the spec).
#[derive(Clone, Debug, PartialEq)]
pub enum Pdu {
    BindReceiver(BindReceiver),
    BindReceiverResponse(BindReceiverResponse),
    BindTransmitter(BindTransmitter),
    BindTransmitterResponse(BindTransmitterResponse),
    BindTransceiver(BindTransceiver),
    BindTransceiverResponse(BindTransceiverResponse),
    Outbind(Outbind),
    Unbind(Unbind),
    UnbindResponse(UnbindResponse),
    SubmitSm(SubmitSm),
    SubmitSmResponse(SubmitSmResponse),
    DeliverSm(DeliverSm),
    DeliverSmResponse(DeliverSmResponse),
    QuerySm(QuerySm),
    QuerySmResponse(QuerySmResponse),
    CancelSm(CancelSm),
    CancelSmResponse(CancelSmResponse),
    ReplaceSm(ReplaceSm),
    ReplaceSmResponse(ReplaceSmResponse),
    SubmitMulti(SubmitMulti),
    SubmitMultiResponse(SubmitMultiResponse),
    DataSm(DataSm),
    DataSmResponse(DataSmResponse),
    AlertNotification(AlertNotification),
    EnquireLink(EnquireLink),
    EnquireLinkResponse(EnquireLinkResponse),
    GenericNack(GenericNack),
    InvalidPdu(InvalidPdu),
}

macro_rules! from_variant {
    ($ty:ident, $variant:ident) => {
        impl From<$ty> for Pdu {
            fn from(value: $ty) -> Self {
                Pdu::$variant(value)
            }
        }
    };
}

from_variant!(BindReceiver, BindReceiver);
from_variant!(BindReceiverResponse, BindReceiverResponse);
from_variant!(BindTransmitter, BindTransmitter);
from_variant!(BindTransmitterResponse, BindTransmitterResponse);
from_variant!(BindTransceiver, BindTransceiver);
from_variant!(BindTransceiverResponse, BindTransceiverResponse);
from_variant!(Outbind, Outbind);
from_variant!(Unbind, Unbind);
from_variant!(UnbindResponse, UnbindResponse);
from_variant!(SubmitSm, SubmitSm);
from_variant!(SubmitSmResponse, SubmitSmResponse);
from_variant!(DeliverSm, DeliverSm);
from_variant!(DeliverSmResponse, DeliverSmResponse);
from_variant!(QuerySm, QuerySm);
from_variant!(QuerySmResponse, QuerySmResponse);
from_variant!(CancelSm, CancelSm);
from_variant!(CancelSmResponse, CancelSmResponse);
from_variant!(ReplaceSm, ReplaceSm);
from_variant!(ReplaceSmResponse, ReplaceSmResponse);
from_variant!(SubmitMulti, SubmitMulti);
from_variant!(SubmitMultiResponse, SubmitMultiResponse);
from_variant!(DataSm, DataSm);
from_variant!(DataSmResponse, DataSmResponse);
from_variant!(AlertNotification, AlertNotification);
from_variant!(EnquireLink, EnquireLink);
from_variant!(EnquireLinkResponse, EnquireLinkResponse);
from_variant!(GenericNack, GenericNack);
from_variant!(InvalidPdu, InvalidPdu);

impl Pdu {
    pub fn sequence_number(&self) -> u32 {
        match self {
            Pdu::BindReceiver(p) => p.sequence_number,
            Pdu::BindReceiverResponse(p) => p.sequence_number,
            Pdu::BindTransmitter(p) => p.sequence_number,
            Pdu::BindTransmitterResponse(p) => p.sequence_number,
            Pdu::BindTransceiver(p) => p.sequence_number,
            Pdu::BindTransceiverResponse(p) => p.sequence_number,
            Pdu::Outbind(p) => p.sequence_number,
            Pdu::Unbind(p) => p.sequence_number,
            Pdu::UnbindResponse(p) => p.sequence_number,
            Pdu::SubmitSm(p) => p.sequence_number,
            Pdu::SubmitSmResponse(p) => p.sequence_number,
            Pdu::DeliverSm(p) => p.sequence_number,
            Pdu::DeliverSmResponse(p) => p.sequence_number,
            Pdu::QuerySm(p) => p.sequence_number,
            Pdu::QuerySmResponse(p) => p.sequence_number,
            Pdu::CancelSm(p) => p.sequence_number,
            Pdu::CancelSmResponse(p) => p.sequence_number,
            Pdu::ReplaceSm(p) => p.sequence_number,
            Pdu::ReplaceSmResponse(p) => p.sequence_number,
            Pdu::SubmitMulti(p) => p.sequence_number,
            Pdu::SubmitMultiResponse(p) => p.sequence_number,
            Pdu::DataSm(p) => p.sequence_number,
            Pdu::DataSmResponse(p) => p.sequence_number,
            Pdu::AlertNotification(p) => p.sequence_number,
            Pdu::EnquireLink(p) => p.sequence_number,
            Pdu::EnquireLinkResponse(p) => p.sequence_number,
            Pdu::GenericNack(p) => p.sequence_number,
            Pdu::InvalidPdu(p) => p.sequence_number,
        }
    }

    /// Overwrites the sequence number carried by whichever variant this
    /// holds. Used by the session layer to assign the number inside the
    /// critical section that performs the write, regardless of whatever
    /// placeholder value the caller's PDU was built with.
    pub fn set_sequence_number(&mut self, sequence_number: u32) {
        match self {
            Pdu::BindReceiver(p) => p.sequence_number = sequence_number,
            Pdu::BindReceiverResponse(p) => p.sequence_number = sequence_number,
            Pdu::BindTransmitter(p) => p.sequence_number = sequence_number,
            Pdu::BindTransmitterResponse(p) => p.sequence_number = sequence_number,
            Pdu::BindTransceiver(p) => p.sequence_number = sequence_number,
            Pdu::BindTransceiverResponse(p) => p.sequence_number = sequence_number,
            Pdu::Outbind(p) => p.sequence_number = sequence_number,
            Pdu::Unbind(p) => p.sequence_number = sequence_number,
            Pdu::UnbindResponse(p) => p.sequence_number = sequence_number,
            Pdu::SubmitSm(p) => p.sequence_number = sequence_number,
            Pdu::SubmitSmResponse(p) => p.sequence_number = sequence_number,
            Pdu::DeliverSm(p) => p.sequence_number = sequence_number,
            Pdu::DeliverSmResponse(p) => p.sequence_number = sequence_number,
            Pdu::QuerySm(p) => p.sequence_number = sequence_number,
            Pdu::QuerySmResponse(p) => p.sequence_number = sequence_number,
            Pdu::CancelSm(p) => p.sequence_number = sequence_number,
            Pdu::CancelSmResponse(p) => p.sequence_number = sequence_number,
            Pdu::ReplaceSm(p) => p.sequence_number = sequence_number,
            Pdu::ReplaceSmResponse(p) => p.sequence_number = sequence_number,
            Pdu::SubmitMulti(p) => p.sequence_number = sequence_number,
            Pdu::SubmitMultiResponse(p) => p.sequence_number = sequence_number,
            Pdu::DataSm(p) => p.sequence_number = sequence_number,
            Pdu::DataSmResponse(p) => p.sequence_number = sequence_number,
            Pdu::AlertNotification(p) => p.sequence_number = sequence_number,
            Pdu::EnquireLink(p) => p.sequence_number = sequence_number,
            Pdu::EnquireLinkResponse(p) => p.sequence_number = sequence_number,
            Pdu::GenericNack(p) => p.sequence_number = sequence_number,
            Pdu::InvalidPdu(p) => p.sequence_number = sequence_number,
        }
    }

    pub fn command_id(&self) -> CommandId {
        match self {
            Pdu::BindReceiver(p) => p.command_id(),
            Pdu::BindReceiverResponse(p) => p.command_id(),
            Pdu::BindTransmitter(p) => p.command_id(),
            Pdu::BindTransmitterResponse(p) => p.command_id(),
            Pdu::BindTransceiver(p) => p.command_id(),
            Pdu::BindTransceiverResponse(p) => p.command_id(),
            Pdu::Outbind(p) => p.command_id(),
            Pdu::Unbind(p) => p.command_id(),
            Pdu::UnbindResponse(p) => p.command_id(),
            Pdu::SubmitSm(p) => p.command_id(),
            Pdu::SubmitSmResponse(p) => p.command_id(),
            Pdu::DeliverSm(p) => p.command_id(),
            Pdu::DeliverSmResponse(p) => p.command_id(),
            Pdu::QuerySm(p) => p.command_id(),
            Pdu::QuerySmResponse(p) => p.command_id(),
            Pdu::CancelSm(p) => p.command_id(),
            Pdu::CancelSmResponse(p) => p.command_id(),
            Pdu::ReplaceSm(p) => p.command_id(),
            Pdu::ReplaceSmResponse(p) => p.command_id(),
            Pdu::SubmitMulti(p) => p.command_id(),
            Pdu::SubmitMultiResponse(p) => p.command_id(),
            Pdu::DataSm(p) => p.command_id(),
            Pdu::DataSmResponse(p) => p.command_id(),
            Pdu::AlertNotification(p) => p.command_id(),
            Pdu::EnquireLink(p) => p.command_id(),
            Pdu::EnquireLinkResponse(p) => p.command_id(),
            Pdu::GenericNack(p) => p.command_id(),
            Pdu::InvalidPdu(p) => p.command_id(),
        }
    }

    /// Encodes the full wire frame for whichever variant this holds.
    pub fn to_bytes(&self) -> Result<Bytes, CodecError> {
        match self {
            Pdu::BindReceiver(p) => p.to_bytes(),
            Pdu::BindReceiverResponse(p) => p.to_bytes(),
            Pdu::BindTransmitter(p) => p.to_bytes(),
            Pdu::BindTransmitterResponse(p) => p.to_bytes(),
            Pdu::BindTransceiver(p) => p.to_bytes(),
            Pdu::BindTransceiverResponse(p) => p.to_bytes(),
            Pdu::Outbind(p) => p.to_bytes(),
            Pdu::Unbind(p) => p.to_bytes(),
            Pdu::UnbindResponse(p) => p.to_bytes(),
            Pdu::SubmitSm(p) => p.to_bytes(),
            Pdu::SubmitSmResponse(p) => p.to_bytes(),
            Pdu::DeliverSm(p) => p.to_bytes(),
            Pdu::DeliverSmResponse(p) => p.to_bytes(),
            Pdu::QuerySm(p) => p.to_bytes(),
            Pdu::QuerySmResponse(p) => p.to_bytes(),
            Pdu::CancelSm(p) => p.to_bytes(),
            Pdu::CancelSmResponse(p) => p.to_bytes(),
            Pdu::ReplaceSm(p) => p.to_bytes(),
            Pdu::ReplaceSmResponse(p) => p.to_bytes(),
            Pdu::SubmitMulti(p) => p.to_bytes(),
            Pdu::SubmitMultiResponse(p) => p.to_bytes(),
            Pdu::DataSm(p) => p.to_bytes(),
            Pdu::DataSmResponse(p) => p.to_bytes(),
            Pdu::AlertNotification(p) => p.to_bytes(),
            Pdu::EnquireLink(p) => p.to_bytes(),
            Pdu::EnquireLinkResponse(p) => p.to_bytes(),
            Pdu::GenericNack(p) => p.to_bytes(),
            Pdu::InvalidPdu(p) => p.to_bytes(),
        }
    }

    pub fn is_enquire_link(&self) -> bool {
        matches!(self, Pdu::EnquireLink(_))
    }

    pub fn is_enquire_link_response(&self) -> bool {
        matches!(self, Pdu::EnquireLinkResponse(_))
    }

    pub fn is_unbind(&self) -> bool {
        matches!(self, Pdu::Unbind(_))
    }

    /// Decodes a PDU body given its already-parsed header, dispatching on
    /// `command_id`. Unrecognized command ids, and bodies that fail to parse
    /// under their registered decoder, fall back to `Pdu::InvalidPdu` rather
    /// than propagating the error — only the caller of this function (the
    /// session's frame reader) treats decode failure as non-fatal.
    pub fn decode(header: &PduHeader, body: &[u8]) -> Pdu {
        let result = Self::decode_known(header, body);
        match result {
            Ok(pdu) => pdu,
            Err(err) => Pdu::InvalidPdu(InvalidPdu::new(
                header.command_id,
                header.sequence_number,
                err,
                Bytes::copy_from_slice(body),
            )),
        }
    }

    fn decode_known(header: &PduHeader, body: &[u8]) -> Result<Pdu, CodecError> {
        let command_id = CommandId::try_from(header.command_id)
            .map_err(|_| CodecError::InvalidCommandId(header.command_id))?;
        let mut cursor = Cursor::new(body);
        Ok(match command_id {
            CommandId::BindReceiver => Pdu::BindReceiver(BindReceiver::decode_body(header, &mut cursor)?),
            CommandId::BindReceiverResp => {
                Pdu::BindReceiverResponse(BindReceiverResponse::decode_body(header, &mut cursor)?)
            }
            CommandId::BindTransmitter => {
                Pdu::BindTransmitter(BindTransmitter::decode_body(header, &mut cursor)?)
            }
            CommandId::BindTransmitterResp => Pdu::BindTransmitterResponse(
                BindTransmitterResponse::decode_body(header, &mut cursor)?,
            ),
            CommandId::BindTransceiver => {
                Pdu::BindTransceiver(BindTransceiver::decode_body(header, &mut cursor)?)
            }
            CommandId::BindTransceiverResp => Pdu::BindTransceiverResponse(
                BindTransceiverResponse::decode_body(header, &mut cursor)?,
            ),
            CommandId::Outbind => Pdu::Outbind(Outbind::decode_body(header, &mut cursor)?),
            CommandId::Unbind => Pdu::Unbind(Unbind::decode_body(header, &mut cursor)?),
            CommandId::UnbindResp => Pdu::UnbindResponse(UnbindResponse::decode_body(header, &mut cursor)?),
            CommandId::SubmitSm => Pdu::SubmitSm(SubmitSm::decode_body(header, &mut cursor)?),
            CommandId::SubmitSmResp => {
                Pdu::SubmitSmResponse(SubmitSmResponse::decode_body(header, &mut cursor)?)
            }
            CommandId::DeliverSm => Pdu::DeliverSm(DeliverSm::decode_body(header, &mut cursor)?),
            CommandId::DeliverSmResp => {
                Pdu::DeliverSmResponse(DeliverSmResponse::decode_body(header, &mut cursor)?)
            }
            CommandId::QuerySm => Pdu::QuerySm(QuerySm::decode_body(header, &mut cursor)?),
            CommandId::QuerySmResp => Pdu::QuerySmResponse(QuerySmResponse::decode_body(header, &mut cursor)?),
            CommandId::CancelSm => Pdu::CancelSm(CancelSm::decode_body(header, &mut cursor)?),
            CommandId::CancelSmResp => Pdu::CancelSmResponse(CancelSmResponse::decode_body(header, &mut cursor)?),
            CommandId::ReplaceSm => Pdu::ReplaceSm(ReplaceSm::decode_body(header, &mut cursor)?),
            CommandId::ReplaceSmResp => {
                Pdu::ReplaceSmResponse(ReplaceSmResponse::decode_body(header, &mut cursor)?)
            }
            CommandId::SubmitMulti => Pdu::SubmitMulti(SubmitMulti::decode_body(header, &mut cursor)?),
            CommandId::SubmitMultiResp => {
                Pdu::SubmitMultiResponse(SubmitMultiResponse::decode_body(header, &mut cursor)?)
            }
            CommandId::DataSm => Pdu::DataSm(DataSm::decode_body(header, &mut cursor)?),
            CommandId::DataSmResp => Pdu::DataSmResponse(DataSmResponse::decode_body(header, &mut cursor)?),
            CommandId::AlertNotification => {
                Pdu::AlertNotification(AlertNotification::decode_body(header, &mut cursor)?)
            }
            CommandId::EnquireLink => Pdu::EnquireLink(EnquireLink::decode_body(header, &mut cursor)?),
            CommandId::EnquireLinkResp => {
                Pdu::EnquireLinkResponse(EnquireLinkResponse::decode_body(header, &mut cursor)?)
            }
            CommandId::GenericNack => Pdu::GenericNack(GenericNack::decode_body(header, &mut cursor)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_dispatches_to_registered_type() {
        let pdu = EnquireLink::new(5);
        let bytes = pdu.clone().to_bytes().unwrap();
        let header = PduHeader::decode(&mut Cursor::new(&bytes[..])).unwrap();
        let decoded = Pdu::decode(&header, &bytes[PduHeader::SIZE..]);
        assert_eq!(decoded, Pdu::EnquireLink(pdu));
    }

    #[test]
    fn decode_falls_back_to_invalid_pdu_on_bad_body() {
        let header = PduHeader {
            command_length: PduHeader::SIZE as u32,
            command_id: CommandId::SubmitSm as u32,
            command_status: crate::datatypes::CommandStatus::Ok,
            sequence_number: 7,
        };
        let decoded = Pdu::decode(&header, &[]);
        assert!(matches!(decoded, Pdu::InvalidPdu(_)));
    }

    #[test]
    fn decode_falls_back_to_invalid_pdu_on_unrecognized_command_id() {
        let header = PduHeader {
            command_length: PduHeader::SIZE as u32,
            command_id: 0x0000_00F0,
            command_status: crate::datatypes::CommandStatus::Ok,
            sequence_number: 7,
        };
        let decoded = Pdu::decode(&header, &[]);
        match decoded {
            Pdu::InvalidPdu(invalid) => {
                assert_eq!(invalid.command_id, 0x0000_00F0);
                assert_eq!(invalid.sequence_number, 7);
            }
            other => panic!("expected InvalidPdu, got {other:?}"),
        }
    }
}
