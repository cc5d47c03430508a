// ABOUTME: SMPP v3.4 esm_class field, Section 5.2.12 — an enum_flag bitfield
// ABOUTME: decomposed into disjoint messaging-mode/message-type/gsm-feature masks, always round-trips

/// Bits 0-1: the messaging mode (datagram / forward / store-and-forward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MessagingMode {
    #[default]
    Default = 0x00,
    Datagram = 0x01,
    Forward = 0x02,
    StoreAndForward = 0x03,
}

/// Bits 2-5: the message type, masked with `0x3C`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    #[default]
    Default,
    DeliveryReceipt,
    DeliveryAck,
    UserAck,
    ConvAbort,
    IntermediateDeliveryNotification,
    Other(u8),
}

/// Bits 6-7: GSM-specific network feature flags, masked with `0xC0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GsmNetworkFeatures {
    #[default]
    No = 0x00,
    Udhi = 0x40,
    ReplyPath = 0x80,
    Both = 0xC0,
}

impl MessagingMode {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0x00 => Self::Default,
            0x01 => Self::Datagram,
            0x02 => Self::Forward,
            _ => Self::StoreAndForward,
        }
    }
}

impl MessageType {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0x00 => Self::Default,
            0x04 => Self::DeliveryReceipt,
            0x08 => Self::DeliveryAck,
            0x10 => Self::UserAck,
            0x18 => Self::ConvAbort,
            0x20 => Self::IntermediateDeliveryNotification,
            other => Self::Other(other),
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            Self::Default => 0x00,
            Self::DeliveryReceipt => 0x04,
            Self::DeliveryAck => 0x08,
            Self::UserAck => 0x10,
            Self::ConvAbort => 0x18,
            Self::IntermediateDeliveryNotification => 0x20,
            Self::Other(bits) => bits,
        }
    }
}

impl GsmNetworkFeatures {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0x00 => Self::No,
            0x40 => Self::Udhi,
            0x80 => Self::ReplyPath,
            _ => Self::Both,
        }
    }
}

/// The `esm_class` field: always decodes successfully from any byte, and
/// `to_u8` recomposes the exact original byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct EsmClass {
    pub messaging_mode: MessagingMode,
    pub message_type: MessageType,
    pub gsm_network_features: GsmNetworkFeatures,
}

impl EsmClass {
    pub fn from_u8(value: u8) -> Self {
        Self {
            messaging_mode: MessagingMode::from_bits(value & 0x03),
            message_type: MessageType::from_bits(value & 0x3C),
            gsm_network_features: GsmNetworkFeatures::from_bits(value & 0xC0),
        }
    }

    pub fn to_u8(self) -> u8 {
        self.messaging_mode as u8 | self.message_type.to_bits() | self.gsm_network_features as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_byte() {
        for value in 0u8..=255 {
            assert_eq!(EsmClass::from_u8(value).to_u8(), value);
        }
    }
}
