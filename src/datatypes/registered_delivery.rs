// ABOUTME: SMPP v3.4 registered_delivery field, Section 5.2.17 — an enum_flag bitfield
// ABOUTME: decomposed into smsc-receipt/sme-ack/intermediate-notification masks, always round-trips

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SmscDeliveryReceipt {
    #[default]
    No = 0x00,
    Both = 0x01,
    Failed = 0x02,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SmeOriginatedAck {
    #[default]
    No = 0x00,
    DeliveryAck = 0x04,
    UserAck = 0x08,
    Both = 0x0C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum IntermediateNotification {
    #[default]
    No = 0x00,
    Requested = 0x10,
}

impl SmscDeliveryReceipt {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0x00 => Self::No,
            0x01 => Self::Both,
            _ => Self::Failed,
        }
    }
}

impl SmeOriginatedAck {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0x00 => Self::No,
            0x04 => Self::DeliveryAck,
            0x08 => Self::UserAck,
            _ => Self::Both,
        }
    }
}

impl IntermediateNotification {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0x10 => Self::Requested,
            _ => Self::No,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RegisteredDelivery {
    pub smsc_delivery_receipt: SmscDeliveryReceipt,
    pub sme_originated_ack: SmeOriginatedAck,
    pub intermediate_notification: IntermediateNotification,
}

impl RegisteredDelivery {
    pub fn from_u8(value: u8) -> Self {
        Self {
            smsc_delivery_receipt: SmscDeliveryReceipt::from_bits(value & 0x03),
            sme_originated_ack: SmeOriginatedAck::from_bits(value & 0x0C),
            intermediate_notification: IntermediateNotification::from_bits(value & 0x10),
        }
    }

    pub fn to_u8(self) -> u8 {
        self.smsc_delivery_receipt as u8
            | self.sme_originated_ack as u8
            | self.intermediate_notification as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_combinations() {
        let rd = RegisteredDelivery {
            smsc_delivery_receipt: SmscDeliveryReceipt::Both,
            sme_originated_ack: SmeOriginatedAck::UserAck,
            intermediate_notification: IntermediateNotification::Requested,
        };
        assert_eq!(RegisteredDelivery::from_u8(rd.to_u8()), rd);
    }
}
