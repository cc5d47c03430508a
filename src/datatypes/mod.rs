// ABOUTME: Leaf field types shared across the PDU catalog (command ids/status, enum_u8/enum_flag fields)
// ABOUTME: PDU bodies themselves live under crate::pdu, built on top of these

pub(crate) mod enum_u8;

mod command_id;
mod command_status;
mod data_coding;
mod esm_class;
mod fixed_string;
mod interface_version;
mod message_state;
mod numeric_plan_indicator;
mod priority_flag;
mod registered_delivery;
mod replace_if_present_flag;
mod type_of_number;

pub use command_id::CommandId;
pub use command_status::CommandStatus;
pub use data_coding::DataCoding;
pub use esm_class::{EsmClass, GsmNetworkFeatures, MessageType, MessagingMode};
pub use fixed_string::{
    AddressRange, EmptyDateTime, EmptyMessageId, FixedString, FixedStringError, LongAddr,
    MessageId, Password, ScheduleTime, ServiceType, ShortAddr, ShortMessage, SystemId, SystemType,
};
pub use interface_version::InterfaceVersion;
pub use message_state::MessageState;
pub use numeric_plan_indicator::NumericPlanIndicator;
pub use priority_flag::PriorityFlag;
pub use registered_delivery::{
    IntermediateNotification, RegisteredDelivery, SmeOriginatedAck, SmscDeliveryReceipt,
};
pub use replace_if_present_flag::ReplaceIfPresentFlag;
pub use type_of_number::TypeOfNumber;
