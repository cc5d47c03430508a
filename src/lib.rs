// ABOUTME: SMPP v3.4 session codec and state machine — wire format, PDU catalog,
// ABOUTME: and an async `Session<S>` that keeps a single bound connection alive

//! A codec and session state machine for SMPP v3.4, the protocol SMS
//! aggregators and SMSCs speak to exchange short messages over a persistent
//! TCP connection.
//!
//! This crate gives you a [`Session<S>`](session::Session) over anything
//! implementing `AsyncRead + AsyncWrite`, and lets you drive the
//! bind/submit/deliver/unbind lifecycle yourself — it does not dial
//! connections, manage pools of binds, or retry failed sends.
//!
//! ```no_run
//! use std::time::Duration;
//! use smpp::pdu::{BindTransceiver, Pdu};
//! use smpp::session::Session;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let stream = tokio::net::TcpStream::connect("smsc.example.com:2775").await?;
//! let session = Session::new(stream, Duration::from_secs(30));
//!
//! session
//!     .send(BindTransceiver {
//!         sequence_number: 0,
//!         system_id: "client".parse()?,
//!         password: "secret".parse()?,
//!         system_type: "".parse()?,
//!         interface_version: Default::default(),
//!         addr_ton: Default::default(),
//!         addr_npi: Default::default(),
//!         address_range: "".parse()?,
//!     })
//!     .await?;
//!
//! loop {
//!     match session.receive().await? {
//!         Pdu::BindTransceiverResponse(_) => break,
//!         _ => continue,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod codec;
pub mod datatypes;
mod macros;
pub mod pdu;
pub mod session;
pub mod tlv;

pub use buffer::FramedReceiveBuffer;
pub use codec::{CodecError, Decodable, Encodable, PduHeader};
pub use pdu::Pdu;
pub use session::{Session, SessionError};
pub use tlv::TlvMap;
