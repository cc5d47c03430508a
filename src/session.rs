// ABOUTME: Session<S> — the SMPP v3.4 connection state machine: a single writer lock guarding
// ABOUTME: sequence assignment, and a receive loop racing reads against the enquire_link timer,
// ABOUTME: grounded on the reference implementation's net/session (async_send / async_receive)

use crate::buffer::{DEFAULT_CAPACITY, FramedReceiveBuffer};
use crate::codec::{CodecError, Encodable, PduHeader};
use crate::datatypes::CommandId;
use crate::pdu::{EnquireLink, EnquireLinkResponse, Pdu, Unbind, UnbindResponse};
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, ReadHalf, WriteHalf};
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};

/// Largest single read requested per socket poll. Arbitrary but generous
/// relative to `MAX_PDU_SIZE`; the buffer itself is what actually bounds
/// how much unconsumed data a session will hold.
const READ_CHUNK: usize = 64 * 1024;

/// Errors a `Session` can surface. Field/body-level problems are wrapped
/// from `CodecError`; everything else is specific to holding a live
/// connection open.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("receive buffer exhausted its fixed capacity")]
    BufferOverflow,
    #[error("peer did not answer enquire_link before the next keepalive came due")]
    EnquireLinkTimeout,
    #[error("peer closed the session with unbind")]
    Unbinded,
    #[error("operation was cancelled")]
    Cancelled,
}

struct SendState<S> {
    write_half: WriteHalf<S>,
    next_sequence: u32,
}

impl<S> SendState<S> {
    /// Assigns the next sequence number, wrapping `0x7FFFFFFF -> 1`. Zero is
    /// reserved and never handed out, matching `PduHeader::decode`'s
    /// rejection of a wire `sequence_number` of zero.
    fn assign_sequence(&mut self) -> u32 {
        let sequence_number = self.next_sequence;
        self.next_sequence = if sequence_number == 0x7FFF_FFFF {
            1
        } else {
            sequence_number + 1
        };
        sequence_number
    }
}

struct ReceiveState<S> {
    read_half: ReadHalf<S>,
    buffer: FramedReceiveBuffer,
    pending_enquire_link: bool,
    unbound: bool,
}

/// A single SMPP v3.4 connection: one bind, in whichever direction the
/// caller negotiated, kept alive by periodic `enquire_link` traffic.
///
/// `send`/`send_response`/`send_unbind` may be called concurrently from
/// multiple tasks; each gets its own sequence number and a complete,
/// non-interleaved write. `receive` is meant to be driven from a single
/// long-lived loop — concurrent calls are safe but serialize on the
/// internal read lock rather than interleaving frames.
pub struct Session<S> {
    send: Mutex<SendState<S>>,
    recv: Mutex<ReceiveState<S>>,
    enquire_link_interval: Duration,
    closed: AtomicBool,
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, enquire_link_interval: Duration) -> Self {
        let (read_half, write_half) = tokio::io::split(stream);
        Self {
            send: Mutex::new(SendState {
                write_half,
                next_sequence: 1,
            }),
            recv: Mutex::new(ReceiveState {
                read_half,
                buffer: FramedReceiveBuffer::new(DEFAULT_CAPACITY),
                pending_enquire_link: false,
                unbound: false,
            }),
            enquire_link_interval,
            closed: AtomicBool::new(false),
        }
    }

    /// Assigns a fresh sequence number and sends `pdu`, returning the number
    /// so the caller can correlate the eventual response. The sequence is
    /// assigned inside the same critical section that performs the write,
    /// so a send cancelled before it starts writing never burns a number.
    pub async fn send(&self, pdu: impl Into<Pdu>) -> Result<u32, SessionError> {
        self.ensure_open()?;
        let mut pdu = pdu.into();
        let mut send = self.send.lock().await;
        let sequence_number = send.assign_sequence();
        pdu.set_sequence_number(sequence_number);
        let bytes = pdu.to_bytes()?;
        send.write_half.write_all(&bytes).await?;
        trace!(
            command_id = ?pdu.command_id(),
            sequence_number,
            "sent pdu"
        );
        Ok(sequence_number)
    }

    /// Sends `pdu` as a response carrying the given (already-assigned)
    /// sequence number, echoing the request it answers.
    pub async fn send_response(
        &self,
        pdu: impl Into<Pdu>,
        sequence_number: u32,
    ) -> Result<(), SessionError> {
        self.ensure_open()?;
        let mut pdu = pdu.into();
        pdu.set_sequence_number(sequence_number);
        let bytes = pdu.to_bytes()?;
        let mut send = self.send.lock().await;
        send.write_half.write_all(&bytes).await?;
        Ok(())
    }

    /// Fails fast once the session has torn down (peer unbind, liveness
    /// timeout, or an earlier I/O error already shut the socket), rather
    /// than attempting a write a closed half will reject anyway.
    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(SessionError::Io(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "session has already shut down",
            )));
        }
        Ok(())
    }

    /// Sends `unbind` and idempotently shuts the connection down. Does not
    /// wait for `unbind_resp` — the caller observes it, if it arrives,
    /// through a subsequent `receive`.
    pub async fn send_unbind(&self) -> Result<(), SessionError> {
        self.send(Unbind::new(0)).await?;
        self.shutdown().await;
        Ok(())
    }

    /// Reads the next PDU, transparently answering the peer's own
    /// `enquire_link` traffic and sending ours on the configured interval.
    /// Resolves with `SessionError::EnquireLinkTimeout` if the peer never
    /// answers our own keepalive before the next one comes due. A peer
    /// `unbind` is answered with `unbind_resp` (echoing its sequence
    /// number) and a peer `unbind_resp` is consumed silently; either one
    /// shuts the stream down and resolves this call — and every call
    /// thereafter — with `SessionError::Unbinded`, without ever handing
    /// the triggering PDU back to the caller.
    pub async fn receive(&self) -> Result<Pdu, SessionError> {
        let mut recv = self.recv.lock().await;
        if recv.unbound {
            return Err(SessionError::Unbinded);
        }

        let mut suspended = false;

        let pdu = 'frame: loop {
            while recv.buffer.size() < PduHeader::SIZE {
                suspended = true;
                self.fill_buffer(&mut recv).await?;
            }

            let header = {
                let mut cursor = Cursor::new(recv.buffer.data());
                PduHeader::decode(&mut cursor)?
            };
            let frame_len = header.command_length as usize;

            while recv.buffer.size() < frame_len {
                suspended = true;
                self.fill_buffer(&mut recv).await?;
            }

            if header.command_id == CommandId::EnquireLink as u32 {
                let sequence_number = header.sequence_number;
                recv.buffer.consume(frame_len);
                debug!(sequence_number, "answering peer enquire_link");
                self.send_response(EnquireLinkResponse::new(sequence_number), sequence_number)
                    .await?;
                continue 'frame;
            }

            if header.command_id == CommandId::EnquireLinkResp as u32 {
                recv.buffer.consume(frame_len);
                continue 'frame;
            }

            if header.command_id == CommandId::Unbind as u32 {
                let sequence_number = header.sequence_number;
                recv.buffer.consume(frame_len);
                recv.unbound = true;
                warn!(sequence_number, "peer sent unbind; tearing down session");
                drop(recv);
                let reply = self
                    .send_response(UnbindResponse::new(sequence_number), sequence_number)
                    .await;
                self.shutdown().await;
                reply?;
                return Err(SessionError::Unbinded);
            }

            if header.command_id == CommandId::UnbindResp as u32 {
                recv.buffer.consume(frame_len);
                recv.unbound = true;
                warn!("peer sent unbind_resp; tearing down session");
                drop(recv);
                self.shutdown().await;
                return Err(SessionError::Unbinded);
            }

            let decoded = {
                let body = &recv.buffer.data()[PduHeader::SIZE..frame_len];
                Pdu::decode(&header, body)
            };
            recv.buffer.consume(frame_len);

            break 'frame decoded;
        };

        drop(recv);
        if !suspended {
            // Bounds stack/recursion growth for callers that tightly loop on
            // `receive` while frames are already fully buffered.
            tokio::task::yield_now().await;
        }
        Ok(pdu)
    }

    /// Returns the underlying stream, reuniting the read and write halves.
    /// Consuming (rather than borrowing) is required here: `receive` and
    /// `send` need independently lockable read/write handles to the same
    /// socket, so the original stream only exists again once both sides
    /// are done with it.
    pub fn into_inner(self) -> S {
        let send = self.send.into_inner();
        let recv = self.recv.into_inner();
        recv.read_half.unsplit(send.write_half)
    }

    /// Waits for more data or the next keepalive deadline, whichever comes
    /// first. On a successful read, commits the bytes and clears
    /// `pending_enquire_link` (cleared by completion of *any* read, not
    /// specifically an `enquire_link_resp`). On timeout, either sends our
    /// own `enquire_link` (first miss) or gives up and tears the session
    /// down (second consecutive miss).
    async fn fill_buffer(&self, recv: &mut ReceiveState<S>) -> Result<(), SessionError> {
        loop {
            let timer = tokio::time::sleep(self.enquire_link_interval);
            tokio::pin!(timer);
            let read_buf = recv
                .buffer
                .prepare(READ_CHUNK)
                .map_err(|_| SessionError::BufferOverflow)?;

            tokio::select! {
                biased;
                result = recv.read_half.read(read_buf) => {
                    let n = result?;
                    if n == 0 {
                        return Err(SessionError::Io(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "peer closed the connection",
                        )));
                    }
                    recv.buffer.commit(n);
                    recv.pending_enquire_link = false;
                    return Ok(());
                }
                _ = &mut timer => {
                    if recv.pending_enquire_link {
                        warn!("peer did not answer enquire_link in time; closing session");
                        self.send_unbind_best_effort().await;
                        return Err(SessionError::EnquireLinkTimeout);
                    }
                    recv.pending_enquire_link = true;
                    self.send_enquire_link().await?;
                }
            }
        }
    }

    async fn send_enquire_link(&self) -> Result<(), SessionError> {
        let mut send = self.send.lock().await;
        let sequence_number = send.assign_sequence();
        let bytes = EnquireLink::new(sequence_number).to_bytes()?;
        send.write_half.write_all(&bytes).await?;
        trace!(sequence_number, "sent keepalive enquire_link");
        Ok(())
    }

    /// Sends `unbind` on a best-effort basis (errors are swallowed — the
    /// session is already being torn down) and closes the socket.
    async fn send_unbind_best_effort(&self) {
        let mut send = self.send.lock().await;
        let sequence_number = send.assign_sequence();
        if let Ok(bytes) = Unbind::new(sequence_number).to_bytes() {
            let _ = send.write_half.write_all(&bytes).await;
        }
        drop(send);
        self.shutdown().await;
    }

    /// Idempotent: a second call is a no-op rather than a second error.
    async fn shutdown(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let mut send = self.send.lock().await;
        let _ = send.write_half.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdu::EnquireLinkResponse;
    use std::time::Duration;
    use tokio::io::duplex;

    #[tokio::test]
    async fn send_assigns_increasing_sequence_numbers() {
        let (local, mut remote) = duplex(4096);
        let session = Session::new(local, Duration::from_secs(30));

        let first = session.send(EnquireLink::new(0)).await.unwrap();
        let second = session.send(EnquireLink::new(0)).await.unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let mut buf = [0u8; 32];
        let n = remote.read(&mut buf).await.unwrap();
        assert_eq!(n, PduHeader::SIZE);
    }

    #[tokio::test]
    async fn send_sequence_number_wraps_past_max() {
        let (local, _remote) = duplex(4096);
        let session = Session::new(local, Duration::from_secs(30));
        {
            let mut send = session.send.lock().await;
            send.next_sequence = 0x7FFF_FFFF;
        }
        let seq = session.send(EnquireLink::new(0)).await.unwrap();
        assert_eq!(seq, 0x7FFF_FFFF);
        let next = session.send(EnquireLink::new(0)).await.unwrap();
        assert_eq!(next, 1);
    }

    #[tokio::test]
    async fn receive_answers_peer_enquire_link_without_surfacing_it() {
        let (local, mut remote) = duplex(4096);
        let session = Session::new(local, Duration::from_secs(30));

        let ping = EnquireLink::new(9).to_bytes().unwrap();
        remote.write_all(&ping).await.unwrap();

        // enquire_link_resp is also swallowed internally; only once a real
        // PDU shows up does receive() have anything to hand back.
        let keepalive_resp = EnquireLinkResponse::new(10).to_bytes().unwrap();
        remote.write_all(&keepalive_resp).await.unwrap();

        let real = crate::pdu::GenericNack::error(11, crate::datatypes::CommandStatus::UnknownError)
            .to_bytes()
            .unwrap();
        remote.write_all(&real).await.unwrap();

        let received = session.receive().await.unwrap();
        assert_eq!(received.sequence_number(), 11);

        let mut buf = [0u8; PduHeader::SIZE];
        remote.read_exact(&mut buf).await.unwrap();
        let mut cursor = Cursor::new(&buf[..]);
        let header = PduHeader::decode(&mut cursor).unwrap();
        assert_eq!(header.command_id, CommandId::EnquireLinkResp as u32);
        assert_eq!(header.sequence_number, 9);
    }

    #[tokio::test]
    async fn receive_answers_peer_unbind_and_tears_down() {
        let (local, mut remote) = duplex(4096);
        let session = Session::new(local, Duration::from_secs(30));

        let unbind = Unbind::new(3).to_bytes().unwrap();
        remote.write_all(&unbind).await.unwrap();

        let err = session.receive().await.unwrap_err();
        assert!(matches!(err, SessionError::Unbinded));

        let mut buf = [0u8; PduHeader::SIZE];
        remote.read_exact(&mut buf).await.unwrap();
        let mut cursor = Cursor::new(&buf[..]);
        let header = PduHeader::decode(&mut cursor).unwrap();
        assert_eq!(header.command_id, CommandId::UnbindResp as u32);
        assert_eq!(header.sequence_number, 3);

        // the stream was shut down: the remote side now sees EOF
        let mut trailing = [0u8; 8];
        let n = remote.read(&mut trailing).await.unwrap();
        assert_eq!(n, 0);
    }

    #[tokio::test]
    async fn receive_returns_unbinded_on_subsequent_calls() {
        let (local, mut remote) = duplex(4096);
        let session = Session::new(local, Duration::from_secs(30));

        let unbind = Unbind::new(3).to_bytes().unwrap();
        remote.write_all(&unbind).await.unwrap();

        let err = session.receive().await.unwrap_err();
        assert!(matches!(err, SessionError::Unbinded));

        let err = session.receive().await.unwrap_err();
        assert!(matches!(err, SessionError::Unbinded));
    }

    #[tokio::test]
    async fn send_fails_after_peer_unbind_tears_down_the_session() {
        let (local, mut remote) = duplex(4096);
        let session = Session::new(local, Duration::from_secs(30));

        let unbind = Unbind::new(3).to_bytes().unwrap();
        remote.write_all(&unbind).await.unwrap();
        let err = session.receive().await.unwrap_err();
        assert!(matches!(err, SessionError::Unbinded));

        let err = session.send(EnquireLink::new(0)).await.unwrap_err();
        assert!(matches!(err, SessionError::Io(_)));
    }

    #[tokio::test]
    async fn into_inner_reunites_the_stream() {
        let (local, _remote) = duplex(4096);
        let session = Session::new(local, Duration::from_secs(30));
        let _stream = session.into_inner();
    }
}
