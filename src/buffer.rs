// ABOUTME: Fixed-capacity compacting receive buffer for framed socket reads
// ABOUTME: grounded on the reference implementation's static_flat_buffer (prepare/commit/consume)

use crate::session::SessionError;

/// Default capacity: a single session should never need to buffer more than
/// one PDU's worth of slack ahead of the stream.
pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

/// A fixed-capacity buffer with three logical cursors: an origin (data not
/// yet consumed by the caller begins here), a write position (data not yet
/// filled by the last read begins here), and a reserved end (how far the
/// most recent `prepare` call promised to write).
pub struct FramedReceiveBuffer {
    buf: Vec<u8>,
    origin: usize,
    write_pos: usize,
    reserved_end: usize,
}

impl FramedReceiveBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity],
            origin: 0,
            write_pos: 0,
            reserved_end: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes available to the caller (already committed, not yet consumed).
    pub fn size(&self) -> usize {
        self.write_pos - self.origin
    }

    /// The committed-but-unconsumed bytes.
    pub fn data(&self) -> &[u8] {
        &self.buf[self.origin..self.write_pos]
    }

    /// Reserves at least `n` writable bytes, compacting the buffer in place
    /// if the tail doesn't have room but compaction would free enough.
    pub fn prepare(&mut self, n: usize) -> Result<&mut [u8], SessionError> {
        if n <= self.buf.len() - self.write_pos {
            self.reserved_end = self.write_pos + n;
            return Ok(&mut self.buf[self.write_pos..self.reserved_end]);
        }
        let len = self.size();
        if n > self.buf.len() - len {
            return Err(SessionError::BufferOverflow);
        }
        if len > 0 {
            self.buf.copy_within(self.origin..self.write_pos, 0);
        }
        self.origin = 0;
        self.write_pos = len;
        self.reserved_end = self.write_pos + n;
        Ok(&mut self.buf[self.write_pos..self.reserved_end])
    }

    /// Advances the write position by the number of bytes actually written
    /// into the slice returned by the last `prepare` call.
    pub fn commit(&mut self, n: usize) {
        self.write_pos += n.min(self.reserved_end - self.write_pos);
    }

    /// Marks `n` bytes as consumed from the front of the available data.
    pub fn consume(&mut self, n: usize) {
        if n >= self.size() {
            self.origin = 0;
            self.write_pos = 0;
        } else {
            self.origin += n;
        }
    }
}

impl Default for FramedReceiveBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_commit_consume_round_trip() {
        let mut buf = FramedReceiveBuffer::new(16);
        {
            let slice = buf.prepare(4).unwrap();
            slice.copy_from_slice(b"abcd");
        }
        buf.commit(4);
        assert_eq!(buf.data(), b"abcd");
        buf.consume(2);
        assert_eq!(buf.data(), b"cd");
    }

    #[test]
    fn prepare_compacts_when_tail_is_short_but_total_capacity_suffices() {
        let mut buf = FramedReceiveBuffer::new(8);
        buf.prepare(6).unwrap();
        buf.commit(6);
        buf.consume(6); // origin & write_pos reset to 0 since fully drained

        buf.prepare(6).unwrap();
        buf.commit(6);
        buf.consume(2); // 4 bytes remain, cursors not at 0

        // tail room is buf.len() - write_pos = 8 - 6 = 2, need 5: must compact
        let slice = buf.prepare(5).unwrap();
        assert_eq!(slice.len(), 5);
    }

    #[test]
    fn prepare_overflow_is_reported() {
        let mut buf = FramedReceiveBuffer::new(4);
        assert!(matches!(
            buf.prepare(5),
            Err(SessionError::BufferOverflow)
        ));
    }

    #[test]
    fn consume_resets_cursors_when_buffer_fully_drained() {
        let mut buf = FramedReceiveBuffer::new(8);
        buf.prepare(4).unwrap();
        buf.commit(4);
        buf.consume(4);
        // fully drained; the next prepare should get the full capacity again
        let slice = buf.prepare(8).unwrap();
        assert_eq!(slice.len(), 8);
    }

    /// Feeding the same bytes one byte at a time must decode to the same
    /// sequence of PDUs as feeding them all at once — framing must not
    /// depend on how the underlying reads happen to chunk the stream.
    #[test]
    fn byte_at_a_time_feed_matches_bulk_feed() {
        use crate::codec::{Encodable, PduHeader};
        use crate::pdu::{EnquireLink, Pdu, GenericNack};
        use crate::datatypes::CommandStatus;
        use std::io::Cursor;

        let nack = GenericNack {
            command_status: CommandStatus::UnknownError,
            sequence_number: 2,
        };

        let mut wire = Vec::new();
        wire.extend_from_slice(&EnquireLink::new(1).to_bytes().unwrap());
        wire.extend_from_slice(&nack.to_bytes().unwrap());

        let mut buf = FramedReceiveBuffer::new(1024);
        let mut decoded = Vec::new();
        for &byte in &wire {
            let slice = buf.prepare(1).unwrap();
            slice[0] = byte;
            buf.commit(1);

            while buf.size() >= PduHeader::SIZE {
                let header = PduHeader::decode(&mut Cursor::new(buf.data())).unwrap();
                let frame_len = header.command_length as usize;
                if buf.size() < frame_len {
                    break;
                }
                let pdu = Pdu::decode(&header, &buf.data()[PduHeader::SIZE..frame_len]);
                buf.consume(frame_len);
                decoded.push(pdu);
            }
        }

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0], Pdu::EnquireLink(EnquireLink::new(1)));
        assert_eq!(decoded[1], Pdu::GenericNack(nack));
    }
}
