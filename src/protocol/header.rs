use bytes::{Buf, BufMut};

use crate::protocol::packet::{BedrockEncodable, DecodeError};
use crate::protocol::types::VarU32;

const PID_MASK: u32 = 0x3ff;
const SUB_CLIENT_ID_MASK: u32 = 0x03; // 2 bits
const SENDER_SUB_CLIENT_ID_SHIFT: u32 = 10;
const RECIPIENT_SUB_CLIENT_ID_SHIFT: u32 = 12;

/// The leading envelope present on every game packet.
///
/// A single unsigned varint combining three fields: bits 0..=9 carry the
/// packet ID, bits 10..=11 the sender sub-client and bits 12..=13 the
/// recipient sub-client. The remaining high bits are zero on encode, and
/// ignored on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    pub pid: u16,
    pub sender_sub_id: u8,
    pub recipient_sub_id: u8,
}

impl PacketHeader {
    /// Header for a packet exchanged between the primary clients.
    pub fn new(pid: u16) -> PacketHeader {
        PacketHeader {
            pid,
            sender_sub_id: 0,
            recipient_sub_id: 0,
        }
    }

    /// Header carrying explicit split-screen routing ids.
    pub fn with_sub_clients(pid: u16, sender_sub_id: u8, recipient_sub_id: u8) -> PacketHeader {
        PacketHeader {
            pid,
            sender_sub_id,
            recipient_sub_id,
        }
    }

    pub fn encode(&self, dst: &mut impl BufMut) {
        let header = (self.pid as u32 & PID_MASK)
            | ((self.sender_sub_id as u32 & SUB_CLIENT_ID_MASK) << SENDER_SUB_CLIENT_ID_SHIFT)
            | ((self.recipient_sub_id as u32 & SUB_CLIENT_ID_MASK)
                << RECIPIENT_SUB_CLIENT_ID_SHIFT);
        VarU32(header).encode_bedrock(dst);
    }

    pub fn decode(src: &mut impl Buf) -> Result<PacketHeader, DecodeError> {
        let header = VarU32::decode_bedrock(src)?.0;
        Ok(PacketHeader {
            pid: (header & PID_MASK) as u16,
            sender_sub_id: ((header >> SENDER_SUB_CLIENT_ID_SHIFT) & SUB_CLIENT_ID_MASK) as u8,
            recipient_sub_id: ((header >> RECIPIENT_SUB_CLIENT_ID_SHIFT) & SUB_CLIENT_ID_MASK)
                as u8,
        })
    }

    /// Fail unless the embedded pid matches the static ID of the kind
    /// being decoded.
    pub fn expect_pid(&self, expected: u16) -> Result<(), DecodeError> {
        if self.pid != expected {
            return Err(DecodeError::PacketIdMismatch {
                expected,
                actual: self.pid,
            });
        }
        Ok(())
    }
}
