pub mod entity;
mod error;
mod registry;
mod utils;

pub use entity::*;
pub use error::DecodeError;
pub use registry::{GamePacket, PacketHandler};

use bytes::{Buf, BufMut};

use crate::protocol::header::PacketHeader;

/// Trait implemented by all concrete game packet body types.
///
/// Implementations are responsible for encoding/decoding only the
/// packet body – the leading header varint is handled by [`DataPacket`].
pub trait Packet: Sized {
    /// The fixed 10-bit ID identifying this packet kind on the wire.
    const NETWORK_ID: u16;

    /// Short name of this packet kind, for diagnostics and traces.
    const NAME: &'static str;

    /// Whether the connection layer may accept this kind before the login
    /// sequence has completed. Kinds default to login-gated.
    fn can_be_sent_before_login() -> bool {
        false
    }

    /// The wire ID of this packet.
    fn pid(&self) -> u16 {
        Self::NETWORK_ID
    }

    /// Encode the body of this packet into the destination buffer.
    fn encode_body(&self, dst: &mut impl BufMut);

    /// Decode the body of this packet from the source buffer, consuming
    /// exactly the bytes the body owns.
    fn decode_body(src: &mut impl Buf) -> Result<Self, DecodeError>;
}

/// Trait for types that know how to encode/decode themselves using
/// the Bedrock wire format.
pub trait BedrockEncodable: Sized {
    /// Encode this value into the destination buffer.
    fn encode_bedrock(&self, dst: &mut impl BufMut);

    /// Decode a value of this type from the source buffer.
    fn decode_bedrock(src: &mut impl Buf) -> Result<Self, DecodeError>;
}

/// Marker for packet kinds the server is allowed to send.
///
/// Direction is validated by the dispatcher consuming this crate; the
/// markers only declare which endpoint is the legal sender of a kind.
pub trait ClientboundPacket: Packet {}

/// Marker for packet kinds the client is allowed to send.
pub trait ServerboundPacket: Packet {}

/// A game packet framed with its sub-client routing fields.
///
/// The header envelope is encoded and decoded here and only here; body
/// types never see it, so no packet kind can deviate from the shared
/// framing.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPacket<T> {
    /// Sub-client the packet originates from, 0 for the primary client.
    pub sender_sub_id: u8,
    /// Sub-client the packet is addressed to, 0 for the primary client.
    pub recipient_sub_id: u8,
    pub body: T,
}

impl<T> DataPacket<T> {
    /// Frame a packet body for the primary client on both ends.
    pub fn new(body: T) -> DataPacket<T> {
        DataPacket {
            sender_sub_id: 0,
            recipient_sub_id: 0,
            body,
        }
    }

    /// Frame a packet body with explicit split-screen routing ids.
    pub fn with_sub_clients(body: T, sender_sub_id: u8, recipient_sub_id: u8) -> DataPacket<T> {
        DataPacket {
            sender_sub_id,
            recipient_sub_id,
            body,
        }
    }
}

impl<T: Packet> DataPacket<T> {
    /// The header envelope this frame encodes with.
    pub fn header(&self) -> PacketHeader {
        PacketHeader::with_sub_clients(T::NETWORK_ID, self.sender_sub_id, self.recipient_sub_id)
    }

    /// Encode the header envelope followed by the packet body.
    pub fn encode(&self, dst: &mut impl BufMut) {
        self.header().encode(dst);
        self.body.encode_body(dst);
    }

    /// Decode the header envelope followed by the packet body.
    ///
    /// Fails with [`DecodeError::PacketIdMismatch`] when the pid embedded
    /// in the header is not `T::NETWORK_ID`, which indicates buffer
    /// desynchronisation or a dispatch bug upstream.
    pub fn decode(src: &mut impl Buf) -> Result<DataPacket<T>, DecodeError> {
        let header = PacketHeader::decode(src)?;
        DataPacket::decode_with_header(header, src)
    }

    /// Decode the body once the header has already been read, as the
    /// registry does after dispatching on the embedded pid.
    pub(crate) fn decode_with_header(
        header: PacketHeader,
        src: &mut impl Buf,
    ) -> Result<DataPacket<T>, DecodeError> {
        header.expect_pid(T::NETWORK_ID)?;
        let body = T::decode_body(src)?;
        Ok(DataPacket {
            sender_sub_id: header.sender_sub_id,
            recipient_sub_id: header.recipient_sub_id,
            body,
        })
    }
}
