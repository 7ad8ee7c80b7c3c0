//! Bedrock game-packet catalogue and codec.
//!
//! This crate implements the game-packet layer that rides on a RakNet
//! transport:
//! - the packet-ID catalogue ([`protocol::ids`]),
//! - the varint header envelope with sub-client multiplexing
//!   ([`protocol::header`]),
//! - the wire-value codec for varints, strings and little-endian fields
//!   ([`protocol::types`]),
//! - the concrete packet types and the registry that dispatches decoding
//!   by packet ID ([`protocol::packet`]).
//!
//! All encoding and decoding is a pure transformation over a caller-owned
//! [`bytes`] cursor. Compression, encryption, datagram batching and the
//! connection state machine are deliberately not part of this crate; they
//! belong to the transport and session layers built around it.

pub mod protocol;

pub use protocol::header::PacketHeader;
pub use protocol::packet::{
    AddEntityPacket, AnimateEntityPacket, BedrockEncodable, ClientboundPacket, DataPacket,
    DecodeError, GamePacket, Packet, PacketHandler, ServerboundPacket,
};
