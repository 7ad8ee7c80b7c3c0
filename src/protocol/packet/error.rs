use thiserror::Error;

/// Errors that may occur while decoding Bedrock wire values or packets.
///
/// This type is kept small and generic so it can be shared by all
/// `BedrockEncodable` implementations and packet bodies.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The buffer did not contain enough bytes to decode the requested value.
    #[error("Unexpected EoF, not enough bytes to read requested type.")]
    UnexpectedEof,

    /// The header's embedded packet ID does not match the kind being decoded.
    ///
    /// Signals buffer desynchronisation or dispatch misrouting upstream;
    /// the decode attempt is fatal and never retried at this layer.
    #[error("Expected packet ID {expected:#x}, got {actual:#x}.")]
    PacketIdMismatch { expected: u16, actual: u16 },

    /// A header pid that no registered packet kind claims.
    #[error("Unknown Packet, ID: {0:#x}")]
    UnknownId(u16),

    /// A variable-length integer exceeded the supported byte width.
    #[error("VarInt did not terminate within its maximum width.")]
    VarIntTooLarge,

    /// A string field did not contain valid UTF-8.
    #[error("String field is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
