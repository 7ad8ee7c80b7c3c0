/// INTERNAL
/// Used to generate the GamePacket enum type
/// consumed by connection loops to encode and decode
/// whole framed packets.
macro_rules! define_game_packets {
    (
        $(
            $name:ident = $ty:ty => $handler:ident,
        )+
    ) => {
        /// A decoded game packet of any registered kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum GamePacket {
            $(
                $name($ty),
            )+
        }

        impl GamePacket {
            /// Decode a framed packet of any registered kind, dispatching
            /// on the pid embedded in the header envelope.
            pub fn decode(src: &mut impl Buf) -> Result<DataPacket<GamePacket>, DecodeError> {
                let header = PacketHeader::decode(src)?;
                let framed = match header.pid {
                    $(
                        <$ty as Packet>::NETWORK_ID => {
                            let inner = DataPacket::<$ty>::decode_with_header(header, src)?;
                            DataPacket {
                                sender_sub_id: inner.sender_sub_id,
                                recipient_sub_id: inner.recipient_sub_id,
                                body: GamePacket::$name(inner.body),
                            }
                        }
                    )+
                    other => return Err(DecodeError::UnknownId(other)),
                };
                tracing::trace!(
                    packet = framed.body.name(),
                    pid = framed.body.pid(),
                    "decoded game packet"
                );
                Ok(framed)
            }

            /// Encode this packet with its header envelope. A proxy
            /// re-emitting a decoded frame passes the original routing
            /// ids back through.
            pub fn encode(&self, sender_sub_id: u8, recipient_sub_id: u8, dst: &mut impl BufMut) {
                PacketHeader::with_sub_clients(self.pid(), sender_sub_id, recipient_sub_id)
                    .encode(dst);
                match self {
                    $(
                        GamePacket::$name(inner) => inner.encode_body(dst),
                    )+
                }
            }

            /// The fixed 10-bit wire ID of this packet's kind.
            pub fn pid(&self) -> u16 {
                match self {
                    $(
                        GamePacket::$name(_) => <$ty as Packet>::NETWORK_ID,
                    )+
                }
            }

            /// Short name of this packet's kind.
            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        GamePacket::$name(_) => <$ty as Packet>::NAME,
                    )+
                }
            }

            /// Whether this kind may be accepted before login completes.
            pub fn can_be_sent_before_login(&self) -> bool {
                match self {
                    $(
                        GamePacket::$name(_) => <$ty as Packet>::can_be_sent_before_login(),
                    )+
                }
            }

            /// Double-dispatch to the matching [`PacketHandler`] method.
            /// Returns whether the handler consumed the packet.
            pub fn handle(&self, handler: &mut impl PacketHandler) -> bool {
                match self {
                    $(
                        GamePacket::$name(inner) => handler.$handler(inner),
                    )+
                }
            }
        }
    }
}
pub(crate) use define_game_packets;
