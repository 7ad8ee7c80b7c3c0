//! Registry of the game packet kinds known to this crate.

use bytes::{Buf, BufMut};

use crate::protocol::header::PacketHeader;
use crate::protocol::packet::utils::define_game_packets;
use crate::protocol::packet::{
    AddEntityPacket, AnimateEntityPacket, DataPacket, DecodeError, Packet,
};

/// Double-dispatch target for decoded packets.
///
/// The connection layer implements this once and lets [`GamePacket::handle`]
/// route each decoded packet to the matching method. Every default method
/// leaves the packet unhandled.
pub trait PacketHandler {
    fn handle_add_entity(&mut self, _packet: &AddEntityPacket) -> bool {
        false
    }

    fn handle_animate_entity(&mut self, _packet: &AnimateEntityPacket) -> bool {
        false
    }
}

define_game_packets! {
    AddEntity = AddEntityPacket => handle_add_entity,
    AnimateEntity = AnimateEntityPacket => handle_animate_entity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ids;
    use bytes::BytesMut;

    #[test]
    fn dispatches_on_the_embedded_pid() {
        let mut buf = BytesMut::new();
        DataPacket::with_sub_clients(AddEntityPacket::new(-3), 1, 2).encode(&mut buf);

        let mut slice = buf.freeze();
        let framed = GamePacket::decode(&mut slice).unwrap();
        assert_eq!(framed.sender_sub_id, 1);
        assert_eq!(framed.recipient_sub_id, 2);
        assert_eq!(framed.body.pid(), ids::ADD_ENTITY);
        assert_eq!(framed.body.name(), "AddEntity");
        match framed.body {
            GamePacket::AddEntity(pkt) => assert_eq!(pkt.entity_id, -3),
            other => panic!("expected AddEntity, got {other:?}"),
        }
    }

    #[test]
    fn unregistered_pid_is_unknown() {
        let mut buf = BytesMut::new();
        PacketHeader::new(ids::TEXT).encode(&mut buf);

        let mut slice = buf.freeze();
        assert!(matches!(
            GamePacket::decode(&mut slice),
            Err(DecodeError::UnknownId(id)) if id == ids::TEXT
        ));
    }

    #[test]
    fn reencoding_a_decoded_frame_is_byte_identical() {
        let pkt = AnimateEntityPacket::new(
            "animation.humanoid.wave".to_owned(),
            "default".to_owned(),
            String::new(),
            2,
            "__runtime_controller".to_owned(),
            0.5,
            vec![10, 11],
        );
        let mut buf = BytesMut::new();
        DataPacket::with_sub_clients(pkt, 3, 0).encode(&mut buf);
        let original = buf.freeze();

        let mut slice = original.clone();
        let framed = GamePacket::decode(&mut slice).unwrap();
        let mut reencoded = BytesMut::new();
        framed
            .body
            .encode(framed.sender_sub_id, framed.recipient_sub_id, &mut reencoded);
        assert_eq!(&reencoded[..], &original[..]);
    }

    #[test]
    fn entity_packets_are_login_gated() {
        let framed = GamePacket::AddEntity(AddEntityPacket::new(1));
        assert!(!framed.can_be_sent_before_login());
    }

    struct Recorder {
        seen: Vec<&'static str>,
    }

    impl PacketHandler for Recorder {
        fn handle_add_entity(&mut self, packet: &AddEntityPacket) -> bool {
            self.seen.push("AddEntity");
            packet.entity_id != 0
        }
    }

    #[test]
    fn handler_dispatch_reaches_the_matching_method() {
        let mut recorder = Recorder { seen: Vec::new() };

        let handled = GamePacket::AddEntity(AddEntityPacket::new(5)).handle(&mut recorder);
        assert!(handled);
        assert_eq!(recorder.seen, vec!["AddEntity"]);

        // The default method leaves other kinds unhandled.
        let pkt = AnimateEntityPacket::new(
            String::new(),
            String::new(),
            String::new(),
            0,
            String::new(),
            0.0,
            Vec::new(),
        );
        assert!(!GamePacket::AnimateEntity(pkt).handle(&mut recorder));
        assert_eq!(recorder.seen, vec!["AddEntity"]);
    }

    fn assert_clientbound<T: crate::protocol::packet::ClientboundPacket>() {}

    #[test]
    fn entity_packets_declare_the_clientbound_marker() {
        assert_clientbound::<AddEntityPacket>();
        assert_clientbound::<AnimateEntityPacket>();
    }
}
