//! Clientbound entity spawn and animation packets.

use bytes::{Buf, BufMut};

use crate::protocol::ids;
use crate::protocol::packet::{BedrockEncodable, ClientboundPacket, DecodeError, Packet};
use crate::protocol::types::{VarU32, VarU64};

/// Tells the client that an entity has spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEntityPacket {
    pub entity_id: i32,
}

impl AddEntityPacket {
    pub fn new(entity_id: i32) -> AddEntityPacket {
        AddEntityPacket { entity_id }
    }
}

impl Packet for AddEntityPacket {
    const NETWORK_ID: u16 = ids::ADD_ENTITY;
    const NAME: &'static str = "AddEntity";

    fn encode_body(&self, dst: &mut impl BufMut) {
        // Negative ids keep their two's-complement bit pattern on the wire.
        VarU32(self.entity_id as u32).encode_bedrock(dst);
    }

    fn decode_body(src: &mut impl Buf) -> Result<Self, DecodeError> {
        Ok(AddEntityPacket {
            entity_id: VarU32::decode_bedrock(src)?.0 as i32,
        })
    }
}

impl ClientboundPacket for AddEntityPacket {}

/// Plays a named animation on a set of actors, optionally transitioning
/// their animation controllers into a follow-up state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimateEntityPacket {
    pub animation: String,
    pub next_state: String,
    pub stop_expression: String,
    pub stop_expression_version: i32,
    pub controller: String,
    pub blend_out_time: f32,
    pub actor_runtime_ids: Vec<i64>,
}

impl AnimateEntityPacket {
    pub fn new(
        animation: String,
        next_state: String,
        stop_expression: String,
        stop_expression_version: i32,
        controller: String,
        blend_out_time: f32,
        actor_runtime_ids: Vec<i64>,
    ) -> AnimateEntityPacket {
        AnimateEntityPacket {
            animation,
            next_state,
            stop_expression,
            stop_expression_version,
            controller,
            blend_out_time,
            actor_runtime_ids,
        }
    }
}

impl Packet for AnimateEntityPacket {
    const NETWORK_ID: u16 = ids::ANIMATE_ENTITY;
    const NAME: &'static str = "AnimateEntity";

    fn encode_body(&self, dst: &mut impl BufMut) {
        self.animation.encode_bedrock(dst);
        self.next_state.encode_bedrock(dst);
        self.stop_expression.encode_bedrock(dst);
        self.stop_expression_version.encode_bedrock(dst);
        self.controller.encode_bedrock(dst);
        self.blend_out_time.encode_bedrock(dst);
        VarU32(self.actor_runtime_ids.len() as u32).encode_bedrock(dst);
        for actor_runtime_id in &self.actor_runtime_ids {
            VarU64(*actor_runtime_id as u64).encode_bedrock(dst);
        }
    }

    fn decode_body(src: &mut impl Buf) -> Result<Self, DecodeError> {
        let animation = String::decode_bedrock(src)?;
        let next_state = String::decode_bedrock(src)?;
        let stop_expression = String::decode_bedrock(src)?;
        let stop_expression_version = i32::decode_bedrock(src)?;
        let controller = String::decode_bedrock(src)?;
        let blend_out_time = f32::decode_bedrock(src)?;

        let count = VarU32::decode_bedrock(src)?.0 as usize;
        // Every id is at least one byte; a count past the remaining
        // buffer can never decode.
        if count > src.remaining() {
            return Err(DecodeError::UnexpectedEof);
        }
        let mut actor_runtime_ids = Vec::with_capacity(count);
        for _ in 0..count {
            actor_runtime_ids.push(VarU64::decode_bedrock(src)?.0 as i64);
        }

        Ok(AnimateEntityPacket {
            animation,
            next_state,
            stop_expression,
            stop_expression_version,
            controller,
            blend_out_time,
            actor_runtime_ids,
        })
    }
}

impl ClientboundPacket for AnimateEntityPacket {}
