//! Bedrock game-protocol primitives, packet definitions and packet IDs.
//!
//! This module houses the packet-ID catalogue, the header envelope,
//! encoding helpers and the concrete packet types consumed by the
//! session and transport layers built on top of this crate.

pub mod header;
pub mod ids;
pub mod packet;
pub mod types;
