//! Stable game-packet IDs.
//!
//! Every value fits in the 10-bit pid field of the header envelope. Gaps in
//! the numeric sequence are IDs assigned to packets of protocol revisions
//! not carried by this crate; they stay reserved and are never renumbered,
//! so the catalogue remains wire-compatible with the reference protocol.

pub const LOGIN: u16 = 0x01;
pub const PLAY_STATUS: u16 = 0x02;
pub const SERVER_TO_CLIENT_HANDSHAKE: u16 = 0x03;
pub const CLIENT_TO_SERVER_HANDSHAKE: u16 = 0x04;
pub const DISCONNECT: u16 = 0x05;
pub const RESOURCE_PACKS_INFO: u16 = 0x06;
pub const RESOURCE_PACK_STACK: u16 = 0x07;
pub const RESOURCE_PACK_CLIENT_RESPONSE: u16 = 0x08;
pub const TEXT: u16 = 0x09;
pub const SET_TIME: u16 = 0x0a;
pub const START_GAME: u16 = 0x0b;
pub const ADD_PLAYER: u16 = 0x0c;
pub const ADD_ACTOR: u16 = 0x0d;
pub const REMOVE_ACTOR: u16 = 0x0e;
pub const ADD_ITEM_ACTOR: u16 = 0x0f;

pub const TAKE_ITEM_ACTOR: u16 = 0x11;
pub const MOVE_ACTOR_ABSOLUTE: u16 = 0x12;
pub const MOVE_PLAYER: u16 = 0x13;
pub const PASSENGER_JUMP: u16 = 0x14;
pub const UPDATE_BLOCK: u16 = 0x15;
pub const ADD_PAINTING: u16 = 0x16;
pub const TICK_SYNC: u16 = 0x17;
pub const LEVEL_SOUND_EVENT_V1: u16 = 0x18;
pub const LEVEL_EVENT: u16 = 0x19;
pub const BLOCK_EVENT: u16 = 0x1a;
pub const ACTOR_EVENT: u16 = 0x1b;
pub const MOB_EFFECT: u16 = 0x1c;
pub const UPDATE_ATTRIBUTES: u16 = 0x1d;
pub const INVENTORY_TRANSACTION: u16 = 0x1e;
pub const MOB_EQUIPMENT: u16 = 0x1f;
pub const MOB_ARMOR_EQUIPMENT: u16 = 0x20;
pub const INTERACT: u16 = 0x21;
pub const BLOCK_PICK_REQUEST: u16 = 0x22;
pub const ACTOR_PICK_REQUEST: u16 = 0x23;
pub const PLAYER_ACTION: u16 = 0x24;

pub const HURT_ARMOR: u16 = 0x26;
pub const SET_ACTOR_DATA: u16 = 0x27;
pub const SET_ACTOR_MOTION: u16 = 0x28;
pub const SET_ACTOR_LINK: u16 = 0x29;
pub const SET_HEALTH: u16 = 0x2a;
pub const SET_SPAWN_POSITION: u16 = 0x2b;
pub const ANIMATE: u16 = 0x2c;
pub const RESPAWN: u16 = 0x2d;
pub const CONTAINER_OPEN: u16 = 0x2e;
pub const CONTAINER_CLOSE: u16 = 0x2f;
pub const PLAYER_HOTBAR: u16 = 0x30;
pub const INVENTORY_CONTENT: u16 = 0x31;
pub const INVENTORY_SLOT: u16 = 0x32;
pub const CONTAINER_SET_DATA: u16 = 0x33;
pub const CRAFTING_DATA: u16 = 0x34;
pub const CRAFTING_EVENT: u16 = 0x35;
pub const GUI_DATA_PICK_ITEM: u16 = 0x36;
pub const ADVENTURE_SETTINGS: u16 = 0x37;
pub const BLOCK_ACTOR_DATA: u16 = 0x38;
pub const PLAYER_INPUT: u16 = 0x39;
pub const LEVEL_CHUNK: u16 = 0x3a;
pub const SET_COMMANDS_ENABLED: u16 = 0x3b;
pub const SET_DIFFICULTY: u16 = 0x3c;
pub const CHANGE_DIMENSION: u16 = 0x3d;
pub const SET_PLAYER_GAME_TYPE: u16 = 0x3e;
pub const PLAYER_LIST: u16 = 0x3f;
pub const SIMPLE_EVENT: u16 = 0x40;
pub const EVENT: u16 = 0x41;
pub const SPAWN_EXPERIENCE_ORB: u16 = 0x42;
pub const CLIENTBOUND_MAP_ITEM_DATA: u16 = 0x43;
pub const MAP_INFO_REQUEST: u16 = 0x44;
pub const REQUEST_CHUNK_RADIUS: u16 = 0x45;
pub const CHUNK_RADIUS_UPDATED: u16 = 0x46;
pub const ITEM_FRAME_DROP_ITEM: u16 = 0x47;
pub const GAME_RULES_CHANGED: u16 = 0x48;
pub const CAMERA: u16 = 0x49;
pub const BOSS_EVENT: u16 = 0x4a;
pub const SHOW_CREDITS: u16 = 0x4b;
pub const AVAILABLE_COMMANDS: u16 = 0x4c;
pub const COMMAND_REQUEST: u16 = 0x4d;
pub const COMMAND_BLOCK_UPDATE: u16 = 0x4e;
pub const COMMAND_OUTPUT: u16 = 0x4f;
pub const UPDATE_TRADE: u16 = 0x50;
pub const UPDATE_EQUIP: u16 = 0x51;
pub const RESOURCE_PACK_DATA_INFO: u16 = 0x52;
pub const RESOURCE_PACK_CHUNK_DATA: u16 = 0x53;
pub const RESOURCE_PACK_CHUNK_REQUEST: u16 = 0x54;
pub const TRANSFER: u16 = 0x55;
pub const PLAY_SOUND: u16 = 0x56;
pub const STOP_SOUND: u16 = 0x57;
pub const SET_TITLE: u16 = 0x58;
pub const ADD_BEHAVIOR_TREE: u16 = 0x59;
pub const STRUCTURE_BLOCK_UPDATE: u16 = 0x5a;
pub const SHOW_STORE_OFFER: u16 = 0x5b;
pub const PURCHASE_RECEIPT: u16 = 0x5c;
pub const PLAYER_SKIN: u16 = 0x5d;
pub const SUB_CLIENT_LOGIN: u16 = 0x5e;
pub const AUTOMATION_CLIENT_CONNECT: u16 = 0x5f;
pub const SET_LAST_HURT_BY: u16 = 0x60;
pub const BOOK_EDIT: u16 = 0x61;
pub const NPC_REQUEST: u16 = 0x62;
pub const PHOTO_TRANSFER: u16 = 0x63;
pub const MODAL_FORM_REQUEST: u16 = 0x64;
pub const MODAL_FORM_RESPONSE: u16 = 0x65;
pub const SERVER_SETTINGS_REQUEST: u16 = 0x66;
pub const SERVER_SETTINGS_RESPONSE: u16 = 0x67;
pub const SHOW_PROFILE: u16 = 0x68;
pub const SET_DEFAULT_GAME_TYPE: u16 = 0x69;
pub const REMOVE_OBJECTIVE: u16 = 0x6a;
pub const SET_DISPLAY_OBJECTIVE: u16 = 0x6b;
pub const SET_SCORE: u16 = 0x6c;
pub const LAB_TABLE: u16 = 0x6d;
pub const UPDATE_BLOCK_SYNCED: u16 = 0x6e;
pub const MOVE_ACTOR_DELTA: u16 = 0x6f;
pub const SET_SCOREBOARD_IDENTITY: u16 = 0x70;
pub const SET_LOCAL_PLAYER_AS_INITIALIZED: u16 = 0x71;
pub const UPDATE_SOFT_ENUM: u16 = 0x72;
pub const NETWORK_STACK_LATENCY: u16 = 0x73;

pub const SCRIPT_CUSTOM_EVENT: u16 = 0x75;
pub const SPAWN_PARTICLE_EFFECT: u16 = 0x76;
pub const AVAILABLE_ACTOR_IDENTIFIERS: u16 = 0x77;
pub const LEVEL_SOUND_EVENT_V2: u16 = 0x78;
pub const NETWORK_CHUNK_PUBLISHER_UPDATE: u16 = 0x79;
pub const BIOME_DEFINITION_LIST: u16 = 0x7a;
pub const LEVEL_SOUND_EVENT: u16 = 0x7b;
pub const LEVEL_EVENT_GENERIC: u16 = 0x7c;
pub const LECTERN_UPDATE: u16 = 0x7d;

pub const ADD_ENTITY: u16 = 0x7f;
pub const REMOVE_ENTITY: u16 = 0x80;
pub const CLIENT_CACHE_STATUS: u16 = 0x81;
pub const ON_SCREEN_TEXTURE_ANIMATION: u16 = 0x82;
pub const MAP_CREATE_LOCKED_COPY: u16 = 0x83;
pub const STRUCTURE_TEMPLATE_DATA_REQUEST: u16 = 0x84;
pub const STRUCTURE_TEMPLATE_DATA_RESPONSE: u16 = 0x85;

pub const CLIENT_CACHE_BLOB_STATUS: u16 = 0x87;
pub const CLIENT_CACHE_MISS_RESPONSE: u16 = 0x88;
pub const EDUCATION_SETTINGS: u16 = 0x89;
pub const EMOTE: u16 = 0x8a;
pub const MULTIPLAYER_SETTINGS: u16 = 0x8b;
pub const SETTINGS_COMMAND: u16 = 0x8c;
pub const ANVIL_DAMAGE: u16 = 0x8d;
pub const COMPLETED_USING_ITEM: u16 = 0x8e;
pub const NETWORK_SETTINGS: u16 = 0x8f;
pub const PLAYER_AUTH_INPUT: u16 = 0x90;
pub const CREATIVE_CONTENT: u16 = 0x91;
pub const PLAYER_ENCHANT_OPTIONS: u16 = 0x92;
pub const ITEM_STACK_REQUEST: u16 = 0x93;
pub const ITEM_STACK_RESPONSE: u16 = 0x94;
pub const PLAYER_ARMOR_DAMAGE: u16 = 0x95;
pub const CODE_BUILDER: u16 = 0x96;
pub const UPDATE_PLAYER_GAME_TYPE: u16 = 0x97;
pub const EMOTE_LIST: u16 = 0x98;
pub const POSITION_TRACKING_DB_SERVER_BROADCAST: u16 = 0x99;
pub const POSITION_TRACKING_DB_CLIENT_REQUEST: u16 = 0x9a;
pub const DEBUG_INFO: u16 = 0x9b;
pub const PACKET_VIOLATION_WARNING: u16 = 0x9c;
pub const MOTION_PREDICTION_HINTS: u16 = 0x9d;
pub const ANIMATE_ENTITY: u16 = 0x9e;
pub const CAMERA_SHAKE: u16 = 0x9f;
pub const PLAYER_FOG: u16 = 0xa0;
pub const CORRECT_PLAYER_MOVE_PREDICTION: u16 = 0xa1;
pub const ITEM_COMPONENT: u16 = 0xa2;
pub const FILTER_TEXT: u16 = 0xa3;
pub const CLIENTBOUND_DEBUG_RENDERER: u16 = 0xa4;
pub const SYNC_ACTOR_PROPERTY: u16 = 0xa5;
pub const ADD_VOLUME_ENTITY: u16 = 0xa6;
pub const REMOVE_VOLUME_ENTITY: u16 = 0xa7;
pub const SIMULATION_TYPE: u16 = 0xa8;
pub const NPC_DIALOGUE: u16 = 0xa9;
pub const EDU_URI_RESOURCE: u16 = 0xaa;
pub const CREATE_PHOTO: u16 = 0xab;
pub const UPDATE_SUB_CHUNK_BLOCKS: u16 = 0xac;
pub const PHOTO_INFO_REQUEST: u16 = 0xad;
pub const SUB_CHUNK: u16 = 0xae;
pub const SUB_CHUNK_REQUEST: u16 = 0xaf;
pub const PLAYER_START_ITEM_COOLDOWN: u16 = 0xb0;
pub const SCRIPT_MESSAGE: u16 = 0xb1;
pub const CODE_BUILDER_SOURCE: u16 = 0xb2;
pub const TICKING_AREAS_LOAD_STATUS: u16 = 0xb3;
pub const DIMENSION_DATA: u16 = 0xb4;
pub const AGENT_ACTION_EVENT: u16 = 0xb5;
pub const CHANGE_MOB_PROPERTY: u16 = 0xb6;
