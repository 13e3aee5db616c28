//! Event payload definitions
//!
//! The data carried by each gateway event kind.

use serde::{Deserialize, Serialize};

use crate::entities::{Channel, Guild, GuildFolder, Member, Message, Role, Status};
use crate::value_objects::Snowflake;

/// READY event payload
///
/// Sent once per session; carries every guild the user is in plus the
/// folder ordering from user settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyEvent {
    /// Session ID for resuming
    pub session_id: String,
    /// The current user's id
    pub user_id: Snowflake,
    /// Sidebar folder ordering; singleton sentinel folders wrap bare guilds
    #[serde(default)]
    pub folders: Vec<GuildFolder>,
    /// Full state of each guild
    #[serde(default)]
    pub guilds: Vec<GuildSnapshot>,
}

/// Complete state of one guild as delivered at session start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildSnapshot {
    pub guild: Guild,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// GUILD_DELETE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildDeleteEvent {
    pub id: Snowflake,
    /// True for a temporary outage; false when the user left or was removed
    #[serde(default)]
    pub unavailable: bool,
}

/// PRESENCE_UPDATE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceUpdateEvent {
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
    pub status: Status,
}

/// GUILD_MEMBERS_CHUNK event payload
///
/// A slice of a guild's member list, sent in response to a member request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberChunkEvent {
    pub guild_id: Snowflake,
    #[serde(default)]
    pub members: Vec<Member>,
    pub chunk_index: u32,
    pub chunk_count: u32,
}

/// MESSAGE_CREATE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreateEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub message: Message,
}

/// MESSAGE_DELETE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDeleteEvent {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
}

/// An event the client does not model
///
/// Kept only so diagnostics can record what the gateway sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Opcode as received
    pub code: i32,
    /// Original event type name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Undecoded payload
    pub data: serde_json::Value,
}
