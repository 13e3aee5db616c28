//! Gateway event kinds
//!
//! The wire names of events the synchronizer dispatches on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEventKind {
    /// Session established
    Ready,
    /// Left guild, kicked, or guild became unavailable
    GuildDelete,
    /// User status changed
    PresenceUpdate,
    /// Member list chunk arrived
    MemberChunk,
    /// New message
    MessageCreate,
    /// Message deleted
    MessageDelete,
    /// Unclassified event
    Raw,
}

impl GatewayEventKind {
    /// Get the string representation of the event kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::GuildDelete => "GUILD_DELETE",
            Self::PresenceUpdate => "PRESENCE_UPDATE",
            Self::MemberChunk => "GUILD_MEMBERS_CHUNK",
            Self::MessageCreate => "MESSAGE_CREATE",
            Self::MessageDelete => "MESSAGE_DELETE",
            Self::Raw => "RAW",
        }
    }

    /// Parse an event kind from its wire name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "READY" => Some(Self::Ready),
            "GUILD_DELETE" => Some(Self::GuildDelete),
            "PRESENCE_UPDATE" => Some(Self::PresenceUpdate),
            "GUILD_MEMBERS_CHUNK" => Some(Self::MemberChunk),
            "MESSAGE_CREATE" => Some(Self::MessageCreate),
            "MESSAGE_DELETE" => Some(Self::MessageDelete),
            "RAW" => Some(Self::Raw),
            _ => None,
        }
    }
}

impl fmt::Display for GatewayEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
