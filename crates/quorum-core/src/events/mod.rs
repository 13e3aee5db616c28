//! Gateway events delivered by the transport collaborator

mod event_kind;
mod payloads;

pub use event_kind::GatewayEventKind;
pub use payloads::{
    GuildDeleteEvent, GuildSnapshot, MemberChunkEvent, MessageCreateEvent, MessageDeleteEvent,
    PresenceUpdateEvent, RawEvent, ReadyEvent,
};

use serde::{Deserialize, Serialize};

/// A typed lifecycle event from the gateway connection
///
/// The transport collaborator delivers these over a single ordered inbound
/// stream per connection; the synchronizer dispatches on the variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", content = "d", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEvent {
    /// Session established; carries the full initial state
    Ready(ReadyEvent),
    /// Left guild, kicked, or guild became unavailable
    GuildDelete(GuildDeleteEvent),
    /// A user's status changed
    PresenceUpdate(PresenceUpdateEvent),
    /// A requested slice of a guild's member list arrived
    #[serde(rename = "GUILD_MEMBERS_CHUNK")]
    MemberChunk(MemberChunkEvent),
    /// New message
    MessageCreate(MessageCreateEvent),
    /// Message deleted
    MessageDelete(MessageDeleteEvent),
    /// Anything the client does not model; recorded for diagnostics only
    Raw(RawEvent),
}

impl GatewayEvent {
    /// The kind tag used for dispatch and diagnostics
    #[must_use]
    pub const fn kind(&self) -> GatewayEventKind {
        match self {
            Self::Ready(_) => GatewayEventKind::Ready,
            Self::GuildDelete(_) => GatewayEventKind::GuildDelete,
            Self::PresenceUpdate(_) => GatewayEventKind::PresenceUpdate,
            Self::MemberChunk(_) => GatewayEventKind::MemberChunk,
            Self::MessageCreate(_) => GatewayEventKind::MessageCreate,
            Self::MessageDelete(_) => GatewayEventKind::MessageDelete,
            Self::Raw(_) => GatewayEventKind::Raw,
        }
    }
}
