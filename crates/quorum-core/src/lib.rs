//! # quorum-core
//!
//! Domain layer for the roster synchronization engine: entities, value
//! objects, gateway event types, and the query trait the view layer reads
//! snapshots through. This crate has zero dependencies on infrastructure
//! (transport, terminal toolkit, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Channel, ChannelType, Guild, GuildFolder, Member, Message, OverwriteKind,
    PermissionOverwrite, Role, Status,
};
pub use error::DomainError;
pub use events::{
    GatewayEvent, GatewayEventKind, GuildDeleteEvent, GuildSnapshot, MemberChunkEvent,
    MessageCreateEvent, MessageDeleteEvent, PresenceUpdateEvent, RawEvent, ReadyEvent,
};
pub use traits::SnapshotQuery;
pub use value_objects::{Permissions, Snowflake, SnowflakeParseError};
