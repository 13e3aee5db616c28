//! Synthetic guild state and gateway events

use quorum_core::{
    Channel, GatewayEvent, Guild, GuildFolder, GuildSnapshot, Member, MemberChunkEvent, Message,
    MessageCreateEvent, MessageDeleteEvent, Permissions, PresenceUpdateEvent, ReadyEvent, Role,
    Snowflake, Status,
};

pub const GUILD: i64 = 100;
pub const CHANNEL: i64 = 50;
pub const OWNER: i64 = 9;

/// A hoisted or plain role with the given position
pub fn role(id: i64, position: i32, hoist: bool, name: &str) -> Role {
    let mut r = Role::new(Snowflake::new(id), Snowflake::new(GUILD), name);
    r.position = position;
    r.hoist = hoist;
    r
}

/// The synthetic everyone role granting baseline visibility
pub fn everyone_role() -> Role {
    let mut r = Role::new(Snowflake::new(GUILD), Snowflake::new(GUILD), "@everyone");
    r.permissions = Permissions::DEFAULT;
    r
}

/// A member of the fixture guild
pub fn member(user_id: i64, name: &str, roles: Vec<i64>) -> Member {
    Member::new(Snowflake::new(GUILD), Snowflake::new(user_id), name)
        .with_roles(roles.into_iter().map(Snowflake::new).collect())
}

/// A full guild snapshot with the given extra roles and members
pub fn guild_snapshot(mut roles: Vec<Role>, members: Vec<Member>) -> GuildSnapshot {
    let guild_id = Snowflake::new(GUILD);
    roles.insert(0, everyone_role());
    GuildSnapshot {
        guild: Guild::new(guild_id, "fixture", Snowflake::new(OWNER)),
        roles,
        channels: vec![Channel::new_text(Snowflake::new(CHANNEL), guild_id, "general")],
        members,
    }
}

/// A ready event wrapping one guild snapshot in a sentinel folder
pub fn ready(snapshot: GuildSnapshot) -> GatewayEvent {
    GatewayEvent::Ready(ReadyEvent {
        session_id: "session".to_string(),
        user_id: Snowflake::new(OWNER),
        folders: vec![GuildFolder::singleton(snapshot.guild.id)],
        guilds: vec![snapshot],
    })
}

/// A presence update in the fixture guild
pub fn presence(user_id: i64, status: Status) -> GatewayEvent {
    GatewayEvent::PresenceUpdate(PresenceUpdateEvent {
        guild_id: Snowflake::new(GUILD),
        user_id: Snowflake::new(user_id),
        status,
    })
}

/// A single-chunk member list response
pub fn member_chunk(members: Vec<Member>) -> GatewayEvent {
    GatewayEvent::MemberChunk(MemberChunkEvent {
        guild_id: Snowflake::new(GUILD),
        members,
        chunk_index: 0,
        chunk_count: 1,
    })
}

/// A message in the given channel
pub fn message(id: i64, channel_id: i64, author: &str, content: &str) -> Message {
    Message::new(
        Snowflake::new(id),
        Snowflake::new(channel_id),
        Snowflake::new(201),
        author,
        content,
    )
}

/// A message-create event for the fixture guild
pub fn message_create(id: i64, channel_id: i64, content: &str) -> GatewayEvent {
    GatewayEvent::MessageCreate(MessageCreateEvent {
        guild_id: Some(Snowflake::new(GUILD)),
        message: message(id, channel_id, "alice", content),
    })
}

/// A message-delete event
pub fn message_delete(id: i64, channel_id: i64) -> GatewayEvent {
    GatewayEvent::MessageDelete(MessageDeleteEvent {
        id: Snowflake::new(id),
        channel_id: Snowflake::new(channel_id),
        guild_id: Some(Snowflake::new(GUILD)),
    })
}
