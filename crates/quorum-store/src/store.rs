//! The snapshot store
//!
//! Single source of truth for server-pushed state. Guild state lives in
//! whole-record entries of a `DashMap`, so every query copies out a
//! consistent pre- or post-mutation view of the entity it asks about.
//! Mutators are invoked exclusively by the event synchronizer, which
//! applies one event at a time from the inbound stream; queries may run
//! concurrently from any context. All apply operations are last-write-wins
//! keyed by entity id, which makes duplicate delivery a no-op.

use dashmap::DashMap;
use parking_lot::RwLock;

use quorum_core::{
    Channel, DomainError, Guild, GuildFolder, GuildSnapshot, Member, MemberChunkEvent, Message,
    PresenceUpdateEvent, ReadyEvent, Role, SnapshotQuery, Snowflake, Status,
};

use crate::record::GuildRecord;
use crate::visibility::member_can_view;

/// Latest known state of guilds, channels, members, presences, and messages
#[derive(Default)]
pub struct SnapshotStore {
    /// Guild state keyed by guild id
    guilds: DashMap<Snowflake, GuildRecord>,

    /// Channel id to owning guild id
    channel_index: DashMap<Snowflake, Snowflake>,

    /// Presence keyed by (guild, user); absence means offline
    presences: DashMap<(Snowflake, Snowflake), Status>,

    /// Ordered message list per channel
    messages: DashMap<Snowflake, Vec<Message>>,

    /// Sidebar folder ordering from user settings
    folders: RwLock<Vec<GuildFolder>>,
}

impl SnapshotStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutators - invoked exclusively by the event synchronizer
    // =========================================================================

    /// Apply the session-start state: folder ordering plus one snapshot per guild
    pub fn apply_ready(&self, ready: ReadyEvent) {
        *self.folders.write() = ready.folders;

        for snapshot in ready.guilds {
            self.apply_guild_snapshot(snapshot);
        }

        tracing::debug!(guilds = self.guilds.len(), "Applied ready state");
    }

    /// Insert or replace the full state of one guild
    pub fn apply_guild_snapshot(&self, snapshot: GuildSnapshot) {
        let guild_id = snapshot.guild.id;
        let record = GuildRecord::from_snapshot(snapshot);

        // Re-index channels: drop stale entries for this guild first
        self.channel_index.retain(|_, owner| *owner != guild_id);
        for channel_id in record.channels.keys() {
            self.channel_index.insert(*channel_id, guild_id);
        }

        self.guilds.insert(guild_id, record);

        tracing::debug!(guild_id = %guild_id, "Applied guild snapshot");
    }

    /// Record a presence change (last-write-wins per (guild, user))
    pub fn apply_presence_update(&self, event: &PresenceUpdateEvent) {
        self.presences
            .insert((event.guild_id, event.user_id), event.status);

        tracing::trace!(
            guild_id = %event.guild_id,
            user_id = %event.user_id,
            status = %event.status,
            "Applied presence update"
        );
    }

    /// Merge a member list chunk into its guild
    ///
    /// Returns false when the guild has never been seen; the chunk is
    /// dropped rather than fabricating a guild record.
    pub fn apply_member_chunk(&self, event: MemberChunkEvent) -> bool {
        match self.guilds.get_mut(&event.guild_id) {
            Some(mut record) => {
                record.upsert_members(event.members);
                tracing::trace!(
                    guild_id = %event.guild_id,
                    chunk = event.chunk_index,
                    of = event.chunk_count,
                    "Applied member chunk"
                );
                true
            }
            None => {
                tracing::debug!(
                    guild_id = %event.guild_id,
                    "Member chunk for unknown guild, dropped"
                );
                false
            }
        }
    }

    /// Append a message to its channel's list
    ///
    /// A message with an already-known id replaces the stored one in place,
    /// so duplicate delivery cannot grow the list. Returns true when the
    /// message was new.
    pub fn apply_message_create(&self, message: Message) -> bool {
        let mut list = self.messages.entry(message.channel_id).or_default();
        match list.iter_mut().find(|m| m.id == message.id) {
            Some(slot) => {
                *slot = message;
                false
            }
            None => {
                list.push(message);
                true
            }
        }
    }

    /// Remove a message from its channel's list
    ///
    /// Returns true when the message was present; deleting an unknown
    /// message is a no-op.
    pub fn apply_message_delete(&self, channel_id: Snowflake, message_id: Snowflake) -> bool {
        match self.messages.get_mut(&channel_id) {
            Some(mut list) => {
                let before = list.len();
                list.retain(|m| m.id != message_id);
                before != list.len()
            }
            None => false,
        }
    }

    /// Purge every guild-scoped entry after a leave/unavailable event
    pub fn purge_guild(&self, guild_id: Snowflake) {
        self.guilds.remove(&guild_id);

        let channel_ids: Vec<Snowflake> = self
            .channel_index
            .iter()
            .filter(|entry| *entry.value() == guild_id)
            .map(|entry| *entry.key())
            .collect();
        for channel_id in &channel_ids {
            self.channel_index.remove(channel_id);
            self.messages.remove(channel_id);
        }

        self.presences.retain(|(g, _), _| *g != guild_id);

        let mut folders = self.folders.write();
        for folder in folders.iter_mut() {
            folder.guild_ids.retain(|id| *id != guild_id);
        }
        folders.retain(|f| !f.guild_ids.is_empty());

        tracing::debug!(
            guild_id = %guild_id,
            channels = channel_ids.len(),
            "Purged guild state"
        );
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Sidebar folder ordering
    pub fn folders(&self) -> Vec<GuildFolder> {
        self.folders.read().clone()
    }

    /// Members of a guild in first-seen order
    pub fn members(&self, guild_id: Snowflake) -> Result<Vec<Member>, DomainError> {
        self.guilds
            .get(&guild_id)
            .map(|r| r.members.clone())
            .ok_or(DomainError::GuildNotFound(guild_id))
    }

    /// A guild's channels sorted by (position, id)
    pub fn channels(&self, guild_id: Snowflake) -> Result<Vec<Channel>, DomainError> {
        let record = self
            .guilds
            .get(&guild_id)
            .ok_or(DomainError::GuildNotFound(guild_id))?;
        let mut channels: Vec<Channel> = record.channels.values().cloned().collect();
        channels.sort_by_key(|c| (c.position, c.id));
        Ok(channels)
    }

    /// Look up a single channel
    pub fn channel(&self, channel_id: Snowflake) -> Result<Channel, DomainError> {
        let guild_id = self
            .channel_index
            .get(&channel_id)
            .map(|g| *g)
            .ok_or(DomainError::ChannelNotFound(channel_id))?;
        self.guilds
            .get(&guild_id)
            .and_then(|r| r.channels.get(&channel_id).cloned())
            .ok_or(DomainError::ChannelNotFound(channel_id))
    }

    /// The guild that owns a channel, if known
    pub fn guild_for_channel(&self, channel_id: Snowflake) -> Option<Snowflake> {
        self.channel_index.get(&channel_id).map(|g| *g)
    }

    /// The stored message list of a channel, oldest first
    pub fn messages(&self, channel_id: Snowflake) -> Vec<Message> {
        self.messages
            .get(&channel_id)
            .map(|list| list.clone())
            .unwrap_or_default()
    }
}

impl SnapshotQuery for SnapshotStore {
    fn guild(&self, guild_id: Snowflake) -> Result<Guild, DomainError> {
        self.guilds
            .get(&guild_id)
            .map(|r| r.guild.clone())
            .ok_or(DomainError::GuildNotFound(guild_id))
    }

    fn roles(&self, guild_id: Snowflake) -> Result<Vec<Role>, DomainError> {
        self.guilds
            .get(&guild_id)
            .map(|r| r.roles.clone())
            .ok_or(DomainError::RolesUnavailable(guild_id))
    }

    fn presence(&self, guild_id: Snowflake, user_id: Snowflake) -> Option<Status> {
        self.presences.get(&(guild_id, user_id)).map(|s| *s)
    }

    fn member_visible_in_channel(&self, channel_id: Snowflake, user_id: Snowflake) -> bool {
        let Some(guild_id) = self.guild_for_channel(channel_id) else {
            return false;
        };

        // Copy what the check needs and drop the guard before computing
        let (channel, member, roles, is_owner) = {
            let Some(record) = self.guilds.get(&guild_id) else {
                return false;
            };
            let Some(channel) = record.channels.get(&channel_id).cloned() else {
                return false;
            };
            let Some(member) = record.member(user_id).cloned() else {
                return false;
            };
            let is_owner = record.guild.is_owner(user_id);
            (channel, member, record.roles.clone(), is_owner)
        };

        // Guild owners see everything
        if is_owner {
            return true;
        }

        member_can_view(&channel, &member, &roles)
    }
}
