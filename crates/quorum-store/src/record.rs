//! Per-guild state record
//!
//! One record holds everything the store knows about a guild. A record is
//! read and replaced as a unit, so readers never observe a half-applied
//! mutation.

use std::collections::HashMap;

use quorum_core::{Channel, Guild, GuildSnapshot, Member, Role, Snowflake};

/// Everything known about one guild
#[derive(Debug, Clone)]
pub struct GuildRecord {
    pub guild: Guild,
    /// Kept sorted by display order (position desc, id asc)
    pub roles: Vec<Role>,
    pub channels: HashMap<Snowflake, Channel>,
    /// First-seen order; upserts replace in place so classification input
    /// order stays stable across presence and role churn
    pub members: Vec<Member>,
}

impl GuildRecord {
    /// Build a record from a full guild snapshot
    pub fn from_snapshot(snapshot: GuildSnapshot) -> Self {
        let mut roles = snapshot.roles;
        roles.sort_by(|a, b| a.display_order(b));

        let channels = snapshot
            .channels
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut record = Self {
            guild: snapshot.guild,
            roles,
            channels,
            members: Vec::new(),
        };
        record.upsert_members(snapshot.members);
        record
    }

    /// Find a member by user id
    pub fn member(&self, user_id: Snowflake) -> Option<&Member> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    /// Insert or replace members, keyed by user id
    ///
    /// Existing members are replaced at their current position; new ones
    /// append at the end.
    pub fn upsert_members(&mut self, members: Vec<Member>) {
        for member in members {
            match self.members.iter_mut().find(|m| m.user_id == member.user_id) {
                Some(slot) => *slot = member,
                None => self.members.push(member),
            }
        }
    }
}
