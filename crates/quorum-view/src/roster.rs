//! Roster classification
//!
//! Partitions a guild's members into hoisted-role groups, an ungrouped
//! online bucket, and a terminal offline bucket. Every member lands in
//! exactly one bucket per run, and the grouping depends only on the
//! snapshot handed in, so rebuilding from scratch is always safe.

use std::collections::HashSet;

use quorum_core::{DomainError, Member, SnapshotQuery, Snowflake, Status};

/// One member as shown in the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEntry {
    pub user_id: Snowflake,
    pub name: String,
    pub status: Status,
}

impl MemberEntry {
    fn new(member: &Member, status: Status) -> Self {
        Self {
            user_id: member.user_id,
            name: member.display_name().to_string(),
            status,
        }
    }
}

/// A hoisted-role group with its online members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterGroup {
    /// Role name; the presenter appends the member count
    pub label: String,
    /// Role color as a hex string, when the role has one
    pub color: Option<String>,
    pub members: Vec<MemberEntry>,
}

/// The classified roster of one guild/channel pair
///
/// Transient: recomputed wholesale on every relevant event, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    /// Hoisted-role groups in display order (role position desc, id asc)
    pub groups: Vec<RosterGroup>,
    /// Online members claimed by no hoisted role; rendered without a group
    pub ungrouped: Vec<MemberEntry>,
    /// Everyone else; always present, possibly empty
    pub offline: Vec<MemberEntry>,
}

impl Roster {
    /// Total number of classified members across all buckets
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum::<usize>()
            + self.ungrouped.len()
            + self.offline.len()
    }

    /// Whether no member was classified at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify a guild's members for display against one channel
///
/// Role seniority decides group order and claims: a member holding several
/// hoisted roles lands in the most senior one. A member whose presence was
/// never received counts as offline. Channel visibility filters the
/// role-group passes only; the offline bucket does not re-check it.
///
/// Fails with [`DomainError::RolesUnavailable`] when roles cannot be
/// fetched; the caller must leave the previous roster display untouched.
pub fn classify(
    source: &impl SnapshotQuery,
    guild_id: Snowflake,
    channel_id: Snowflake,
    members: &[Member],
) -> Result<Roster, DomainError> {
    let mut roles = source.roles(guild_id)?;
    roles.sort_by(|a, b| a.display_order(b));

    let status_of =
        |member: &Member| source.presence(guild_id, member.user_id).unwrap_or_default();

    let mut claimed: HashSet<Snowflake> = HashSet::new();
    let mut roster = Roster::default();

    for role in &roles {
        if role.is_everyone() || !role.hoist {
            continue;
        }

        let mut group_members = Vec::new();
        for member in members {
            if claimed.contains(&member.user_id) {
                continue;
            }

            let status = status_of(member);
            if status.is_offline() {
                continue;
            }

            if member.has_role(role.id)
                && source.member_visible_in_channel(channel_id, member.user_id)
            {
                group_members.push(MemberEntry::new(member, status));
                claimed.insert(member.user_id);
            }
        }

        if !group_members.is_empty() {
            roster.groups.push(RosterGroup {
                label: role.name.clone(),
                color: role.has_color().then(|| role.color_hex()),
                members: group_members,
            });
        }
    }

    // Online members no hoisted role claimed
    for member in members {
        if claimed.contains(&member.user_id) {
            continue;
        }

        let status = status_of(member);
        if status.is_offline() {
            continue;
        }

        roster.ungrouped.push(MemberEntry::new(member, status));
        claimed.insert(member.user_id);
    }

    // Everyone else is offline (or was never seen in presence data)
    for member in members {
        if claimed.contains(&member.user_id) {
            continue;
        }

        roster.offline.push(MemberEntry::new(member, status_of(member)));
        claimed.insert(member.user_id);
    }

    Ok(roster)
}
