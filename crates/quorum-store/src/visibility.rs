//! Channel visibility computation
//!
//! Effective permissions follow the usual overwrite ladder: guild-level
//! role permissions as the base, then the everyone overwrite, then the
//! member's role overwrites in aggregate, then the member overwrite. Deny
//! bits are stripped before allow bits are added at each step.

use quorum_core::{Channel, Member, OverwriteKind, Permissions, Role};

/// Whether a member's effective channel permissions include `VIEW_CHANNEL`
///
/// `roles` must be the guild's full role list; roles the member does not
/// hold contribute nothing.
pub fn member_can_view(channel: &Channel, member: &Member, roles: &[Role]) -> bool {
    let everyone_id = member.guild_id;

    let base = Permissions::combine(
        roles
            .iter()
            .filter(|r| r.is_everyone() || member.has_role(r.id))
            .map(|r| r.permissions),
    );

    // Administrators bypass overwrites entirely
    if base.contains(Permissions::ADMINISTRATOR) {
        return true;
    }

    let mut effective = base;

    if let Some(ow) = channel.overwrite_for(everyone_id, OverwriteKind::Role) {
        effective = effective.apply_overwrite(ow.allow, ow.deny);
    }

    let mut role_allow = Permissions::empty();
    let mut role_deny = Permissions::empty();
    for ow in &channel.overwrites {
        if ow.kind == OverwriteKind::Role && ow.id != everyone_id && member.has_role(ow.id) {
            role_allow |= ow.allow;
            role_deny |= ow.deny;
        }
    }
    effective = effective.apply_overwrite(role_allow, role_deny);

    if let Some(ow) = channel.overwrite_for(member.user_id, OverwriteKind::Member) {
        effective = effective.apply_overwrite(ow.allow, ow.deny);
    }

    effective.contains(Permissions::VIEW_CHANNEL)
}
