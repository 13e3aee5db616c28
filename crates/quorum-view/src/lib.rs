//! # quorum-view
//!
//! Pure derivation from snapshot state to display structures: the roster
//! classifier groups a guild's members by hoisted role and presence, and
//! the tree presenter turns rosters and the guild/folder hierarchy into
//! display trees. Nothing here mutates state or touches the terminal.

mod roster;
mod tree;

pub use roster::{classify, MemberEntry, Roster, RosterGroup};
pub use tree::{render_guild_hierarchy, render_roster, DisplayTree, TreeNode};
