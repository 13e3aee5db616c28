//! Read-only snapshot queries
//!
//! The seam between the snapshot store and the derivation layer. Queries
//! are synchronous and report ordinary absence through `Result`/`Option`,
//! never by panicking.

use crate::entities::{Guild, Role, Status};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Point-in-time queries against the latest known state
///
/// Implementations must be safe to call concurrently with mutation under a
/// per-entity atomicity guarantee: a caller observes either the pre- or
/// post-mutation record, never a partially updated one.
pub trait SnapshotQuery {
    /// Look up a guild by id
    fn guild(&self, guild_id: Snowflake) -> Result<Guild, DomainError>;

    /// All roles of a guild, sorted by display order (position desc, id asc)
    ///
    /// Fails with [`DomainError::RolesUnavailable`] when the guild's roles
    /// have never been received; callers abort their rebuild and keep the
    /// previous display.
    fn roles(&self, guild_id: Snowflake) -> Result<Vec<Role>, DomainError>;

    /// A user's presence in a guild; `None` means never received and is
    /// treated identically to [`Status::Offline`]
    fn presence(&self, guild_id: Snowflake, user_id: Snowflake) -> Option<Status>;

    /// Whether channel-specific permission overwrites admit the user
    ///
    /// An unknown channel or guild yields `false` (render nothing), never
    /// an error.
    fn member_visible_in_channel(&self, channel_id: Snowflake, user_id: Snowflake) -> bool;
}
