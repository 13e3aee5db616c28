//! Domain errors
//!
//! Three conditions matter to callers: an entity is absent (render nothing
//! for it), a required source could not be fetched (abort the rebuild and
//! keep the last good display), or a collaborator side effect failed (log
//! and continue).

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found - non-fatal, render-as-empty
    // =========================================================================
    #[error("Guild not found: {0}")]
    GuildNotFound(Snowflake),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Snowflake),

    #[error("Member not found in guild {guild_id}: {user_id}")]
    MemberNotFound {
        guild_id: Snowflake,
        user_id: Snowflake,
    },

    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    // =========================================================================
    // Source Unavailable - abort this rebuild, preserve last good display
    // =========================================================================
    #[error("Roles unavailable for guild {0}")]
    RolesUnavailable(Snowflake),

    // =========================================================================
    // Collaborator Failure - log and continue, never aborts synchronization
    // =========================================================================
    #[error("Notification delivery failed: {0}")]
    Notification(String),
}

impl DomainError {
    /// Check if this is a "not found" condition (render-as-empty)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GuildNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::MemberNotFound { .. }
                | Self::MessageNotFound(_)
        )
    }

    /// Check if a required data source could not be fetched
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::RolesUnavailable(_))
    }

    /// Check if a collaborator side effect failed
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Self::Notification(_))
    }
}
