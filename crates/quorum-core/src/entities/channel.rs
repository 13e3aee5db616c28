//! Channel entity - a guild text channel or direct message
//!
//! Channels carry their permission overwrites; the store turns those into
//! the per-member visibility answer the classifier asks for.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Permissions, Snowflake};

/// Channel type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    /// Guild text channel
    #[default]
    GuildText,
    /// Direct message between users
    Dm,
    /// Guild category for organizing channels
    GuildCategory,
}

/// What a permission overwrite targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwriteKind {
    Role,
    Member,
}

/// A channel-level permission overwrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverwrite {
    /// Role id or user id, depending on `kind`
    pub id: Snowflake,
    pub kind: OverwriteKind,
    pub allow: Permissions,
    pub deny: Permissions,
}

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,
    /// None for direct-message channels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub channel_type: ChannelType,
    pub position: i32,
    #[serde(default)]
    pub overwrites: Vec<PermissionOverwrite>,
}

impl Channel {
    /// Create a new guild text channel
    #[must_use]
    pub fn new_text(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id: Some(guild_id),
            name: Some(name.into()),
            channel_type: ChannelType::GuildText,
            position: 0,
            overwrites: Vec::new(),
        }
    }

    /// Create a new DM channel
    #[must_use]
    pub fn new_dm(id: Snowflake) -> Self {
        Self {
            id,
            guild_id: None,
            name: None,
            channel_type: ChannelType::Dm,
            position: 0,
            overwrites: Vec::new(),
        }
    }

    /// Check if this is a DM channel
    #[inline]
    #[must_use]
    pub fn is_dm(&self) -> bool {
        matches!(self.channel_type, ChannelType::Dm)
    }

    /// Get display name (channel name or fallback for DMs)
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Direct Message")
    }

    /// Find the overwrite targeting a specific role or member, if any
    pub fn overwrite_for(&self, id: Snowflake, kind: OverwriteKind) -> Option<&PermissionOverwrite> {
        self.overwrites.iter().find(|o| o.id == id && o.kind == kind)
    }
}
