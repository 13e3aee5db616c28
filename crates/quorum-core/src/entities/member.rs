//! Member entity - a user's membership in a guild

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Guild member entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
    /// Account username, always present
    pub username: String,
    /// Per-guild nickname, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub role_ids: Vec<Snowflake>,
}

impl Member {
    /// Create a new Member
    pub fn new(guild_id: Snowflake, user_id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            guild_id,
            user_id,
            username: username.into(),
            nickname: None,
            role_ids: Vec::new(),
        }
    }

    /// Builder-style nickname setter
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Builder-style roles setter
    #[must_use]
    pub fn with_roles(mut self, role_ids: Vec<Snowflake>) -> Self {
        self.role_ids = role_ids;
        self
    }

    /// Get the name shown in rosters (nickname if set, otherwise username)
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }

    /// Check if the member holds a specific role
    #[inline]
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.role_ids.contains(&role_id)
    }
}
