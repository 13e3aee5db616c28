//! Role entity - a guild role with display position and hoist flag

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::value_objects::{Permissions, Snowflake};

/// Role entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    /// RGB color packed as 0xRRGGBB; zero means "no color"
    pub color: i32,
    /// Whether members of this role are grouped separately in the roster
    pub hoist: bool,
    /// Hierarchical position; higher is more senior
    pub position: i32,
    pub permissions: Permissions,
}

impl Role {
    /// Create a new Role
    pub fn new(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id,
            name: name.into(),
            color: 0,
            hoist: false,
            position: 0,
            permissions: Permissions::empty(),
        }
    }

    /// Check if this is the synthetic everyone role of its guild
    #[inline]
    pub fn is_everyone(&self) -> bool {
        self.id == self.guild_id
    }

    /// Roster display order: position descending, id ascending
    ///
    /// The id tie-break keeps the order total even when positions collide.
    pub fn display_order(&self, other: &Role) -> Ordering {
        other
            .position
            .cmp(&self.position)
            .then_with(|| self.id.cmp(&other.id))
    }

    /// Get the color as a hex string (without #)
    pub fn color_hex(&self) -> String {
        format!("{:06x}", self.color)
    }

    /// Whether the role carries a non-default color
    #[inline]
    pub fn has_color(&self) -> bool {
        self.color != 0
    }
}
