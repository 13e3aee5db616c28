//! Guild folder - user-ordered grouping of guilds in the sidebar

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// A folder in the guild sidebar
///
/// The server wraps every guild in a folder; guilds outside a real folder
/// arrive in a singleton folder with the zero sentinel id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildFolder {
    pub id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Folder accent color packed as 0xRRGGBB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i32>,
    pub guild_ids: Vec<Snowflake>,
}

impl GuildFolder {
    /// Create a real folder
    pub fn new(id: Snowflake, name: impl Into<String>, guild_ids: Vec<Snowflake>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            color: None,
            guild_ids,
        }
    }

    /// Wrap a single guild in the sentinel folder
    pub fn singleton(guild_id: Snowflake) -> Self {
        Self {
            id: Snowflake::default(),
            name: None,
            color: None,
            guild_ids: vec![guild_id],
        }
    }

    /// A sentinel folder holding exactly one guild renders as a bare guild
    /// node, not a folder wrapper.
    #[inline]
    pub fn is_bare_guild(&self) -> bool {
        self.id.is_zero() && self.guild_ids.len() == 1
    }

    /// Label shown on the folder node
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed folder")
    }
}
