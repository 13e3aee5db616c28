//! Message entity - a chat message with opaque content

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub author_id: Snowflake,
    /// Author name resolved at event time; display-only
    pub author_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new Message
    pub fn new(
        id: Snowflake,
        channel_id: Snowflake,
        author_id: Snowflake,
        author_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            channel_id,
            author_id,
            author_name: author_name.into(),
            content: content.into(),
            timestamp: id.created_at(),
        }
    }
}
