//! View state and the commands that mutate it
//!
//! `ViewState` is what the terminal would draw: the current display trees,
//! the live message list, the selection, and the fetching-members flag.
//! It changes only through `ViewCommand`s applied in order on the
//! presentation sequence. Commands carry the guild/channel they were
//! derived for and are dropped when the selection has moved on; the event
//! that moved it re-derives anyway.

use quorum_core::{Message, Snowflake};
use quorum_view::DisplayTree;

/// Which view holds input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The guild/folder sidebar
    #[default]
    Hierarchy,
    /// The message list
    Messages,
    /// The member roster
    Roster,
}

/// Everything the terminal draws
#[derive(Debug, Default)]
pub struct ViewState {
    pub focus: Focus,
    pub selected_guild: Option<Snowflake>,
    pub selected_channel: Option<Snowflake>,
    /// Highlighted message; cleared on any delete-driven redraw
    pub selected_message: Option<Snowflake>,
    /// True while a member request is outstanding for the active view
    pub fetching_members: bool,
    pub hierarchy: DisplayTree,
    pub roster: DisplayTree,
    pub messages: Vec<Message>,
}

/// A display mutation marshaled onto the presentation sequence
#[derive(Debug)]
pub enum ViewCommand {
    /// Replace the sidebar tree wholesale; optionally take focus
    SetHierarchy { tree: DisplayTree, focus: bool },
    /// Record a new selection and mark members as being fetched
    SelectChannel {
        guild_id: Snowflake,
        channel_id: Snowflake,
    },
    /// Replace the roster tree built for a specific guild/channel
    SetRoster {
        guild_id: Snowflake,
        channel_id: Snowflake,
        tree: DisplayTree,
    },
    /// Append one message to the live list of a channel
    AppendMessage {
        channel_id: Snowflake,
        message: Message,
    },
    /// Replace the message list of a channel from the store
    RedrawMessages {
        channel_id: Snowflake,
        messages: Vec<Message>,
        clear_selection: bool,
    },
    /// Clear the fetching-members affordance
    SetFetchingMembers { fetching: bool },
    /// Drop any selection pointing into a purged guild
    ClearGuild { guild_id: Snowflake },
}

impl ViewState {
    /// Apply one command
    ///
    /// Stale commands (derived for a channel that is no longer selected)
    /// are dropped here, after the selection check, not at submit time.
    pub fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::SetHierarchy { tree, focus } => {
                self.hierarchy = tree;
                if focus {
                    self.focus = Focus::Hierarchy;
                }
            }
            ViewCommand::SelectChannel {
                guild_id,
                channel_id,
            } => {
                self.selected_guild = Some(guild_id);
                self.selected_channel = Some(channel_id);
                self.selected_message = None;
                self.fetching_members = true;
                self.focus = Focus::Messages;
            }
            ViewCommand::SetRoster {
                guild_id,
                channel_id,
                tree,
            } => {
                if self.selected_guild == Some(guild_id)
                    && self.selected_channel == Some(channel_id)
                {
                    self.roster = tree;
                } else {
                    tracing::trace!(
                        guild_id = %guild_id,
                        channel_id = %channel_id,
                        "Dropped stale roster"
                    );
                }
            }
            ViewCommand::AppendMessage {
                channel_id,
                message,
            } => {
                if self.selected_channel == Some(channel_id)
                    && !self.messages.iter().any(|m| m.id == message.id)
                {
                    self.messages.push(message);
                }
            }
            ViewCommand::RedrawMessages {
                channel_id,
                messages,
                clear_selection,
            } => {
                if self.selected_channel == Some(channel_id) {
                    if clear_selection {
                        self.selected_message = None;
                    }
                    self.messages = messages;
                }
            }
            ViewCommand::SetFetchingMembers { fetching } => {
                // Duplicate completion signals land here as a no-op
                self.fetching_members = fetching;
            }
            ViewCommand::ClearGuild { guild_id } => {
                if self.selected_guild == Some(guild_id) {
                    self.selected_guild = None;
                    self.selected_channel = None;
                    self.selected_message = None;
                    self.roster = DisplayTree::new();
                    self.messages.clear();
                    self.focus = Focus::Hierarchy;
                }
            }
        }
    }
}
