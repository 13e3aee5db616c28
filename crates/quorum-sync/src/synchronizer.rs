//! Gateway event dispatch
//!
//! One handler per event kind, matched explicitly so unit tests can drive
//! handlers with synthetic events. Every handler isolates its own
//! failures: a failed rebuild or collaborator call is logged and the
//! previous display stays on screen.

use std::sync::Arc;

use tokio::sync::mpsc;

use quorum_common::Theme;
use quorum_core::{
    DomainError, GatewayEvent, GuildDeleteEvent, MemberChunkEvent, MessageCreateEvent,
    MessageDeleteEvent, PresenceUpdateEvent, RawEvent, ReadyEvent, Snowflake,
};
use quorum_store::SnapshotStore;
use quorum_view::{classify, render_guild_hierarchy, render_roster};

use crate::notifier::Notifier;
use crate::presentation::Presentation;
use crate::view_state::ViewCommand;

/// Applies gateway events to the store and drives selective redraws
pub struct Synchronizer {
    store: Arc<SnapshotStore>,
    notifier: Arc<dyn Notifier>,
    presentation: Arc<Presentation>,
    theme: Theme,
}

impl Synchronizer {
    /// Create a synchronizer over a store, notifier, and presentation handle
    pub fn new(
        store: Arc<SnapshotStore>,
        notifier: Arc<dyn Notifier>,
        presentation: Arc<Presentation>,
        theme: Theme,
    ) -> Self {
        Self {
            store,
            notifier,
            presentation,
            theme,
        }
    }

    /// Consume the inbound event stream until the transport closes it
    pub async fn run(self: Arc<Self>, mut rx: mpsc::UnboundedReceiver<GatewayEvent>) {
        while let Some(event) = rx.recv().await {
            self.dispatch(event).await;
        }
        tracing::info!("Gateway event stream closed, synchronizer stopped");
    }

    /// Route one event to its handler
    pub async fn dispatch(&self, event: GatewayEvent) {
        tracing::trace!(event = %event.kind(), "Dispatching gateway event");

        match event {
            GatewayEvent::Ready(ev) => self.on_ready(ev),
            GatewayEvent::GuildDelete(ev) => self.on_guild_delete(&ev),
            GatewayEvent::PresenceUpdate(ev) => self.on_presence_update(&ev),
            GatewayEvent::MemberChunk(ev) => self.on_member_chunk(ev),
            GatewayEvent::MessageCreate(ev) => self.on_message_create(ev).await,
            GatewayEvent::MessageDelete(ev) => self.on_message_delete(&ev),
            GatewayEvent::Raw(ev) => Self::on_raw(&ev),
        }
    }

    /// Session established: rebuild the guild hierarchy from scratch and
    /// focus it
    pub fn on_ready(&self, event: ReadyEvent) {
        self.store.apply_ready(event);

        let tree =
            render_guild_hierarchy(&self.store.folders(), self.store.as_ref(), &self.theme);
        self.presentation
            .submit(ViewCommand::SetHierarchy { tree, focus: true });
    }

    /// Guild left or unavailable: purge its state wholesale and drop any
    /// selection pointing into it
    pub fn on_guild_delete(&self, event: &GuildDeleteEvent) {
        self.store.purge_guild(event.id);

        self.presentation
            .submit(ViewCommand::ClearGuild { guild_id: event.id });

        let tree =
            render_guild_hierarchy(&self.store.folders(), self.store.as_ref(), &self.theme);
        self.presentation
            .submit(ViewCommand::SetHierarchy { tree, focus: false });

        tracing::debug!(
            guild_id = %event.id,
            unavailable = event.unavailable,
            "Guild removed"
        );
    }

    /// Presence changed: mutate the store, then re-classify only when the
    /// event touches the currently selected guild
    pub fn on_presence_update(&self, event: &PresenceUpdateEvent) {
        self.store.apply_presence_update(event);

        if self.presentation.selected_guild() != Some(event.guild_id) {
            return;
        }
        let Some(channel_id) = self.presentation.selected_channel() else {
            return;
        };

        self.rebuild_roster(event.guild_id, channel_id);
    }

    /// Member chunk arrived: merge it and clear the loading affordance
    pub fn on_member_chunk(&self, event: MemberChunkEvent) {
        self.store.apply_member_chunk(event);

        self.presentation
            .submit(ViewCommand::SetFetchingMembers { fetching: false });
    }

    /// New message: patch the live view when its channel is selected, then
    /// hand the event to the notification collaborator
    pub async fn on_message_create(&self, event: MessageCreateEvent) {
        let message = event.message.clone();
        let channel_id = message.channel_id;
        self.store.apply_message_create(message.clone());

        if self.presentation.selected_channel() == Some(channel_id) {
            self.presentation.submit(ViewCommand::AppendMessage {
                channel_id,
                message,
            });
        }

        if let Err(err) = self.notifier.notify(&event).await {
            tracing::error!(err = %err, "Notification failed");
        }
    }

    /// Message deleted: when its channel is selected, drop the highlight
    /// and redraw the whole list from the store
    pub fn on_message_delete(&self, event: &MessageDeleteEvent) {
        self.store.apply_message_delete(event.channel_id, event.id);

        if self.presentation.selected_channel() != Some(event.channel_id) {
            return;
        }

        self.presentation.submit(ViewCommand::RedrawMessages {
            channel_id: event.channel_id,
            messages: self.store.messages(event.channel_id),
            clear_selection: true,
        });
    }

    /// Unclassified event: diagnostics only
    pub fn on_raw(event: &RawEvent) {
        tracing::debug!(
            code = event.code,
            event_type = event.event_type.as_deref().unwrap_or(""),
            data = %event.data,
            "Raw gateway event"
        );
    }

    /// User selected a channel: record the selection, start the member
    /// fetch affordance, and derive roster and message list for it
    pub fn select_channel(&self, guild_id: Snowflake, channel_id: Snowflake) {
        self.presentation.submit(ViewCommand::SelectChannel {
            guild_id,
            channel_id,
        });

        self.rebuild_roster(guild_id, channel_id);

        self.presentation.submit(ViewCommand::RedrawMessages {
            channel_id,
            messages: self.store.messages(channel_id),
            clear_selection: true,
        });
    }

    /// Re-classify and re-render the roster for one guild/channel pair
    ///
    /// On failure the previous roster display stays untouched.
    fn rebuild_roster(&self, guild_id: Snowflake, channel_id: Snowflake) {
        match self.try_build_roster(guild_id, channel_id) {
            Ok(tree) => self.presentation.submit(ViewCommand::SetRoster {
                guild_id,
                channel_id,
                tree,
            }),
            Err(err) => {
                tracing::error!(
                    guild_id = %guild_id,
                    channel_id = %channel_id,
                    err = %err,
                    "Roster rebuild failed, keeping previous display"
                );
            }
        }
    }

    fn try_build_roster(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> Result<quorum_view::DisplayTree, DomainError> {
        let members = self.store.members(guild_id)?;
        let roster = classify(self.store.as_ref(), guild_id, channel_id, &members)?;
        Ok(render_roster(&roster, &self.theme))
    }
}
