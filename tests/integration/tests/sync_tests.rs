//! End-to-end scenarios: gateway events in, display state out

use integration_tests::fixtures::{
    guild_snapshot, member, member_chunk, message_create, message_delete, presence, ready, role,
    CHANNEL, GUILD,
};
use integration_tests::helpers::TestApp;

use quorum_core::{DomainError, MessageCreateEvent, SnapshotQuery, Snowflake, Status};
use quorum_sync::{Focus, Notifier};

fn admins_and_mods() -> Vec<quorum_core::Role> {
    vec![role(1, 10, true, "Admins"), role(2, 5, false, "Mods")]
}

#[tokio::test]
async fn ready_builds_hierarchy_and_focuses_it() {
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(vec![], vec![]))).await;

    app.view(|s| {
        assert_eq!(s.focus, Focus::Hierarchy);
        let labels: Vec<_> = s
            .hierarchy
            .root
            .children()
            .iter()
            .map(|n| n.label.clone())
            .collect();
        assert_eq!(labels, ["Direct Messages", "fixture"]);
        assert!(s.hierarchy.root.expanded);
    });
}

#[tokio::test]
async fn worked_example_classifies_into_expected_buckets() {
    let mut app = TestApp::new();
    let members = vec![
        member(201, "A", vec![1]),
        member(202, "B", vec![2]),
        member(203, "C", vec![]),
        member(204, "D", vec![1]),
    ];
    app.drive(ready(guild_snapshot(admins_and_mods(), members)))
        .await;
    app.drive(presence(201, Status::Online)).await;
    app.drive(presence(202, Status::Online)).await;
    app.drive(presence(203, Status::Idle)).await;
    app.drive(presence(204, Status::Offline)).await;

    app.select(GUILD, CHANNEL);

    let labels = app.roster_labels();
    // Admins group, then B and C ungrouped at top level, then Offline last
    assert_eq!(labels[0], "Admins (1)");
    assert_eq!(labels.last().unwrap(), "Offline");
    assert_eq!(labels.len(), 4);

    app.view(|s| {
        let children = s.roster.root.children();
        let glyph = |label: &str| label.chars().last().unwrap();
        assert_eq!(children[0].children().len(), 1);
        assert_eq!(glyph(&children[0].children()[0].label), 'A');
        // B's role is not hoisted; being online, B lands ungrouped, not offline
        assert_eq!(glyph(&children[1].label), 'B');
        assert_eq!(glyph(&children[2].label), 'C');
        let offline = children.last().unwrap();
        assert_eq!(offline.children().len(), 1);
        assert_eq!(glyph(&offline.children()[0].label), 'D');
    });
}

#[tokio::test]
async fn presence_updates_redraw_only_the_selected_guild() {
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(
        admins_and_mods(),
        vec![member(201, "A", vec![1])],
    )))
    .await;
    app.select(GUILD, CHANNEL);
    assert_eq!(app.roster_labels(), ["Offline"]);

    app.drive(presence(201, Status::Online)).await;
    assert_eq!(app.roster_labels(), ["Admins (1)", "Offline"]);

    // Pushing the member back offline moves them to the offline bucket
    app.drive(presence(201, Status::Offline)).await;
    assert_eq!(app.roster_labels(), ["Offline"]);
}

#[tokio::test]
async fn out_of_order_presence_is_last_write_wins() {
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(vec![], vec![member(201, "A", vec![])])))
        .await;

    // The chronologically earlier event applied last wins
    app.drive(presence(201, Status::Idle)).await;
    app.drive(presence(201, Status::Online)).await;
    assert_eq!(
        app.store.presence(Snowflake::new(GUILD), Snowflake::new(201)),
        Some(Status::Online)
    );

    app.drive(presence(201, Status::Idle)).await;
    assert_eq!(
        app.store.presence(Snowflake::new(GUILD), Snowflake::new(201)),
        Some(Status::Idle)
    );
}

#[tokio::test]
async fn member_chunk_clears_fetching_and_duplicates_are_noops() {
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(vec![], vec![]))).await;
    app.select(GUILD, CHANNEL);
    assert!(app.view(|s| s.fetching_members));

    app.drive(member_chunk(vec![member(205, "late", vec![])]))
        .await;
    assert!(!app.view(|s| s.fetching_members));
    assert_eq!(app.store.members(Snowflake::new(GUILD)).unwrap().len(), 1);

    // Duplicate completion signal: flag stays cleared, member list stable
    app.drive(member_chunk(vec![member(205, "late", vec![])]))
        .await;
    assert!(!app.view(|s| s.fetching_members));
    assert_eq!(app.store.members(Snowflake::new(GUILD)).unwrap().len(), 1);
}

#[tokio::test]
async fn message_create_appends_to_selected_channel_only() {
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(vec![], vec![]))).await;
    app.select(GUILD, CHANNEL);

    app.drive(message_create(1, CHANNEL, "shown")).await;
    app.drive(message_create(2, 999, "elsewhere")).await;

    app.view(|s| {
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].content, "shown");
    });
    // Both messages reached the store
    assert_eq!(app.store.messages(Snowflake::new(999)).len(), 1);
}

#[tokio::test]
async fn message_delete_for_unselected_channel_changes_nothing() {
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(vec![], vec![]))).await;
    app.select(GUILD, CHANNEL);
    app.drive(message_create(1, CHANNEL, "keep")).await;
    app.drive(message_create(7, 999, "target")).await;

    app.drive(message_delete(7, 999)).await;

    app.view(|s| {
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].content, "keep");
    });
    assert!(app.store.messages(Snowflake::new(999)).is_empty());
}

#[tokio::test]
async fn message_delete_redraws_selected_channel_from_store() {
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(vec![], vec![]))).await;
    app.select(GUILD, CHANNEL);
    app.drive(message_create(1, CHANNEL, "first")).await;
    app.drive(message_create(2, CHANNEL, "second")).await;

    app.drive(message_delete(1, CHANNEL)).await;

    app.view(|s| {
        assert_eq!(s.selected_message, None);
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].content, "second");
    });
}

#[tokio::test]
async fn failed_roster_rebuild_preserves_previous_display() {
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(
        admins_and_mods(),
        vec![member(201, "A", vec![1])],
    )))
    .await;
    app.drive(presence(201, Status::Online)).await;
    app.select(GUILD, CHANNEL);
    let good = app.roster_labels();
    assert_eq!(good, ["Admins (1)", "Offline"]);

    // Pull the guild record out from under the selection, then trigger a
    // rebuild; roles are now unavailable and the display must survive
    app.store.purge_guild(Snowflake::new(GUILD));
    app.drive(presence(201, Status::Idle)).await;

    assert_eq!(app.roster_labels(), good);
}

#[tokio::test]
async fn guild_delete_purges_state_and_selection() {
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(vec![], vec![member(201, "A", vec![])])))
        .await;
    app.select(GUILD, CHANNEL);
    app.drive(message_create(1, CHANNEL, "gone soon")).await;

    app.drive(quorum_core::GatewayEvent::GuildDelete(
        quorum_core::GuildDeleteEvent {
            id: Snowflake::new(GUILD),
            unavailable: false,
        },
    ))
    .await;

    assert!(app.store.guild(Snowflake::new(GUILD)).is_err());
    app.view(|s| {
        assert_eq!(s.selected_guild, None);
        assert!(s.messages.is_empty());
        // The sidebar no longer lists the purged guild
        let labels: Vec<_> = s
            .hierarchy
            .root
            .children()
            .iter()
            .map(|n| n.label.clone())
            .collect();
        assert_eq!(labels, ["Direct Messages"]);
    });
}

#[tokio::test]
async fn wire_format_events_drive_the_engine() {
    // Events arrive from the transport as tagged JSON; a decoded event
    // must behave exactly like a locally built one
    let mut app = TestApp::new();
    app.drive(ready(guild_snapshot(vec![], vec![member(201, "A", vec![])])))
        .await;
    app.select(GUILD, CHANNEL);

    let json = format!(
        r#"{{"t":"PRESENCE_UPDATE","d":{{"guild_id":"{GUILD}","user_id":"201","status":"dnd"}}}}"#
    );
    let event: quorum_core::GatewayEvent = serde_json::from_str(&json).unwrap();
    app.drive(event).await;

    assert_eq!(
        app.store.presence(Snowflake::new(GUILD), Snowflake::new(201)),
        Some(Status::Dnd)
    );
}

#[tokio::test]
async fn notifier_sees_every_message_create() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingNotifier {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Notifier for CountingNotifier {
        async fn notify(&self, _: &MessageCreateEvent) -> Result<(), DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(DomainError::Notification("always failing".to_string()))
        }
    }

    let notifier = Arc::new(CountingNotifier::default());
    let mut app = TestApp::with_notifier(notifier.clone());
    app.drive(ready(guild_snapshot(vec![], vec![]))).await;
    app.select(GUILD, CHANNEL);

    app.drive(message_create(1, CHANNEL, "one")).await;
    app.drive(message_create(2, 999, "two")).await;

    // Both events reached the collaborator; its failures never blocked
    // delivery to the store or the view
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 2);
    app.view(|s| assert_eq!(s.messages.len(), 1));
    assert_eq!(app.store.messages(Snowflake::new(CHANNEL)).len(), 1);
}
