//! Classification properties checked through the real snapshot store

use std::collections::HashSet;

use integration_tests::fixtures::{
    everyone_role, guild_snapshot, member, role, CHANNEL, GUILD,
};

use quorum_core::{
    Member, PresenceUpdateEvent, Role, SnapshotQuery, Snowflake, Status,
};
use quorum_store::SnapshotStore;
use quorum_view::{classify, Roster};

fn store_with(roles: Vec<Role>, members: Vec<Member>) -> SnapshotStore {
    let store = SnapshotStore::new();
    store.apply_guild_snapshot(guild_snapshot(roles, members));
    store
}

fn set_presence(store: &SnapshotStore, user_id: i64, status: Status) {
    store.apply_presence_update(&PresenceUpdateEvent {
        guild_id: Snowflake::new(GUILD),
        user_id: Snowflake::new(user_id),
        status,
    });
}

fn run(store: &SnapshotStore) -> Roster {
    let members = store.members(Snowflake::new(GUILD)).unwrap();
    classify(store, Snowflake::new(GUILD), Snowflake::new(CHANNEL), &members).unwrap()
}

fn all_user_ids(roster: &Roster) -> Vec<Snowflake> {
    roster
        .groups
        .iter()
        .flat_map(|g| &g.members)
        .chain(&roster.ungrouped)
        .chain(&roster.offline)
        .map(|e| e.user_id)
        .collect()
}

#[test]
fn classification_partitions_members_for_varied_role_configs() {
    let role_configs: Vec<Vec<Role>> = vec![
        vec![],
        vec![role(1, 10, false, "plain")],
        vec![role(1, 10, true, "one-hoisted")],
        vec![
            role(1, 10, true, "alpha"),
            role(2, 10, true, "beta"),
            role(3, 4, false, "gamma"),
        ],
    ];

    for roles in role_configs {
        let members = vec![
            member(201, "a", vec![1, 2]),
            member(202, "b", vec![2]),
            member(203, "c", vec![3]),
            member(204, "d", vec![]),
            member(205, "e", vec![1]),
        ];
        let store = store_with(roles, members.clone());
        set_presence(&store, 201, Status::Online);
        set_presence(&store, 202, Status::Dnd);
        set_presence(&store, 203, Status::Offline);
        set_presence(&store, 205, Status::Idle);

        let roster = run(&store);
        let ids = all_user_ids(&roster);

        // Union equals the member set, no duplicates
        assert_eq!(ids.len(), members.len());
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), members.len());
        for m in &members {
            assert!(unique.contains(&m.user_id));
        }
    }
}

#[test]
fn member_with_two_hoisted_roles_lands_in_the_senior_one() {
    let store = store_with(
        vec![role(1, 10, true, "Senior"), role(2, 5, true, "Junior")],
        vec![member(201, "a", vec![1, 2]), member(202, "b", vec![2])],
    );
    set_presence(&store, 201, Status::Online);
    set_presence(&store, 202, Status::Online);

    let roster = run(&store);
    assert_eq!(roster.groups.len(), 2);
    assert_eq!(roster.groups[0].label, "Senior");
    assert_eq!(roster.groups[0].members[0].name, "a");
    assert_eq!(roster.groups[1].label, "Junior");
    assert_eq!(roster.groups[1].members[0].name, "b");
}

#[test]
fn missing_presence_classifies_like_explicit_offline() {
    let store = store_with(
        vec![role(1, 10, true, "Admins")],
        vec![member(201, "never-seen", vec![1]), member(202, "explicit", vec![1])],
    );
    set_presence(&store, 202, Status::Offline);

    let roster = run(&store);
    assert!(roster.groups.is_empty());
    assert!(roster.ungrouped.is_empty());

    let names: Vec<_> = roster.offline.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["never-seen", "explicit"]);
    assert!(roster.offline.iter().all(|e| e.status == Status::Offline));
}

#[test]
fn classification_is_deterministic_on_an_unchanged_snapshot() {
    let store = store_with(
        vec![
            role(1, 10, true, "Alpha"),
            role(2, 10, true, "Beta"),
            role(3, 2, false, "Gamma"),
        ],
        vec![
            member(201, "a", vec![1, 2]),
            member(202, "b", vec![2, 3]),
            member(203, "c", vec![]),
            member(204, "d", vec![3]),
        ],
    );
    set_presence(&store, 201, Status::Online);
    set_presence(&store, 202, Status::Idle);
    set_presence(&store, 204, Status::Dnd);

    let first = run(&store);
    let second = run(&store);
    assert_eq!(first, second);
}

#[test]
fn offline_bucket_skips_the_visibility_check() {
    // Deny the everyone role the channel entirely; online members vanish
    // from role groups but offline members still appear in the roster
    let mut everyone = everyone_role();
    everyone.permissions = quorum_core::Permissions::empty();

    let store = SnapshotStore::new();
    let mut snapshot = guild_snapshot(vec![role(1, 10, true, "Admins")], vec![
        member(201, "online-hidden", vec![1]),
        member(202, "offline-hidden", vec![1]),
    ]);
    snapshot.roles[0] = everyone;
    store.apply_guild_snapshot(snapshot);
    set_presence(&store, 201, Status::Online);

    let roster = run(&store);
    // No role group forms (visibility fails), but the online member still
    // surfaces ungrouped and the offline member stays listed
    assert!(roster.groups.is_empty());
    assert_eq!(roster.ungrouped[0].name, "online-hidden");
    assert_eq!(roster.offline[0].name, "offline-hidden");
}

#[test]
fn store_roles_query_is_display_sorted() -> anyhow::Result<()> {
    let store = store_with(
        vec![
            role(5, 1, false, "low"),
            role(4, 9, false, "high"),
            role(3, 9, false, "high-older-id"),
        ],
        vec![],
    );

    let roles = store.roles(Snowflake::new(GUILD))?;
    let names: Vec<_> = roles.iter().map(|r| r.name.as_str()).collect();
    // Position descending, id ascending on the tie; everyone sits at
    // position 0 and lands last
    assert_eq!(names, ["high-older-id", "high", "low", "@everyone"]);
    Ok(())
}
