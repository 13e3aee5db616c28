//! # quorum-store
//!
//! The snapshot store: latest known state of guilds, channels, roles,
//! members, presences, and per-channel message lists. Mutated only by
//! applying gateway events; queried read-only by the derivation layer
//! through [`quorum_core::SnapshotQuery`].

mod record;
mod store;
mod visibility;

pub use record::GuildRecord;
pub use store::SnapshotStore;
pub use visibility::member_can_view;
