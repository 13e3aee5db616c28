//! Trait seams between layers

mod snapshot_query;

pub use snapshot_query::SnapshotQuery;
