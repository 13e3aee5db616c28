//! # quorum-sync
//!
//! The event synchronizer: consumes the typed gateway event stream, applies
//! each event to the snapshot store, and triggers selective re-derivation
//! (roster re-classification, message list patching) only for the affected
//! guild/channel. Display mutations travel as commands over a single
//! presentation sequence so they are never interleaved.

mod notifier;
mod presentation;
mod synchronizer;
mod view_state;

pub use notifier::{NoopNotifier, Notifier};
pub use presentation::{run_presenter, Presentation};
pub use synchronizer::Synchronizer;
pub use view_state::{Focus, ViewCommand, ViewState};
