//! The presentation sequence
//!
//! Display mutations from any event-handling context are funneled through
//! one mpsc channel and applied by a single consumer, so display-tree
//! updates are never interleaved. Reads go straight through the lock and
//! may observe state one command behind; the next event re-derives.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc;

use quorum_core::Snowflake;

use crate::view_state::{ViewCommand, ViewState};

/// Shared handle to the view state and its command queue
pub struct Presentation {
    state: RwLock<ViewState>,
    tx: mpsc::UnboundedSender<ViewCommand>,
}

impl Presentation {
    /// Create a presentation handle plus the receiver its consumer drains
    ///
    /// Callers spawn [`run_presenter`] with the receiver, or drain it by
    /// hand in tests.
    #[must_use]
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<ViewCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let presentation = Arc::new(Self {
            state: RwLock::new(ViewState::default()),
            tx,
        });
        (presentation, rx)
    }

    /// Queue a display mutation onto the presentation sequence
    pub fn submit(&self, command: ViewCommand) {
        if self.tx.send(command).is_err() {
            tracing::warn!("Presentation sequence closed, display command dropped");
        }
    }

    /// Apply one command against the view state
    ///
    /// Only the presentation consumer calls this; going through `submit`
    /// keeps mutations in one ordered sequence.
    pub fn apply(&self, command: ViewCommand) {
        self.state.write().apply(command);
    }

    /// Read the view state under the lock
    pub fn with_state<T>(&self, f: impl FnOnce(&ViewState) -> T) -> T {
        f(&self.state.read())
    }

    /// The currently selected channel, if any
    pub fn selected_channel(&self) -> Option<Snowflake> {
        self.state.read().selected_channel
    }

    /// The currently selected guild, if any
    pub fn selected_guild(&self) -> Option<Snowflake> {
        self.state.read().selected_guild
    }
}

/// Drain the command queue until every sender is gone
///
/// Runs as the single presentation consumer.
pub async fn run_presenter(
    presentation: Arc<Presentation>,
    mut rx: mpsc::UnboundedReceiver<ViewCommand>,
) {
    while let Some(command) = rx.recv().await {
        tracing::trace!(?command, "Applying view command");
        presentation.apply(command);
    }
    tracing::debug!("Presentation sequence ended");
}
