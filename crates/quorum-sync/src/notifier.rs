//! Notification collaborator seam
//!
//! Called fire-and-forget for each qualifying message-create event. A
//! failing notifier is logged by the synchronizer and never blocks event
//! delivery.

use async_trait::async_trait;

use quorum_core::{DomainError, MessageCreateEvent};

/// Outbound notification hook
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification for an incoming message
    async fn notify(&self, event: &MessageCreateEvent) -> Result<(), DomainError>;
}

/// Notifier that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _event: &MessageCreateEvent) -> Result<(), DomainError> {
        Ok(())
    }
}
