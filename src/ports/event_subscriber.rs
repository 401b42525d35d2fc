//! EventSubscriber port - Interface for consuming domain events.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handles a single delivered event.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Processes the event. Errors are reported to the publisher.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Returns a stable name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Port for registering event handlers by event type.
pub trait EventSubscriber: Send + Sync {
    /// Registers a handler for one event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Registers a handler for several event types at once.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}
