//! # Domain Event Outbox
//!
//! Explicit event emission for notification-class side effects (reviewer
//! assigned, verdict submitted, collaborator added). The core publishes
//! to this port inside the same logical operation that mutates state; a
//! delivery worker drains it. Nothing here is fire-and-forget — an
//! unpublished event is a visible gap, not a silently dropped call.

use serde::{Deserialize, Serialize};

use ckp_core::{Timestamp, WorkspaceId};

/// An event the core publishes for downstream delivery (email, feeds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// The workspace the event belongs to.
    pub workspace_id: WorkspaceId,
    /// Namespaced event name (e.g., `review.assigned`).
    pub name: String,
    /// Structured payload for the delivery worker.
    pub payload: serde_json::Value,
    /// When the event was published (UTC).
    pub occurred_at: Timestamp,
}

impl DomainEvent {
    /// Build an event stamped with the current time.
    pub fn new(workspace_id: WorkspaceId, name: &str, payload: serde_json::Value) -> Self {
        Self {
            workspace_id,
            name: name.to_string(),
            payload,
            occurred_at: Timestamp::now(),
        }
    }
}

/// Outbox port for domain events.
pub trait Outbox {
    /// Publish one event for downstream delivery.
    fn publish(&mut self, event: DomainEvent);
}

/// In-memory outbox that collects published events in order.
#[derive(Debug, Default)]
pub struct MemoryOutbox {
    events: Vec<DomainEvent>,
}

impl MemoryOutbox {
    /// Create an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// The events published so far, oldest first.
    pub fn events(&self) -> &[DomainEvent] {
        &self.events
    }

    /// Drain all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Outbox for MemoryOutbox {
    fn publish(&mut self, event: DomainEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_drain_preserve_order() {
        let ws = WorkspaceId::new();
        let mut outbox = MemoryOutbox::new();
        outbox.publish(DomainEvent::new(ws, "review.assigned", serde_json::Value::Null));
        outbox.publish(DomainEvent::new(ws, "review.verdict_submitted", serde_json::Value::Null));

        assert_eq!(outbox.events().len(), 2);
        let drained = outbox.drain();
        assert_eq!(drained[0].name, "review.assigned");
        assert_eq!(drained[1].name, "review.verdict_submitted");
        assert!(outbox.events().is_empty());
    }
}
