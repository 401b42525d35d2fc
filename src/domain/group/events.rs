//! Group roster domain events.
//!
//! Published when roster state changes:
//! - `GroupAdded` - New empty group appended
//! - `GroupRemoved` - Group deleted (never group 0)
//! - `GroupCleared` - Group membership emptied
//! - `GroupSelectionReplaced` - Group membership replaced wholesale
//! - `ActiveGroupChanged` - A different group now receives selections
//!
//! Ordering guarantee: when removing the active group, `ActiveGroupChanged`
//! (reset to group 0) is emitted *before* `GroupRemoved`, so no consumer
//! ever observes an active index pointing at a deleted group.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, Alias, EventEnvelope, EventId, SerializableDomainEvent, Timestamp};

/// Published when a new empty group is appended to the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupAdded {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Index of the new group.
    pub group_index: usize,

    /// Total group count after the addition.
    pub group_count: usize,

    /// When the group was added.
    pub added_at: Timestamp,
}

domain_event!(
    GroupAdded,
    event_type = "group.added",
    aggregate_id = group_index,
    aggregate_type = "GroupRoster",
    occurred_at = added_at,
    event_id = event_id
);

/// Published when a group is removed from the roster.
///
/// Always follows any `ActiveGroupChanged` the removal triggered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRemoved {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Index the group occupied before removal.
    pub group_index: usize,

    /// Total group count after the removal.
    pub group_count: usize,

    /// When the group was removed.
    pub removed_at: Timestamp,
}

domain_event!(
    GroupRemoved,
    event_type = "group.removed",
    aggregate_id = group_index,
    aggregate_type = "GroupRoster",
    occurred_at = removed_at,
    event_id = event_id
);

/// Published when a group's membership is emptied in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCleared {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Index of the cleared group.
    pub group_index: usize,

    /// When the group was cleared.
    pub cleared_at: Timestamp,
}

domain_event!(
    GroupCleared,
    event_type = "group.cleared",
    aggregate_id = group_index,
    aggregate_type = "GroupRoster",
    occurred_at = cleared_at,
    event_id = event_id
);

/// Published when a group's membership is replaced wholesale.
///
/// The renderer always reports the complete new selection, so this is a
/// replacement, never an incremental add or remove.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSelectionReplaced {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Index of the group whose membership changed.
    pub group_index: usize,

    /// The complete new membership.
    pub members: Vec<Alias>,

    /// When the membership was replaced.
    pub replaced_at: Timestamp,
}

domain_event!(
    GroupSelectionReplaced,
    event_type = "group.selection_replaced",
    aggregate_id = group_index,
    aggregate_type = "GroupRoster",
    occurred_at = replaced_at,
    event_id = event_id
);

/// Published when the active group changes.
///
/// Carries the new active group's membership as the renderer's selection
/// baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveGroupChanged {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Index of the group now receiving selection updates.
    pub active_index: usize,

    /// Membership of the newly active group.
    pub baseline: Vec<Alias>,

    /// When the change occurred.
    pub changed_at: Timestamp,
}

domain_event!(
    ActiveGroupChanged,
    event_type = "group.active_changed",
    aggregate_id = active_index,
    aggregate_type = "GroupRoster",
    occurred_at = changed_at,
    event_id = event_id
);

/// All roster events as one publishable sum type, so mutators can return
/// an ordered event sequence.
#[derive(Debug, Clone)]
pub enum RosterEvent {
    Added(GroupAdded),
    Removed(GroupRemoved),
    Cleared(GroupCleared),
    SelectionReplaced(GroupSelectionReplaced),
    ActiveChanged(ActiveGroupChanged),
}

impl RosterEvent {
    /// Converts the event into a transport envelope.
    pub fn to_envelope(&self) -> EventEnvelope {
        match self {
            RosterEvent::Added(e) => e.to_envelope(),
            RosterEvent::Removed(e) => e.to_envelope(),
            RosterEvent::Cleared(e) => e.to_envelope(),
            RosterEvent::SelectionReplaced(e) => e.to_envelope(),
            RosterEvent::ActiveChanged(e) => e.to_envelope(),
        }
    }

    /// Returns the routed event type string.
    pub fn event_type(&self) -> &'static str {
        match self {
            RosterEvent::Added(_) => "group.added",
            RosterEvent::Removed(_) => "group.removed",
            RosterEvent::Cleared(_) => "group.cleared",
            RosterEvent::SelectionReplaced(_) => "group.selection_replaced",
            RosterEvent::ActiveChanged(_) => "group.active_changed",
        }
    }
}
