//! Group roster aggregate - the bounded list of candidate teams.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Alias, EventId, Timestamp};

use super::events::{
    ActiveGroupChanged, GroupAdded, GroupCleared, GroupRemoved, GroupSelectionReplaced,
    RosterEvent,
};

/// Maximum number of groups that may exist at once.
pub const MAX_GROUPS: usize = 4;

/// One candidate team: an ordered, duplicate-free list of aliases.
///
/// Member order carries no meaning; it is kept only for deterministic
/// iteration. Adding an already-present alias is a no-op, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    members: Vec<Alias>,
}

impl Group {
    /// Creates an empty group.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a group from a member list, dropping duplicates
    /// (first occurrence wins).
    pub fn from_members(members: impl IntoIterator<Item = Alias>) -> Self {
        let mut unique = Vec::new();
        for alias in members {
            if !unique.contains(&alias) {
                unique.push(alias);
            }
        }
        Self { members: unique }
    }

    /// Returns the members in insertion order.
    pub fn members(&self) -> &[Alias] {
        &self.members
    }

    /// Returns true if the alias is a member.
    pub fn contains(&self, alias: &Alias) -> bool {
        self.members.contains(alias)
    }

    /// Returns the member count.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// An immutable, cheaply clonable view of roster state.
///
/// Every mutation replaces the underlying group list wholesale, so a
/// snapshot taken before a mutation is never affected by it.
#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    groups: Arc<[Group]>,
    active: usize,
}

impl RosterSnapshot {
    /// Returns all groups.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns the active group index.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the active group.
    pub fn active_group(&self) -> &Group {
        &self.groups[self.active]
    }
}

/// State machine over the group list and active index.
///
/// # Invariants
///
/// - At least one group always exists; group 0 is never removable.
/// - Group count never exceeds [`MAX_GROUPS`].
/// - The active index is always valid for the current group list.
#[derive(Debug, Clone)]
pub struct GroupRoster {
    groups: Arc<[Group]>,
    active: usize,
}

impl Default for GroupRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupRoster {
    /// Creates a roster with a single empty group, which is active.
    pub fn new() -> Self {
        Self {
            groups: Arc::from(vec![Group::empty()]),
            active: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns all groups.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns the number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the active group index.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the group currently receiving selection updates.
    pub fn active_group(&self) -> &Group {
        &self.groups[self.active]
    }

    /// Returns true if another group can still be added.
    pub fn has_capacity(&self) -> bool {
        self.groups.len() < MAX_GROUPS
    }

    /// Takes an immutable snapshot of the current state.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            groups: Arc::clone(&self.groups),
            active: self.active,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a new empty group.
    ///
    /// Silently rejected once [`MAX_GROUPS`] groups exist; the surrounding
    /// UI is expected to disable the control instead of handling an error.
    pub fn add_group(&mut self) -> Option<GroupAdded> {
        if !self.has_capacity() {
            return None;
        }

        let mut groups = self.groups.to_vec();
        groups.push(Group::empty());
        let group_index = groups.len() - 1;
        let group_count = groups.len();
        self.groups = Arc::from(groups);

        Some(GroupAdded {
            event_id: EventId::new(),
            group_index,
            group_count,
            added_at: Timestamp::now(),
        })
    }

    /// Removes the group at `index`.
    ///
    /// Group 0 is never removable and out-of-range indices are ignored;
    /// both are no-ops yielding no events. When the active group is
    /// removed, the active index resets to 0 before the removal is
    /// reported, so the returned events are ordered
    /// `[ActiveGroupChanged, GroupRemoved]`.
    pub fn remove_group(&mut self, index: usize) -> Vec<RosterEvent> {
        if index == 0 || index >= self.groups.len() {
            return Vec::new();
        }

        let mut events = Vec::new();
        let mut groups = self.groups.to_vec();
        groups.remove(index);

        if self.active == index {
            self.active = 0;
            events.push(RosterEvent::ActiveChanged(ActiveGroupChanged {
                event_id: EventId::new(),
                active_index: 0,
                baseline: groups[0].members().to_vec(),
                changed_at: Timestamp::now(),
            }));
        } else if self.active > index {
            // The active group itself survives; only its index shifts.
            self.active -= 1;
            events.push(RosterEvent::ActiveChanged(ActiveGroupChanged {
                event_id: EventId::new(),
                active_index: self.active,
                baseline: groups[self.active].members().to_vec(),
                changed_at: Timestamp::now(),
            }));
        }

        let group_count = groups.len();
        self.groups = Arc::from(groups);

        events.push(RosterEvent::Removed(GroupRemoved {
            event_id: EventId::new(),
            group_index: index,
            group_count,
            removed_at: Timestamp::now(),
        }));
        events
    }

    /// Replaces the group at `index` with an empty group.
    ///
    /// Group count and active index are unchanged. Out-of-range indices
    /// are ignored.
    pub fn clear_group(&mut self, index: usize) -> Option<GroupCleared> {
        if index >= self.groups.len() {
            return None;
        }

        let mut groups = self.groups.to_vec();
        groups[index] = Group::empty();
        self.groups = Arc::from(groups);

        Some(GroupCleared {
            event_id: EventId::new(),
            group_index: index,
            cleared_at: Timestamp::now(),
        })
    }

    /// Replaces the full membership of the group at `index`.
    ///
    /// The renderer always reports the complete new selection, so this is
    /// never an incremental mutation. Duplicates in the input are dropped,
    /// first occurrence wins. Out-of-range indices are ignored.
    pub fn set_selection(
        &mut self,
        index: usize,
        members: impl IntoIterator<Item = Alias>,
    ) -> Option<GroupSelectionReplaced> {
        if index >= self.groups.len() {
            return None;
        }

        let group = Group::from_members(members);
        let replaced = group.members().to_vec();

        let mut groups = self.groups.to_vec();
        groups[index] = group;
        self.groups = Arc::from(groups);

        Some(GroupSelectionReplaced {
            event_id: EventId::new(),
            group_index: index,
            members: replaced,
            replaced_at: Timestamp::now(),
        })
    }

    /// Makes the group at `index` the one receiving selection updates.
    ///
    /// Reports the group's membership as the renderer's new selection
    /// baseline. Out-of-range indices are ignored.
    pub fn select_group(&mut self, index: usize) -> Option<ActiveGroupChanged> {
        if index >= self.groups.len() {
            return None;
        }

        self.active = index;
        Some(ActiveGroupChanged {
            event_id: EventId::new(),
            active_index: index,
            baseline: self.groups[index].members().to_vec(),
            changed_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias(s: &str) -> Alias {
        Alias::new(s).unwrap()
    }

    // Construction tests

    #[test]
    fn new_roster_has_one_empty_active_group() {
        let roster = GroupRoster::new();
        assert_eq!(roster.group_count(), 1);
        assert_eq!(roster.active_index(), 0);
        assert!(roster.active_group().is_empty());
    }

    // Group value object tests

    #[test]
    fn group_from_members_drops_duplicates_first_wins() {
        let group = Group::from_members(vec![alias("Ann"), alias("Bo"), alias("Ann")]);
        assert_eq!(group.len(), 2);
        assert_eq!(group.members()[0].as_str(), "Ann");
        assert_eq!(group.members()[1].as_str(), "Bo");
    }

    // Capacity tests

    #[test]
    fn add_group_appends_until_capacity() {
        let mut roster = GroupRoster::new();
        assert!(roster.add_group().is_some());
        assert!(roster.add_group().is_some());
        assert!(roster.add_group().is_some());
        assert_eq!(roster.group_count(), 4);
    }

    #[test]
    fn fifth_group_is_silently_rejected() {
        let mut roster = GroupRoster::new();
        for _ in 0..3 {
            roster.add_group();
        }
        assert!(!roster.has_capacity());
        assert!(roster.add_group().is_none());
        assert_eq!(roster.group_count(), 4);
    }

    #[test]
    fn add_group_event_reports_index_and_count() {
        let mut roster = GroupRoster::new();
        let event = roster.add_group().unwrap();
        assert_eq!(event.group_index, 1);
        assert_eq!(event.group_count, 2);
    }

    // Removal tests

    #[test]
    fn remove_group_zero_is_a_noop() {
        let mut roster = GroupRoster::new();
        roster.add_group();
        let events = roster.remove_group(0);
        assert!(events.is_empty());
        assert_eq!(roster.group_count(), 2);
    }

    #[test]
    fn remove_group_never_reduces_below_one() {
        let mut roster = GroupRoster::new();
        assert!(roster.remove_group(0).is_empty());
        assert_eq!(roster.group_count(), 1);
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut roster = GroupRoster::new();
        assert!(roster.remove_group(7).is_empty());
    }

    #[test]
    fn removing_active_group_resets_active_before_reporting_removal() {
        let mut roster = GroupRoster::new();
        roster.add_group();
        roster.select_group(1);
        roster.set_selection(0, vec![alias("Ann")]);

        let events = roster.remove_group(1);
        assert_eq!(roster.active_index(), 0);
        assert_eq!(events.len(), 2);

        // Reset-then-notify: the active change comes first and already
        // carries group 0's membership as the baseline.
        match &events[0] {
            RosterEvent::ActiveChanged(e) => {
                assert_eq!(e.active_index, 0);
                assert_eq!(e.baseline, vec![alias("Ann")]);
            }
            other => panic!("expected ActiveChanged first, got {:?}", other),
        }
        match &events[1] {
            RosterEvent::Removed(e) => {
                assert_eq!(e.group_index, 1);
                assert_eq!(e.group_count, 1);
            }
            other => panic!("expected Removed second, got {:?}", other),
        }
    }

    #[test]
    fn removing_group_before_active_shifts_active_index() {
        let mut roster = GroupRoster::new();
        roster.add_group(); // index 1
        roster.add_group(); // index 2
        roster.set_selection(2, vec![alias("Cy")]);
        roster.select_group(2);

        let events = roster.remove_group(1);
        assert_eq!(roster.active_index(), 1);
        assert_eq!(roster.active_group().members(), &[alias("Cy")]);
        assert!(matches!(&events[0], RosterEvent::ActiveChanged(e) if e.active_index == 1));
    }

    #[test]
    fn removing_inactive_group_emits_only_removal() {
        let mut roster = GroupRoster::new();
        roster.add_group();
        let events = roster.remove_group(1);
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], RosterEvent::Removed(_)));
        assert_eq!(roster.active_index(), 0);
    }

    // Clear tests

    #[test]
    fn clear_group_empties_without_touching_count_or_active() {
        let mut roster = GroupRoster::new();
        roster.add_group();
        roster.select_group(1);
        roster.set_selection(1, vec![alias("Ann"), alias("Bo")]);

        let event = roster.clear_group(1).unwrap();
        assert_eq!(event.group_index, 1);
        assert_eq!(roster.group_count(), 2);
        assert_eq!(roster.active_index(), 1);
        assert!(roster.groups()[1].is_empty());
    }

    #[test]
    fn clear_out_of_range_is_a_noop() {
        let mut roster = GroupRoster::new();
        assert!(roster.clear_group(3).is_none());
    }

    // Selection tests

    #[test]
    fn set_selection_replaces_membership_wholesale() {
        let mut roster = GroupRoster::new();
        roster.set_selection(0, vec![alias("Ann"), alias("Bo")]);
        let event = roster
            .set_selection(0, vec![alias("Cy")])
            .unwrap();
        assert_eq!(event.members, vec![alias("Cy")]);
        assert_eq!(roster.groups()[0].members(), &[alias("Cy")]);
    }

    #[test]
    fn set_selection_deduplicates_input() {
        let mut roster = GroupRoster::new();
        let event = roster
            .set_selection(0, vec![alias("Ann"), alias("Ann")])
            .unwrap();
        assert_eq!(event.members.len(), 1);
    }

    #[test]
    fn select_group_reports_baseline() {
        let mut roster = GroupRoster::new();
        roster.add_group();
        roster.set_selection(1, vec![alias("Bo")]);

        let event = roster.select_group(1).unwrap();
        assert_eq!(event.active_index, 1);
        assert_eq!(event.baseline, vec![alias("Bo")]);
        assert_eq!(roster.active_index(), 1);
    }

    #[test]
    fn select_out_of_range_is_a_noop() {
        let mut roster = GroupRoster::new();
        assert!(roster.select_group(9).is_none());
        assert_eq!(roster.active_index(), 0);
    }

    // Copy-on-write tests

    #[test]
    fn snapshot_is_unaffected_by_later_mutations() {
        let mut roster = GroupRoster::new();
        roster.set_selection(0, vec![alias("Ann")]);
        let before = roster.snapshot();

        roster.set_selection(0, vec![alias("Bo")]);
        roster.add_group();

        assert_eq!(before.groups().len(), 1);
        assert_eq!(before.groups()[0].members(), &[alias("Ann")]);
        assert_eq!(roster.groups()[0].members(), &[alias("Bo")]);
    }

    #[test]
    fn snapshot_active_group_tracks_active_index() {
        let mut roster = GroupRoster::new();
        roster.add_group();
        roster.set_selection(1, vec![alias("Cy")]);
        roster.select_group(1);

        let snapshot = roster.snapshot();
        assert_eq!(snapshot.active_index(), 1);
        assert_eq!(snapshot.active_group().members(), &[alias("Cy")]);
    }
}
