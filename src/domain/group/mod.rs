//! Group set manager - bounded roster of candidate teams.

mod events;
mod roster;

pub use events::{
    ActiveGroupChanged, GroupAdded, GroupCleared, GroupRemoved, GroupSelectionReplaced,
    RosterEvent,
};
pub use roster::{Group, GroupRoster, RosterSnapshot, MAX_GROUPS};
