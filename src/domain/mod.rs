//! Domain layer - pure selection, sorting, and aggregation logic.

pub mod aggregate;
pub mod dataset;
pub mod foundation;
pub mod group;
pub mod ordering;
pub mod skill;
