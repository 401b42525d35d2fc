//! Adapters - concrete implementations of the ports.

pub mod chart;
pub mod events;
