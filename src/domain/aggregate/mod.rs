//! Group aggregator - maximum skill profiles for radar comparison.

mod profile;

pub use profile::{max_profile, single_profile, AggregateProfile};
