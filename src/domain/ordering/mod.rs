//! Sort & index engine - stable orderings and selection translation.

mod engine;
pub mod translator;

pub use engine::Ordering;
pub use translator::{SelectionReapply, SelectionTranslator};
