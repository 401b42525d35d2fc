//! Application layer - orchestration between domain and ports.

mod engine;
pub mod hover;
pub mod view;

pub use engine::{Engine, HOVER_CHANGED};
pub use hover::{HoverDebouncer, HoverState};
