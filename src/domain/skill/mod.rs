//! Skill vocabulary - the fixed dimension set, label mapping, and ratings.

mod dimension;
mod rating;
mod vector;

pub use dimension::{SkillDimension, DIMENSION_COUNT, DISPLAY_ORDER};
pub use rating::{ProfileLevel, Rating};
pub use vector::SkillVector;
