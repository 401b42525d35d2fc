//! Rating value objects for the one-to-ten skill scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Self-rated skill level: 1 (lowest) to 10 (highest).
///
/// Every participant rates every dimension, so a `Rating` always exists;
/// the zero-permitting [`ProfileLevel`] is reserved for aggregate output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating on the scale.
    pub const MIN: Rating = Rating(1);

    /// Highest rating on the scale.
    pub const MAX: Rating = Rating(10);

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        if (1..=10).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range("rating", 1, 10, value as i32))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregate skill level: 0 to 10.
///
/// Zero means "no member contributes this skill", which only occurs for
/// empty groups. Individual ratings are always at least 1.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ProfileLevel(u8);

impl ProfileLevel {
    /// The zero level, produced by aggregating an empty group.
    pub const ZERO: ProfileLevel = ProfileLevel(0);

    /// Creates a ProfileLevel from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        if value <= 10 {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "profile_level",
                0,
                10,
                value as i32,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the elementwise maximum of two levels.
    pub fn max(self, other: ProfileLevel) -> ProfileLevel {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

impl From<Rating> for ProfileLevel {
    fn from(rating: Rating) -> Self {
        Self(rating.value())
    }
}

impl TryFrom<u8> for ProfileLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<ProfileLevel> for u8 {
    fn from(level: ProfileLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ProfileLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
