//! Group skill aggregation - elementwise maximum profiles.

use serde::{Deserialize, Serialize};

use crate::domain::dataset::Dataset;
use crate::domain::foundation::{Alias, DomainError};
use crate::domain::skill::{ProfileLevel, SkillDimension, SkillVector, DIMENSION_COUNT, DISPLAY_ORDER};

/// A group's upper-bound skill profile: for every dimension, the maximum
/// rating among the group's members.
///
/// The reduction is commutative, associative, and idempotent, so member
/// order and repetition never affect the result. An empty group yields
/// the all-zero profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateProfile([ProfileLevel; DIMENSION_COUNT]);

impl AggregateProfile {
    /// The all-zero profile, produced by aggregating no members.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the level for a dimension.
    pub fn get(&self, dimension: SkillDimension) -> ProfileLevel {
        self.0[dimension.slot()]
    }

    /// Folds one member's skill vector into the profile.
    fn absorb(&mut self, skills: &SkillVector) {
        for dim in DISPLAY_ORDER {
            let slot = dim.slot();
            self.0[slot] = self.0[slot].max(skills.get(dim).into());
        }
    }

    /// Returns the levels in canonical display order, as the radar chart
    /// consumes them.
    pub fn display_values(&self) -> [u8; DIMENSION_COUNT] {
        let mut values = [0u8; DIMENSION_COUNT];
        for (i, dim) in DISPLAY_ORDER.iter().enumerate() {
            values[i] = self.get(*dim).value();
        }
        values
    }

    /// Returns true if every dimension is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|l| *l == ProfileLevel::ZERO)
    }
}

impl From<&SkillVector> for AggregateProfile {
    fn from(skills: &SkillVector) -> Self {
        let mut profile = AggregateProfile::zero();
        profile.absorb(skills);
        profile
    }
}

/// Computes the maximum skill profile over the named group members.
///
/// # Errors
///
/// - `AliasNotFound` if any alias is absent from the dataset. Aliases are
///   only ever sourced from the dataset, so this is a defensive invariant
///   check rather than a recoverable condition.
pub fn max_profile<'a>(
    members: impl IntoIterator<Item = &'a Alias>,
    dataset: &Dataset,
) -> Result<AggregateProfile, DomainError> {
    let mut profile = AggregateProfile::zero();
    for alias in members {
        let participant = dataset
            .get(alias)
            .ok_or_else(|| DomainError::alias_not_found(alias))?;
        profile.absorb(participant.skills());
    }
    Ok(profile)
}

/// Returns a single participant's profile, for the hover preview.
///
/// # Errors
///
/// - `AliasNotFound` if the alias is absent from the dataset
pub fn single_profile(alias: &Alias, dataset: &Dataset) -> Result<AggregateProfile, DomainError> {
    dataset
        .get(alias)
        .map(|p| AggregateProfile::from(p.skills()))
        .ok_or_else(|| DomainError::alias_not_found(alias))
}
