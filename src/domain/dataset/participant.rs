//! Participant entity - one row of the dataset.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Alias, Timestamp};
use crate::domain::skill::SkillVector;

/// One participant's dataset record: identity, descriptive fields, and the
/// complete skill vector. Immutable once loaded.
///
/// The wire shape is the flat JSON record of the dataset file: `alias`,
/// `timestamp`, `selfDescription`, and the twelve `skill*` attributes at
/// the top level. Unknown extra fields are ignored and can never reach
/// the skill vector, which is a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identity key, unique within the dataset.
    alias: Alias,

    /// When the participant submitted their self-rating.
    timestamp: Timestamp,

    /// Free-text self-description. Carried for display, not used by the engine.
    #[serde(rename = "selfDescription")]
    self_description: String,

    /// The complete twelve-dimension rating vector.
    #[serde(flatten)]
    skills: SkillVector,
}

impl Participant {
    /// Creates a participant from already-validated parts.
    pub fn new(
        alias: Alias,
        timestamp: Timestamp,
        self_description: String,
        skills: SkillVector,
    ) -> Self {
        Self {
            alias,
            timestamp,
            self_description,
            skills,
        }
    }

    /// Returns the participant's alias.
    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    /// Returns the submission timestamp.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Returns the free-text self-description.
    pub fn self_description(&self) -> &str {
        &self.self_description
    }

    /// Returns the skill vector.
    pub fn skills(&self) -> &SkillVector {
        &self.skills
    }
}
