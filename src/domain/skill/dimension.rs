//! The closed set of skill dimensions and their label vocabulary.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Number of skill dimensions. The set is fixed and closed; it cannot be
/// extended at runtime, so nothing beyond these twelve can ever leak into
/// an aggregation.
pub const DIMENSION_COUNT: usize = 12;

/// One of the twelve fixed axes of self-rated competence.
///
/// Serialized form matches the dataset's JSON attribute names
/// (e.g. `skillInfoViz`), so event payloads and dataset records agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillDimension {
    #[serde(rename = "skillInfoViz")]
    InfoViz,
    #[serde(rename = "skillStats")]
    Stats,
    #[serde(rename = "skillMaths")]
    Maths,
    #[serde(rename = "skillArt")]
    Art,
    #[serde(rename = "skillComputer")]
    Computer,
    #[serde(rename = "skillProgramming")]
    Programming,
    #[serde(rename = "skillGraphics")]
    Graphics,
    #[serde(rename = "skillHCI")]
    Hci,
    #[serde(rename = "skillUX")]
    Ux,
    #[serde(rename = "skillCommunication")]
    Communication,
    #[serde(rename = "skillCollaboration")]
    Collaboration,
    #[serde(rename = "skillRepos")]
    Repos,
}

/// Canonical display order shared by the heatmap rows and the radar axes.
pub const DISPLAY_ORDER: [SkillDimension; DIMENSION_COUNT] = [
    SkillDimension::Ux,
    SkillDimension::Art,
    SkillDimension::Collaboration,
    SkillDimension::Communication,
    SkillDimension::Hci,
    SkillDimension::InfoViz,
    SkillDimension::Stats,
    SkillDimension::Maths,
    SkillDimension::Computer,
    SkillDimension::Graphics,
    SkillDimension::Repos,
    SkillDimension::Programming,
];

static LABEL_TO_DIMENSION: Lazy<HashMap<&'static str, SkillDimension>> = Lazy::new(|| {
    DISPLAY_ORDER.iter().map(|d| (d.label(), *d)).collect()
});

impl SkillDimension {
    /// Returns the human-readable chart label for this dimension.
    pub fn label(&self) -> &'static str {
        match self {
            SkillDimension::InfoViz => "Visualization",
            SkillDimension::Stats => "Statistics",
            SkillDimension::Maths => "Maths",
            SkillDimension::Art => "Art",
            SkillDimension::Computer => "Computers",
            SkillDimension::Programming => "Programming",
            SkillDimension::Graphics => "Graphics",
            SkillDimension::Hci => "HCI",
            SkillDimension::Ux => "UX",
            SkillDimension::Communication => "Communication",
            SkillDimension::Collaboration => "Collab",
            SkillDimension::Repos => "Repositories",
        }
    }

    /// Resolves a chart label back to its dimension.
    ///
    /// This is how a clicked axis label becomes a sort criterion.
    pub fn from_label(label: &str) -> Option<SkillDimension> {
        LABEL_TO_DIMENSION.get(label).copied()
    }

    /// Returns the dataset's JSON attribute name for this dimension.
    pub fn attribute_key(&self) -> &'static str {
        match self {
            SkillDimension::InfoViz => "skillInfoViz",
            SkillDimension::Stats => "skillStats",
            SkillDimension::Maths => "skillMaths",
            SkillDimension::Art => "skillArt",
            SkillDimension::Computer => "skillComputer",
            SkillDimension::Programming => "skillProgramming",
            SkillDimension::Graphics => "skillGraphics",
            SkillDimension::Hci => "skillHCI",
            SkillDimension::Ux => "skillUX",
            SkillDimension::Communication => "skillCommunication",
            SkillDimension::Collaboration => "skillCollaboration",
            SkillDimension::Repos => "skillRepos",
        }
    }

    /// Returns the storage slot for this dimension within a skill vector.
    pub(crate) fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SkillDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
