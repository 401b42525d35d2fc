//! Per-participant skill vector over the fixed dimension set.

use serde::{Deserialize, Serialize};

use super::{Rating, SkillDimension, DIMENSION_COUNT};

/// A complete rating vector: one [`Rating`] for every [`SkillDimension`].
///
/// # Invariants
///
/// - Every dimension has a value; partial vectors cannot be constructed.
/// - The dimension set is closed, so no extra fields can ever appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SkillVectorRecord", into = "SkillVectorRecord")]
pub struct SkillVector([Rating; DIMENSION_COUNT]);

impl SkillVector {
    /// Builds a vector by evaluating `f` for every dimension.
    pub fn from_fn(f: impl Fn(SkillDimension) -> Rating) -> Self {
        let mut slots = [Rating::MIN; DIMENSION_COUNT];
        for dim in super::DISPLAY_ORDER {
            slots[dim.slot()] = f(dim);
        }
        Self(slots)
    }

    /// Builds a vector with the same rating in every dimension.
    pub fn uniform(rating: Rating) -> Self {
        Self([rating; DIMENSION_COUNT])
    }

    /// Returns the rating for a dimension.
    pub fn get(&self, dimension: SkillDimension) -> Rating {
        self.0[dimension.slot()]
    }

    /// Iterates dimensions and ratings in canonical display order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillDimension, Rating)> + '_ {
        super::DISPLAY_ORDER.into_iter().map(|d| (d, self.get(d)))
    }
}

/// Wire shape of a skill vector: the twelve flat `skill*` attributes as
/// they appear in each dataset record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SkillVectorRecord {
    #[serde(rename = "skillInfoViz")]
    info_viz: Rating,
    #[serde(rename = "skillStats")]
    stats: Rating,
    #[serde(rename = "skillMaths")]
    maths: Rating,
    #[serde(rename = "skillArt")]
    art: Rating,
    #[serde(rename = "skillComputer")]
    computer: Rating,
    #[serde(rename = "skillProgramming")]
    programming: Rating,
    #[serde(rename = "skillGraphics")]
    graphics: Rating,
    #[serde(rename = "skillHCI")]
    hci: Rating,
    #[serde(rename = "skillUX")]
    ux: Rating,
    #[serde(rename = "skillCommunication")]
    communication: Rating,
    #[serde(rename = "skillCollaboration")]
    collaboration: Rating,
    #[serde(rename = "skillRepos")]
    repos: Rating,
}

impl From<SkillVectorRecord> for SkillVector {
    fn from(record: SkillVectorRecord) -> Self {
        SkillVector::from_fn(|dim| match dim {
            SkillDimension::InfoViz => record.info_viz,
            SkillDimension::Stats => record.stats,
            SkillDimension::Maths => record.maths,
            SkillDimension::Art => record.art,
            SkillDimension::Computer => record.computer,
            SkillDimension::Programming => record.programming,
            SkillDimension::Graphics => record.graphics,
            SkillDimension::Hci => record.hci,
            SkillDimension::Ux => record.ux,
            SkillDimension::Communication => record.communication,
            SkillDimension::Collaboration => record.collaboration,
            SkillDimension::Repos => record.repos,
        })
    }
}

impl From<SkillVector> for SkillVectorRecord {
    fn from(vector: SkillVector) -> Self {
        SkillVectorRecord {
            info_viz: vector.get(SkillDimension::InfoViz),
            stats: vector.get(SkillDimension::Stats),
            maths: vector.get(SkillDimension::Maths),
            art: vector.get(SkillDimension::Art),
            computer: vector.get(SkillDimension::Computer),
            programming: vector.get(SkillDimension::Programming),
            graphics: vector.get(SkillDimension::Graphics),
            hci: vector.get(SkillDimension::Hci),
            ux: vector.get(SkillDimension::Ux),
            communication: vector.get(SkillDimension::Communication),
            collaboration: vector.get(SkillDimension::Collaboration),
            repos: vector.get(SkillDimension::Repos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skill::DISPLAY_ORDER;

    fn rating(v: u8) -> Rating {
        Rating::try_from_u8(v).unwrap()
    }

    #[test]
    fn from_fn_assigns_every_dimension() {
        let vector = SkillVector::from_fn(|dim| match dim {
            SkillDimension::Programming => rating(8),
            _ => rating(1),
        });
        assert_eq!(vector.get(SkillDimension::Programming).value(), 8);
        assert_eq!(vector.get(SkillDimension::Art).value(), 1);
    }

    #[test]
    fn uniform_fills_all_slots() {
        let vector = SkillVector::uniform(rating(5));
        for dim in DISPLAY_ORDER {
            assert_eq!(vector.get(dim).value(), 5);
        }
    }

    #[test]
    fn iter_follows_display_order() {
        let vector = SkillVector::uniform(rating(3));
        let dims: Vec<_> = vector.iter().map(|(d, _)| d).collect();
        assert_eq!(dims, DISPLAY_ORDER.to_vec());
    }

    #[test]
    fn deserializes_from_flat_dataset_attributes() {
        let json = r#"{
            "skillInfoViz": 4, "skillStats": 5, "skillMaths": 6,
            "skillArt": 2, "skillComputer": 9, "skillProgramming": 8,
            "skillGraphics": 3, "skillHCI": 4, "skillUX": 5,
            "skillCommunication": 7, "skillCollaboration": 8, "skillRepos": 6
        }"#;
        let vector: SkillVector = serde_json::from_str(json).unwrap();
        assert_eq!(vector.get(SkillDimension::Programming).value(), 8);
        assert_eq!(vector.get(SkillDimension::Art).value(), 2);
        assert_eq!(vector.get(SkillDimension::Repos).value(), 6);
    }

    #[test]
    fn rejects_missing_dimension() {
        // No partial vectors: skillRepos is absent.
        let json = r#"{
            "skillInfoViz": 4, "skillStats": 5, "skillMaths": 6,
            "skillArt": 2, "skillComputer": 9, "skillProgramming": 8,
            "skillGraphics": 3, "skillHCI": 4, "skillUX": 5,
            "skillCommunication": 7, "skillCollaboration": 8
        }"#;
        assert!(serde_json::from_str::<SkillVector>(json).is_err());
    }

    #[test]
    fn rejects_out_of_scale_rating() {
        let json = r#"{
            "skillInfoViz": 11, "skillStats": 5, "skillMaths": 6,
            "skillArt": 2, "skillComputer": 9, "skillProgramming": 8,
            "skillGraphics": 3, "skillHCI": 4, "skillUX": 5,
            "skillCommunication": 7, "skillCollaboration": 8, "skillRepos": 6
        }"#;
        assert!(serde_json::from_str::<SkillVector>(json).is_err());
    }

    #[test]
    fn serialization_round_trips() {
        let vector = SkillVector::from_fn(|dim| match dim {
            SkillDimension::Hci => rating(9),
            _ => rating(2),
        });
        let json = serde_json::to_string(&vector).unwrap();
        let restored: SkillVector = serde_json::from_str(&json).unwrap();
        assert_eq!(vector, restored);
    }
}
