//! Immutable in-memory dataset store.

use std::collections::HashMap;

use super::{DatasetError, Participant};
use crate::domain::foundation::Alias;

/// The full dataset, immutable after load.
///
/// Canonical store keyed by alias; load order is preserved because it is
/// the tie-break order for every stable sort downstream.
///
/// # Invariants
///
/// - Aliases are unique.
/// - Participants are never added, removed, or modified after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    participants: Vec<Participant>,
    by_alias: HashMap<Alias, usize>,
}

impl Dataset {
    /// Builds a dataset from participant records, preserving input order.
    ///
    /// # Errors
    ///
    /// - `DuplicateAlias` if two records share an alias
    pub fn from_participants(participants: Vec<Participant>) -> Result<Self, DatasetError> {
        let mut by_alias = HashMap::with_capacity(participants.len());
        for (index, participant) in participants.iter().enumerate() {
            if by_alias
                .insert(participant.alias().clone(), index)
                .is_some()
            {
                return Err(DatasetError::DuplicateAlias {
                    alias: participant.alias().to_string(),
                });
            }
        }
        Ok(Self {
            participants,
            by_alias,
        })
    }

    /// Looks up a participant by alias.
    pub fn get(&self, alias: &Alias) -> Option<&Participant> {
        self.by_alias.get(alias).map(|&i| &self.participants[i])
    }

    /// Returns true if the alias exists in the dataset.
    pub fn contains(&self, alias: &Alias) -> bool {
        self.by_alias.contains_key(alias)
    }

    /// Iterates participants in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Iterates aliases in load order.
    pub fn aliases(&self) -> impl Iterator<Item = &Alias> {
        self.participants.iter().map(|p| p.alias())
    }

    /// Returns the number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Returns true if the dataset has no participants.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::skill::{Rating, SkillVector};

    fn participant(alias: &str, level: u8) -> Participant {
        Participant::new(
            Alias::new(alias).unwrap(),
            Timestamp::now(),
            String::new(),
            SkillVector::uniform(Rating::try_from_u8(level).unwrap()),
        )
    }

    #[test]
    fn preserves_load_order() {
        let dataset = Dataset::from_participants(vec![
            participant("Cy", 1),
            participant("Ann", 2),
            participant("Bo", 3),
        ])
        .unwrap();

        let order: Vec<_> = dataset.aliases().map(|a| a.as_str()).collect();
        assert_eq!(order, vec!["Cy", "Ann", "Bo"]);
    }

    #[test]
    fn get_finds_by_alias() {
        let dataset =
            Dataset::from_participants(vec![participant("Ann", 2), participant("Bo", 3)])
                .unwrap();
        let ann = Alias::new("Ann").unwrap();
        assert_eq!(dataset.get(&ann).unwrap().alias(), &ann);
    }

    #[test]
    fn get_returns_none_for_unknown_alias() {
        let dataset = Dataset::from_participants(vec![participant("Ann", 2)]).unwrap();
        assert!(dataset.get(&Alias::new("Zed").unwrap()).is_none());
    }

    #[test]
    fn rejects_duplicate_aliases() {
        let result =
            Dataset::from_participants(vec![participant("Ann", 2), participant("Ann", 5)]);
        assert!(matches!(
            result,
            Err(DatasetError::DuplicateAlias { alias }) if alias == "Ann"
        ));
    }

    #[test]
    fn empty_dataset_is_valid() {
        let dataset = Dataset::from_participants(Vec::new()).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }
}
