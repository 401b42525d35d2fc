//! Stable per-dimension ordering with alias/position lookups.

use std::collections::HashMap;

use crate::domain::dataset::Dataset;
use crate::domain::foundation::{Alias, DomainError};
use crate::domain::skill::SkillDimension;

/// A deterministic ordering of all participants, sorted ascending by one
/// skill dimension.
///
/// Orderings are derived, recomputable values: a criterion change produces
/// a fresh `Ordering` and invalidates every position handed out by the old
/// one. Callers must never cache positions across a re-sort.
///
/// # Invariants
///
/// - The sort is stable: participants with equal ratings keep their
///   relative dataset load order.
/// - Every dataset alias appears exactly once.
#[derive(Debug, Clone)]
pub struct Ordering {
    criterion: SkillDimension,
    aliases: Vec<Alias>,
    positions: HashMap<Alias, usize>,
}

impl Ordering {
    /// Computes the ordering of the dataset by the given dimension.
    pub fn compute(dataset: &Dataset, criterion: SkillDimension) -> Self {
        let mut sorted: Vec<_> = dataset.iter().collect();
        // Vec::sort_by_key is stable, which is what keeps tie layout
        // reproducible across runs.
        sorted.sort_by_key(|p| p.skills().get(criterion));

        let aliases: Vec<Alias> = sorted.iter().map(|p| p.alias().clone()).collect();
        let positions = aliases
            .iter()
            .enumerate()
            .map(|(i, a)| (a.clone(), i))
            .collect();

        Self {
            criterion,
            aliases,
            positions,
        }
    }

    /// Returns the dimension this ordering is sorted by.
    pub fn criterion(&self) -> SkillDimension {
        self.criterion
    }

    /// Returns all aliases in sorted order.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// Returns the number of participants in the ordering.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if the ordering is empty.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Returns the position of an alias within this ordering.
    ///
    /// # Errors
    ///
    /// - `AliasNotFound` if the alias is not part of this ordering
    pub fn position_of(&self, alias: &Alias) -> Result<usize, DomainError> {
        self.positions
            .get(alias)
            .copied()
            .ok_or_else(|| DomainError::alias_not_found(alias))
    }

    /// Returns the alias at a position within this ordering.
    ///
    /// # Errors
    ///
    /// - `PositionNotFound` if the position is out of range
    pub fn alias_at(&self, position: usize) -> Result<&Alias, DomainError> {
        self.aliases
            .get(position)
            .ok_or_else(|| DomainError::position_not_found(position, self.aliases.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Participant;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::domain::skill::{Rating, SkillVector};
    use proptest::prelude::*;

    fn participant(alias: &str, programming: u8, art: u8) -> Participant {
        Participant::new(
            Alias::new(alias).unwrap(),
            Timestamp::now(),
            String::new(),
            SkillVector::from_fn(|dim| {
                let v = match dim {
                    SkillDimension::Programming => programming,
                    SkillDimension::Art => art,
                    _ => 1,
                };
                Rating::try_from_u8(v).unwrap()
            }),
        )
    }

    fn dataset(records: Vec<Participant>) -> Dataset {
        Dataset::from_participants(records).unwrap()
    }

    fn order_of(ordering: &Ordering) -> Vec<&str> {
        ordering.aliases().iter().map(|a| a.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_by_criterion() {
        let data = dataset(vec![
            participant("Ann", 8, 2),
            participant("Bo", 3, 9),
            participant("Cy", 5, 5),
        ]);
        let ordering = Ordering::compute(&data, SkillDimension::Programming);
        assert_eq!(order_of(&ordering), vec!["Bo", "Cy", "Ann"]);
    }

    #[test]
    fn ties_keep_dataset_load_order() {
        let data = dataset(vec![
            participant("Ann", 5, 1),
            participant("Bo", 5, 1),
            participant("Cy", 2, 1),
            participant("Di", 5, 1),
        ]);
        let ordering = Ordering::compute(&data, SkillDimension::Programming);
        assert_eq!(order_of(&ordering), vec!["Cy", "Ann", "Bo", "Di"]);
    }

    #[test]
    fn different_criteria_give_different_orderings() {
        let data = dataset(vec![participant("Ann", 8, 2), participant("Bo", 3, 9)]);
        let by_programming = Ordering::compute(&data, SkillDimension::Programming);
        let by_art = Ordering::compute(&data, SkillDimension::Art);
        assert_eq!(order_of(&by_programming), vec!["Bo", "Ann"]);
        assert_eq!(order_of(&by_art), vec!["Ann", "Bo"]);
    }

    #[test]
    fn position_of_and_alias_at_agree() {
        let data = dataset(vec![
            participant("Ann", 8, 2),
            participant("Bo", 3, 9),
            participant("Cy", 5, 5),
        ]);
        let ordering = Ordering::compute(&data, SkillDimension::Programming);
        for p in 0..ordering.len() {
            let alias = ordering.alias_at(p).unwrap().clone();
            assert_eq!(ordering.position_of(&alias).unwrap(), p);
        }
    }

    #[test]
    fn position_of_unknown_alias_is_not_found() {
        let data = dataset(vec![participant("Ann", 8, 2)]);
        let ordering = Ordering::compute(&data, SkillDimension::Programming);
        let err = ordering.position_of(&Alias::new("Zed").unwrap()).unwrap_err();
        assert_eq!(err.code, ErrorCode::AliasNotFound);
    }

    #[test]
    fn alias_at_out_of_range_is_not_found() {
        let data = dataset(vec![participant("Ann", 8, 2)]);
        let ordering = Ordering::compute(&data, SkillDimension::Programming);
        let err = ordering.alias_at(5).unwrap_err();
        assert_eq!(err.code, ErrorCode::PositionNotFound);
    }

    #[test]
    fn empty_dataset_yields_empty_ordering() {
        let data = dataset(Vec::new());
        let ordering = Ordering::compute(&data, SkillDimension::Programming);
        assert!(ordering.is_empty());
    }

    proptest! {
        #[test]
        fn sort_is_stable_for_arbitrary_ratings(ratings in prop::collection::vec(1u8..=10, 0..24)) {
            let records: Vec<_> = ratings
                .iter()
                .enumerate()
                .map(|(i, &r)| participant(&format!("p{}", i), r, 1))
                .collect();
            let data = dataset(records);
            let ordering = Ordering::compute(&data, SkillDimension::Programming);

            // Ascending by rating, and equal ratings keep index order
            // (encoded in the alias suffix).
            let sorted: Vec<_> = ordering
                .aliases()
                .iter()
                .map(|a| {
                    let idx: usize = a.as_str()[1..].parse().unwrap();
                    (ratings[idx], idx)
                })
                .collect();
            for pair in sorted.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }

        #[test]
        fn round_trip_holds_for_all_positions(ratings in prop::collection::vec(1u8..=10, 1..24)) {
            let records: Vec<_> = ratings
                .iter()
                .enumerate()
                .map(|(i, &r)| participant(&format!("p{}", i), r, 1))
                .collect();
            let data = dataset(records);
            let ordering = Ordering::compute(&data, SkillDimension::Programming);

            for p in 0..ordering.len() {
                let alias = ordering.alias_at(p).unwrap().clone();
                prop_assert_eq!(ordering.position_of(&alias).unwrap(), p);
            }
        }
    }
}
