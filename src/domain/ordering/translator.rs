//! Selection translation between alias sets and positional index sets.
//!
//! The rendering surface only understands positional indices, which are
//! transient: a re-sort renumbers everything. The translator is the one
//! place that converts between the renderer's index protocol and the
//! alias-based selection state, and it owns the clear-then-reapply
//! protocol that keeps selection identity intact across re-sorts.

use crate::domain::foundation::Alias;

use super::Ordering;

/// Maps aliases to their positions in the given ordering.
///
/// Aliases not present in the ordering are silently dropped: participants
/// never disappear from the dataset, so this only guards against stale
/// input. Output is ascending and duplicate-free so renderer commands are
/// deterministic.
pub fn to_positions<'a>(
    aliases: impl IntoIterator<Item = &'a Alias>,
    ordering: &Ordering,
) -> Vec<usize> {
    let mut positions: Vec<usize> = aliases
        .into_iter()
        .filter_map(|alias| ordering.position_of(alias).ok())
        .collect();
    positions.sort_unstable();
    positions.dedup();
    positions
}

/// Maps renderer-reported positions back to aliases.
///
/// Out-of-range positions are dropped the same way stale aliases are.
pub fn from_positions(positions: &[usize], ordering: &Ordering) -> Vec<Alias> {
    let mut seen = vec![false; ordering.len()];
    positions
        .iter()
        .filter_map(|&p| {
            let alias = ordering.alias_at(p).ok()?;
            if seen[p] {
                return None;
            }
            seen[p] = true;
            Some(alias.clone())
        })
        .collect()
}

/// The command pair a renderer must execute when the ordering changes:
/// unselect the previously issued indices, then select the same aliases
/// at their new positions.
///
/// Reusing old positions against a new ordering silently corrupts the
/// displayed selection; the clear must happen first, and the pair is
/// applied atomically from the caller's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionReapply {
    /// Positions to unselect (as issued against the previous ordering).
    pub clear: Vec<usize>,
    /// Positions to select against the new ordering.
    pub select: Vec<usize>,
}

/// Tracks the positional selection last issued to the renderer so it can
/// be cleared before a new ordering is applied.
#[derive(Debug, Clone, Default)]
pub struct SelectionTranslator {
    last_issued: Vec<usize>,
}

impl SelectionTranslator {
    /// Creates a translator with no issued selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the positions last issued to the renderer.
    pub fn last_issued(&self) -> &[usize] {
        &self.last_issued
    }

    /// Records positions reported by a user-driven renderer selection,
    /// so a later re-sort clears exactly what the renderer has selected.
    pub fn record_user_selection(&mut self, positions: &[usize]) {
        self.last_issued = positions.to_vec();
        self.last_issued.sort_unstable();
        self.last_issued.dedup();
    }

    /// Builds the clear-then-select command pair for a new ordering and
    /// records the newly issued positions.
    pub fn reapply<'a>(
        &mut self,
        selected: impl IntoIterator<Item = &'a Alias>,
        ordering: &Ordering,
    ) -> SelectionReapply {
        let clear = std::mem::take(&mut self.last_issued);
        let select = to_positions(selected, ordering);
        self.last_issued = select.clone();
        SelectionReapply { clear, select }
    }
}
