//! View-model builders for the two chart surfaces.
//!
//! Pure functions from domain state to the declarative specs the
//! `ChartSurface` port consumes. No rendering concerns live here, only
//! the mapping of ratings and profiles onto labeled rows, columns and
//! polygons.

use crate::domain::aggregate::{max_profile, single_profile};
use crate::domain::dataset::Dataset;
use crate::domain::foundation::{Alias, DomainError};
use crate::domain::group::Group;
use crate::domain::ordering::Ordering;
use crate::domain::skill::{Rating, DISPLAY_ORDER};
use crate::ports::{GridCell, GridSpec, RadarPolygon, RadarSpec};

/// Builds the heatmap grid: rows are the skill dimensions in canonical
/// display order, columns are the aliases in the current ordering.
pub fn build_grid_spec(dataset: &Dataset, ordering: &Ordering) -> GridSpec {
    let row_labels: Vec<String> = DISPLAY_ORDER.iter().map(|d| d.label().to_string()).collect();
    let column_labels: Vec<String> = ordering
        .aliases()
        .iter()
        .map(|a| a.as_str().to_string())
        .collect();

    let cells = ordering
        .aliases()
        .iter()
        .filter_map(|alias| dataset.get(alias))
        .flat_map(|participant| {
            DISPLAY_ORDER.iter().map(move |dim| GridCell {
                column: participant.alias().as_str().to_string(),
                row: dim.label().to_string(),
                value: participant.skills().get(*dim).value(),
            })
        })
        .collect();

    GridSpec {
        row_labels,
        column_labels,
        sorted_by: ordering.criterion().label().to_string(),
        cells,
    }
}

/// Display name of the group at `index`, as the radar legend shows it.
pub fn group_display_name(index: usize) -> String {
    format!("Group {} (max. skill levels)", index + 1)
}

/// Builds the radar chart: an optional hovered-participant polygon first,
/// then one maximum-profile polygon per group, with the active group
/// emphasized.
///
/// # Errors
///
/// - `AliasNotFound` if a group member or the hovered alias is absent
///   from the dataset
pub fn build_radar_spec(
    dataset: &Dataset,
    groups: &[Group],
    active_index: usize,
    hovered: Option<&Alias>,
) -> Result<RadarSpec, DomainError> {
    let axis_labels: Vec<String> = DISPLAY_ORDER.iter().map(|d| d.label().to_string()).collect();

    let mut polygons = Vec::with_capacity(groups.len() + 1);

    if let Some(alias) = hovered {
        let profile = single_profile(alias, dataset)?;
        polygons.push(RadarPolygon {
            name: alias.as_str().to_string(),
            values: profile.display_values().to_vec(),
            emphasized: false,
        });
    }

    for (index, group) in groups.iter().enumerate() {
        let profile = max_profile(group.members().iter(), dataset)?;
        polygons.push(RadarPolygon {
            name: group_display_name(index),
            values: profile.display_values().to_vec(),
            emphasized: index == active_index,
        });
    }

    Ok(RadarSpec {
        axis_labels,
        max_value: Rating::MAX.value(),
        polygons,
    })
}
