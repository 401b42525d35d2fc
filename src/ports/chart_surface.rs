//! ChartSurface port - Interface to the opaque rendering surface.
//!
//! The engine describes what to draw declaratively and addresses the
//! selection by positional index; everything visual (colors, layout,
//! tooltips) lives behind this seam.

use serde::{Deserialize, Serialize};

/// Whether a renderer-reported selection change came from the user or
/// from the engine itself.
///
/// The clear-then-reapply dance during a re-sort makes the renderer
/// report selection changes the engine caused; those must not re-enter
/// selection handling as if a user made them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOrigin {
    /// A genuine user click on the surface.
    User,
    /// A select/clear command the engine issued programmatically.
    Programmatic,
}

/// One cell of the categorical heatmap grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Column label: the participant alias.
    pub column: String,
    /// Row label: the skill dimension label.
    pub row: String,
    /// The rating, 1-10.
    pub value: u8,
}

/// Declarative description of the heatmap grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Row labels: skill dimensions in canonical display order.
    pub row_labels: Vec<String>,
    /// Column labels: aliases in the current ordering.
    pub column_labels: Vec<String>,
    /// The row label of the current sort criterion, for emphasis.
    pub sorted_by: String,
    /// All cells, one per (column, row) pair.
    pub cells: Vec<GridCell>,
}

/// One polygon of the radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarPolygon {
    /// Legend entry: a group ordinal name or a hovered alias.
    pub name: String,
    /// Levels in canonical display order, 0-10.
    pub values: Vec<u8>,
    /// True for the active group, which gets value labels.
    pub emphasized: bool,
}

/// Declarative description of the radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarSpec {
    /// Axis labels: skill dimensions in canonical display order.
    pub axis_labels: Vec<String>,
    /// Upper bound of every axis.
    pub max_value: u8,
    /// Polygons in draw order: hover preview first if present, then one
    /// per group.
    pub polygons: Vec<RadarPolygon>,
}

/// Port for the rendering surface consumed by the engine.
///
/// Implementations accept declarative series descriptions and positional
/// selection commands. All positional indices are only valid against the
/// most recently rendered grid; a new `render_grid` renumbers everything.
pub trait ChartSurface: Send + Sync {
    /// Replaces the heatmap contents.
    fn render_grid(&self, spec: &GridSpec);

    /// Replaces the radar contents.
    fn render_radar(&self, spec: &RadarSpec);

    /// Selects the cells at the given column positions.
    fn select(&self, positions: &[usize]);

    /// Unselects the cells at the given column positions.
    fn clear_selection(&self, positions: &[usize]);
}
