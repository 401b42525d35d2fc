//! Recording chart surface.
//!
//! Stand-in for a real renderer. Records every command the engine issues
//! so tests and the demo binary can assert on the exact render/select
//! sequence.

use std::sync::{Mutex, MutexGuard};

use crate::ports::{ChartSurface, GridSpec, RadarSpec};

/// One command issued against the surface, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartCommand {
    RenderGrid(GridSpec),
    RenderRadar(RadarSpec),
    Select(Vec<usize>),
    ClearSelection(Vec<usize>),
}

/// ChartSurface implementation that records issued commands.
#[derive(Default)]
pub struct RecordingChart {
    commands: Mutex<Vec<ChartCommand>>,
}

impl RecordingChart {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ChartCommand>> {
        self.commands
            .lock()
            .expect("RecordingChart: commands lock poisoned")
    }

    /// Returns all recorded commands, in issue order.
    pub fn commands(&self) -> Vec<ChartCommand> {
        self.lock().clone()
    }

    /// Returns the most recently rendered grid, if any.
    pub fn last_grid(&self) -> Option<GridSpec> {
        self.lock().iter().rev().find_map(|c| match c {
            ChartCommand::RenderGrid(spec) => Some(spec.clone()),
            _ => None,
        })
    }

    /// Returns the most recently rendered radar, if any.
    pub fn last_radar(&self) -> Option<RadarSpec> {
        self.lock().iter().rev().find_map(|c| match c {
            ChartCommand::RenderRadar(spec) => Some(spec.clone()),
            _ => None,
        })
    }

    /// Returns the column positions currently selected on the surface,
    /// replaying select and clear commands in order.
    pub fn selected_positions(&self) -> Vec<usize> {
        let mut selected: Vec<usize> = Vec::new();
        for command in self.lock().iter() {
            match command {
                ChartCommand::Select(positions) => {
                    for &p in positions {
                        if !selected.contains(&p) {
                            selected.push(p);
                        }
                    }
                }
                ChartCommand::ClearSelection(positions) => {
                    selected.retain(|p| !positions.contains(p));
                }
                _ => {}
            }
        }
        selected.sort_unstable();
        selected
    }

    /// Clears recorded commands (for test isolation).
    pub fn reset(&self) {
        self.lock().clear();
    }
}

impl ChartSurface for RecordingChart {
    fn render_grid(&self, spec: &GridSpec) {
        self.lock().push(ChartCommand::RenderGrid(spec.clone()));
    }

    fn render_radar(&self, spec: &RadarSpec) {
        self.lock().push(ChartCommand::RenderRadar(spec.clone()));
    }

    fn select(&self, positions: &[usize]) {
        self.lock().push(ChartCommand::Select(positions.to_vec()));
    }

    fn clear_selection(&self, positions: &[usize]) {
        self.lock()
            .push(ChartCommand::ClearSelection(positions.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::GridCell;

    fn sample_grid() -> GridSpec {
        GridSpec {
            row_labels: vec!["UX".to_string()],
            column_labels: vec!["Ann".to_string(), "Bo".to_string()],
            sorted_by: "UX".to_string(),
            cells: vec![GridCell {
                column: "Ann".to_string(),
                row: "UX".to_string(),
                value: 5,
            }],
        }
    }

    #[test]
    fn records_commands_in_order() {
        let chart = RecordingChart::new();
        chart.render_grid(&sample_grid());
        chart.select(&[0, 1]);

        let commands = chart.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], ChartCommand::RenderGrid(_)));
        assert_eq!(commands[1], ChartCommand::Select(vec![0, 1]));
    }

    #[test]
    fn selected_positions_replays_select_and_clear() {
        let chart = RecordingChart::new();
        chart.select(&[0, 1, 2]);
        chart.clear_selection(&[1]);
        chart.select(&[3]);

        assert_eq!(chart.selected_positions(), vec![0, 2, 3]);
    }

    #[test]
    fn last_grid_returns_most_recent() {
        let chart = RecordingChart::new();
        let mut first = sample_grid();
        first.sorted_by = "Art".to_string();
        chart.render_grid(&first);
        chart.render_grid(&sample_grid());

        assert_eq!(chart.last_grid().unwrap().sorted_by, "UX");
    }

    #[test]
    fn reset_discards_history() {
        let chart = RecordingChart::new();
        chart.select(&[0]);
        chart.reset();
        assert!(chart.commands().is_empty());
    }
}
