//! Engine - single-threaded orchestrator over dataset, ordering, roster
//! and hover state.
//!
//! Owns the clear-then-reapply protocol against the chart surface and
//! publishes roster events in the order the roster emits them. All chart
//! commands the engine issues are programmatic; renderer echoes of those
//! commands must arrive tagged [`SelectionOrigin::Programmatic`] and are
//! ignored.

use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::domain::dataset::Dataset;
use crate::domain::foundation::{Alias, DomainError, EventEnvelope, SerializableDomainEvent};
use crate::domain::group::{GroupRoster, RosterSnapshot};
use crate::domain::ordering::{translator, Ordering, SelectionTranslator};
use crate::domain::skill::SkillDimension;
use crate::ports::{ChartSurface, EventPublisher, SelectionOrigin};

use super::view::{build_grid_spec, build_radar_spec};

/// Event type for settled hover notifications.
pub const HOVER_CHANGED: &str = "hover.changed";

pub struct Engine {
    dataset: Dataset,
    ordering: Ordering,
    translator: SelectionTranslator,
    roster: GroupRoster,
    hovered: Option<Alias>,
    chart: Arc<dyn ChartSurface>,
    publisher: Arc<dyn EventPublisher>,
}

impl Engine {
    /// Creates the engine and renders the initial grid and radar.
    ///
    /// # Errors
    ///
    /// - `AliasNotFound` if roster members are absent from the dataset,
    ///   which cannot happen for a fresh roster
    pub fn new(
        dataset: Dataset,
        initial_criterion: SkillDimension,
        chart: Arc<dyn ChartSurface>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, DomainError> {
        let ordering = Ordering::compute(&dataset, initial_criterion);
        let engine = Self {
            dataset,
            ordering,
            translator: SelectionTranslator::new(),
            roster: GroupRoster::new(),
            hovered: None,
            chart,
            publisher,
        };
        engine.render_grid();
        engine.render_radar()?;
        info!(
            criterion = initial_criterion.label(),
            participants = engine.ordering.len(),
            "engine started"
        );
        Ok(engine)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the current ordering.
    pub fn ordering(&self) -> &Ordering {
        &self.ordering
    }

    /// Returns a snapshot of the roster state.
    pub fn roster(&self) -> RosterSnapshot {
        self.roster.snapshot()
    }

    /// Returns the settled hovered alias, if any.
    pub fn hovered(&self) -> Option<&Alias> {
        self.hovered.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Renderer events
    // ─────────────────────────────────────────────────────────────────────

    /// Handles a click on a grid row label: re-sorts by that dimension
    /// and carries the active group's selection over to the new column
    /// positions.
    ///
    /// Unknown labels are ignored; the surface only emits labels the grid
    /// was rendered with, so an unknown one is stale, not invalid.
    pub fn label_clicked(&mut self, label: &str) -> Result<(), DomainError> {
        let Some(criterion) = SkillDimension::from_label(label) else {
            debug!(label, "ignoring click on unknown row label");
            return Ok(());
        };

        self.ordering = Ordering::compute(&self.dataset, criterion);
        info!(criterion = criterion.label(), "re-sorted");

        self.reapply_selection();
        self.render_grid();
        Ok(())
    }

    /// Handles a renderer-reported selection change.
    ///
    /// Programmatic echoes of the engine's own select/clear commands are
    /// dropped here; only user selections replace the active group's
    /// membership.
    pub async fn selection_changed(
        &mut self,
        positions: &[usize],
        origin: SelectionOrigin,
    ) -> Result<(), DomainError> {
        if origin == SelectionOrigin::Programmatic {
            trace!(?positions, "ignoring programmatic selection echo");
            return Ok(());
        }

        self.translator.record_user_selection(positions);
        let members = translator::from_positions(positions, &self.ordering);
        debug!(
            count = members.len(),
            group = self.roster.active_index(),
            "user selection replaces active group"
        );

        if let Some(event) = self
            .roster
            .set_selection(self.roster.active_index(), members)
        {
            self.publisher.publish(event.to_envelope()).await?;
        }
        self.render_radar()
    }

    /// Applies a settled hover state from the debouncer.
    pub async fn hover_settled(&mut self, hovered: Option<Alias>) -> Result<(), DomainError> {
        if self.hovered == hovered {
            return Ok(());
        }
        self.hovered = hovered;

        let payload = serde_json::json!({
            "alias": self.hovered.as_ref().map(|a| a.as_str()),
        });
        let envelope = EventEnvelope::new(HOVER_CHANGED, "engine", "Engine", payload);
        self.publisher.publish(envelope).await?;
        self.render_radar()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Group operations
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a new empty group. Silently ignored at capacity.
    pub async fn add_group(&mut self) -> Result<(), DomainError> {
        let Some(event) = self.roster.add_group() else {
            debug!("ignoring add_group at capacity");
            return Ok(());
        };
        info!(index = event.group_index, "group added");
        self.publisher.publish(event.to_envelope()).await?;
        self.render_radar()
    }

    /// Removes the group at `index`. Group 0 and out-of-range indices
    /// are silently ignored.
    pub async fn remove_group(&mut self, index: usize) -> Result<(), DomainError> {
        let events = self.roster.remove_group(index);
        if events.is_empty() {
            debug!(index, "ignoring remove_group");
            return Ok(());
        }
        info!(index, "group removed");

        let envelopes = events.iter().map(|e| e.to_envelope()).collect();
        self.publisher.publish_all(envelopes).await?;

        // The active group may have changed; the grid selection follows it.
        self.reapply_selection();
        self.render_radar()
    }

    /// Empties the group at `index` in place.
    pub async fn clear_group(&mut self, index: usize) -> Result<(), DomainError> {
        let Some(event) = self.roster.clear_group(index) else {
            debug!(index, "ignoring clear_group out of range");
            return Ok(());
        };
        info!(index, "group cleared");
        self.publisher.publish(event.to_envelope()).await?;

        if index == self.roster.active_index() {
            self.reapply_selection();
        }
        self.render_radar()
    }

    /// Makes the group at `index` active and shows its membership as the
    /// grid selection.
    pub async fn select_group(&mut self, index: usize) -> Result<(), DomainError> {
        let Some(event) = self.roster.select_group(index) else {
            debug!(index, "ignoring select_group out of range");
            return Ok(());
        };
        info!(index, "active group changed");
        self.publisher.publish(event.to_envelope()).await?;

        self.reapply_selection();
        self.render_radar()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    /// Clears the previously issued selection and re-selects the active
    /// group's members at their positions in the current ordering.
    fn reapply_selection(&mut self) {
        let reapply = self
            .translator
            .reapply(self.roster.active_group().members().iter(), &self.ordering);
        if !reapply.clear.is_empty() {
            self.chart.clear_selection(&reapply.clear);
        }
        if !reapply.select.is_empty() {
            self.chart.select(&reapply.select);
        }
    }

    fn render_grid(&self) {
        let spec = build_grid_spec(&self.dataset, &self.ordering);
        self.chart.render_grid(&spec);
    }

    fn render_radar(&self) -> Result<(), DomainError> {
        let spec = build_radar_spec(
            &self.dataset,
            self.roster.groups(),
            self.roster.active_index(),
            self.hovered.as_ref(),
        )?;
        self.chart.render_radar(&spec);
        Ok(())
    }
}
