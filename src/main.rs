//! Smoke binary: loads the configured dataset, wires the engine against
//! the in-memory adapters and runs a short scripted interaction.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use skillgrid::adapters::chart::RecordingChart;
use skillgrid::adapters::events::InMemoryEventBus;
use skillgrid::application::{Engine, HoverDebouncer};
use skillgrid::config::AppConfig;
use skillgrid::domain::dataset::load_dataset;
use skillgrid::domain::skill::DISPLAY_ORDER;
use skillgrid::ports::SelectionOrigin;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "smoke run failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    info!(path = %config.dataset.path, "loading dataset");
    let dataset = load_dataset(&config.dataset.path).await?;
    info!(participants = dataset.len(), "dataset loaded");

    let chart = Arc::new(RecordingChart::new());
    let bus = Arc::new(InMemoryEventBus::new());
    let mut engine = Engine::new(dataset, DISPLAY_ORDER[0], chart.clone(), bus.clone())?;

    // Scripted interaction: select the two lowest-ranked participants,
    // hover over a column, add a second group, then re-sort.
    engine.selection_changed(&[0, 1], SelectionOrigin::User).await?;

    let (debouncer, mut settled) = HoverDebouncer::spawn(config.hover.debounce_window());
    if let Some(first) = engine.ordering().alias_at(0).ok().cloned() {
        debouncer.pointer_entered(first);
    }
    debouncer.pointer_left();
    drop(debouncer);
    while let Some(hover) = settled.recv().await {
        engine.hover_settled(hover).await?;
    }

    engine.add_group().await?;
    engine.select_group(1).await?;
    engine.label_clicked("Programming")?;

    tokio::time::sleep(Duration::from_millis(10)).await;

    let grid = chart.last_grid().map(|g| g.sorted_by);
    info!(
        events = bus.event_count(),
        commands = chart.commands().len(),
        sorted_by = grid.as_deref().unwrap_or("-"),
        groups = engine.roster().groups().len(),
        "smoke run complete"
    );
    Ok(())
}
