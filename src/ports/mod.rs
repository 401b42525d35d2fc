//! Ports - trait seams between the engine and the outside world.

mod chart_surface;
mod event_publisher;
mod event_subscriber;

pub use chart_surface::{
    ChartSurface, GridCell, GridSpec, RadarPolygon, RadarSpec, SelectionOrigin,
};
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
