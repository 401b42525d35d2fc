//! Chart surface adapters.

mod recording;

pub use recording::{ChartCommand, RecordingChart};
