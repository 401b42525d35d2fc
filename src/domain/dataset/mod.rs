//! Dataset model - immutable participant records loaded once per run.

mod errors;
mod loader;
mod participant;
mod store;

pub use errors::DatasetError;
pub use loader::{load_dataset, parse_dataset};
pub use participant::Participant;
pub use store::Dataset;
