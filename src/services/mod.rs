// Service exports
pub mod dataset;

pub use dataset::{load_reference_store, BUNDLED_DATASET};
