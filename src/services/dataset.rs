use crate::config::DatasetSettings;
use crate::core::{DatasetError, ReferenceStore};

/// Sample Puget Sound / southwest Washington dataset compiled into the binary
pub const BUNDLED_DATASET: &str = include_str!("../../data/zip_lat_long.csv");

/// Build the reference store from the configured dataset
///
/// Reads `settings.path` when set, otherwise parses the bundled sample.
pub fn load_reference_store(settings: &DatasetSettings) -> Result<ReferenceStore, DatasetError> {
    match settings.path.as_deref() {
        Some(path) => {
            tracing::info!("Loading zip dataset from {} (strict: {})", path, settings.strict);
            ReferenceStore::load(path, settings.strict)
        }
        None if settings.strict => {
            tracing::info!("Loading bundled zip dataset (strict)");
            ReferenceStore::build_strict(BUNDLED_DATASET)
        }
        None => {
            tracing::info!("Loading bundled zip dataset");
            Ok(ReferenceStore::build(BUNDLED_DATASET))
        }
    }
}
