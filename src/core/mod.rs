// Core algorithm exports
pub mod distance;
pub mod history;
pub mod locator;
pub mod proximity;
pub mod reference;

pub use distance::{haversine_km, haversine_miles};
pub use history::{HistoryLog, HISTORY_CAPACITY};
pub use locator::{lookup, Locator, LookupError};
pub use proximity::rank_targets;
pub use reference::{BuildReport, DatasetError, ReferenceStore, SkipReason};
