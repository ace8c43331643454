// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, Target, RankedMatch, LookupResult, default_targets};
pub use requests::LookupRequest;
pub use responses::{HistoryResponse, HealthResponse, ErrorResponse};
