use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to look up the nearest targets for a zip code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LookupRequest {
    #[validate(length(min = 1, max = 16))]
    pub zip: String,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}
