use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::core::{history::HistoryLog, proximity::rank_targets, reference::ReferenceStore};
use crate::models::{LookupResult, Target};

/// Errors returned by a lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Zip code not found in database: {0}")]
    NotFound(String),

    #[error("Empty zip code query")]
    EmptyQuery,
}

/// Look up a zip code and rank `targets` by distance from it
///
/// The query is trimmed before the exact-match lookup.
pub fn lookup(
    store: &ReferenceStore,
    query: &str,
    targets: &[Target],
    k: usize,
) -> Result<LookupResult, LookupError> {
    let zip = query.trim();
    if zip.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let coordinate = store
        .get(zip)
        .ok_or_else(|| LookupError::NotFound(zip.to_string()))?;

    let matches = rank_targets(coordinate, targets, k);

    Ok(LookupResult {
        id: uuid::Uuid::new_v4().to_string(),
        query_zip: zip.to_string(),
        coordinate,
        matches,
        created_at: chrono::Utc::now(),
    })
}

/// Orchestrates lookups against a fixed store and target list
///
/// Owns the reference store, the targets, the default result count and the
/// bounded history. History appends are serialized by a mutex so a single
/// `Locator` can be shared across request handlers.
#[derive(Debug)]
pub struct Locator {
    store: ReferenceStore,
    targets: Vec<Target>,
    default_limit: usize,
    history: Mutex<HistoryLog>,
}

impl Locator {
    pub fn new(store: ReferenceStore, targets: Vec<Target>, default_limit: usize, history_capacity: usize) -> Self {
        Self {
            store,
            targets,
            default_limit: default_limit.max(1),
            history: Mutex::new(HistoryLog::with_capacity(history_capacity)),
        }
    }

    /// Look up `query` with the default result count
    pub fn lookup(&self, query: &str) -> Result<LookupResult, LookupError> {
        self.lookup_with_limit(query, self.default_limit)
    }

    /// Look up `query`, record the result in history and return it
    ///
    /// Failed lookups leave the history untouched.
    pub fn lookup_with_limit(&self, query: &str, k: usize) -> Result<LookupResult, LookupError> {
        let result = lookup(&self.store, query, &self.targets, k)?;

        if let Some(nearest) = result.nearest() {
            tracing::debug!(
                "Zip {} nearest: {} ({:.1} mi)",
                result.query_zip,
                nearest.target.name,
                nearest.distance_miles
            );
        }

        self.history().push(result.clone());
        Ok(result)
    }

    /// Most-recent-first copy of the history
    pub fn recent(&self) -> Vec<LookupResult> {
        self.history().snapshot()
    }

    pub fn clear_history(&self) {
        self.history().clear();
    }

    pub fn history_capacity(&self) -> usize {
        self.history().capacity()
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    fn history(&self) -> MutexGuard<'_, HistoryLog> {
        // A panic mid-push cannot leave the deque in a broken state
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
