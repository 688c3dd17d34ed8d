//! Read-side abstraction over the listing database.

use crate::models::{FilterCriteria, PropertyRecord};
use async_trait::async_trait;

/// Listing lookups used by the search flow.
///
/// Implementations never fail: store faults are logged and reported as empty results,
/// so "no matches" and "store unreachable" look the same to callers.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Units matching `criteria`, cheapest first. Empty when required criteria are missing.
    async fn search(&self, criteria: &FilterCriteria) -> Vec<PropertyRecord>;
    /// All area names, sorted.
    async fn available_areas(&self) -> Vec<String>;
    /// All building names, sorted.
    async fn available_buildings(&self) -> Vec<String>;
}
