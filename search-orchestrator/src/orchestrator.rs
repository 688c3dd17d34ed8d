//! Request processing: extraction, then the relaxation sequence.
//!
//! ```text
//! extract ──clarification──▶ no_search
//!    │criteria
//!    ▼
//! exact ──hit──▶ success
//!    │miss, max price given
//!    ▼
//! max × 1.2 ──hit──▶ price_increased
//!    │miss, purpose is sale
//!    ▼
//! rent, max × 1.2, no floor-area bound ──hit──▶ rent_option
//!    │miss
//!    ▼
//! not_found
//! ```

use std::sync::Arc;

use criteria_extractor::{CriteriaExtractor, Extraction};
use property_store::{FilterCriteria, PropertyStore, Purpose};
use tracing::{info, instrument};

use crate::error::SearchError;
use crate::grouping::group_by_building;
use crate::notifier::Notifier;
use crate::outcome::{SearchOutcome, SearchStatus};
use crate::relaxation::{format_price, relaxed_max_price};

pub const MSG_RAISING_PRICE: &str =
    "No properties match the original criteria, raising the max price by 20%";
pub const MSG_STILL_NOTHING: &str = "Still nothing, even with the raised price";
pub const MSG_CHECKING_RENT: &str = "Checking rental options instead";
pub const MSG_NOT_FOUND: &str = "No suitable properties found";

fn show<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One-line summary of the fields that decide whether a search runs.
pub fn describe_criteria(criteria: &FilterCriteria) -> String {
    format!(
        "Searching with parameters: purpose={}, beds={}, type={}, price_min={}, price_max={}",
        criteria.purpose.map(|p| p.store_value()).unwrap_or("-"),
        show(&criteria.bedroom_count),
        criteria.property_type.as_deref().unwrap_or("-"),
        criteria.min_price.map(format_price).unwrap_or_else(|| "-".to_string()),
        criteria.max_price.map(format_price).unwrap_or_else(|| "-".to_string()),
    )
}

/// Drives one housing request through extraction and up to three store searches.
#[derive(Clone)]
pub struct SearchOrchestrator {
    store: Arc<dyn PropertyStore>,
    extractor: Arc<dyn CriteriaExtractor>,
    debug_mode: bool,
}

impl SearchOrchestrator {
    pub fn new(store: Arc<dyn PropertyStore>, extractor: Arc<dyn CriteriaExtractor>) -> Self {
        Self {
            store,
            extractor,
            debug_mode: false,
        }
    }

    /// In debug mode the extracted parameters are announced before searching.
    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn store(&self) -> &Arc<dyn PropertyStore> {
        &self.store
    }

    /// Processes free text: fetches the current area and building names, asks the extractor
    /// for criteria and, if it returns some, runs [`Self::search_with_relaxation`].
    #[instrument(skip(self, text, notifier))]
    pub async fn process_query(
        &self,
        text: &str,
        notifier: &dyn Notifier,
    ) -> Result<SearchOutcome, SearchError> {
        info!(query = %text, "Processing housing request");

        let areas = self.store.available_areas().await;
        let buildings = self.store.available_buildings().await;

        match self.extractor.extract(text, &areas, &buildings).await? {
            Extraction::Clarification(reply) => {
                info!(reply = %reply, "No search requested");
                Ok(SearchOutcome::no_search(reply))
            }
            Extraction::Criteria(criteria) => {
                info!("{}", describe_criteria(&criteria));
                if self.debug_mode {
                    notifier.notify(&describe_criteria(&criteria)).await;
                }
                Ok(self.search_with_relaxation(&criteria, notifier).await)
            }
        }
    }

    /// Exact search, then max price × 1.2 (only with a max price), then rentals (only for a
    /// sale request). Each fallback is announced through `notifier` before it runs.
    #[instrument(skip(self, criteria, notifier))]
    pub async fn search_with_relaxation(
        &self,
        criteria: &FilterCriteria,
        notifier: &dyn Notifier,
    ) -> SearchOutcome {
        let exact = self.store.search(criteria).await;
        if !exact.is_empty() {
            info!(count = exact.len(), "Found properties with the original criteria");
            return SearchOutcome {
                status: SearchStatus::Success,
                message: format!("Found {} properties matching your request", exact.len()),
                results: group_by_building(exact),
                criteria: Some(criteria.clone()),
            };
        }

        let relaxed_max = relaxed_max_price(criteria.max_price);

        if let Some(max_price) = relaxed_max {
            notifier.notify(MSG_RAISING_PRICE).await;
            info!(max_price, "Searching with raised max price");

            let relaxed = criteria.clone().with_max_price(relaxed_max);
            let found = self.store.search(&relaxed).await;
            if !found.is_empty() {
                info!(count = found.len(), "Found properties with the raised max price");
                return SearchOutcome {
                    status: SearchStatus::PriceIncreased,
                    message: format!(
                        "Found {} properties with the max price raised to {}",
                        found.len(),
                        format_price(max_price)
                    ),
                    results: group_by_building(found),
                    criteria: Some(relaxed),
                };
            }
            notifier.notify(MSG_STILL_NOTHING).await;
        }

        if criteria.is_sale() {
            notifier.notify(MSG_CHECKING_RENT).await;
            info!("Searching rentals instead of sales");

            let rental = FilterCriteria {
                sqft_min: None,
                sqft_max: None,
                ..criteria.clone().with_purpose(Purpose::Rent).with_max_price(relaxed_max)
            };
            let found = self.store.search(&rental).await;
            if !found.is_empty() {
                info!(count = found.len(), "Found rental options");
                return SearchOutcome {
                    status: SearchStatus::RentOption,
                    message: format!(
                        "No properties for sale, but found {} rental options",
                        found.len()
                    ),
                    results: group_by_building(found),
                    criteria: Some(rental),
                };
            }
        }

        info!("No properties found");
        SearchOutcome {
            status: SearchStatus::NotFound,
            message: MSG_NOT_FOUND.to_string(),
            results: Default::default(),
            criteria: Some(criteria.clone()),
        }
    }
}
