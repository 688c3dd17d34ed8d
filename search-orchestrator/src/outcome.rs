use property_store::FilterCriteria;
use serde::Serialize;

use crate::grouping::GroupedResults;

/// How a request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The model asked for more information; no search ran.
    NoSearch,
    Success,
    /// Found only after raising the max price.
    PriceIncreased,
    /// Nothing for sale; rentals found instead.
    RentOption,
    NotFound,
}

impl SearchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStatus::NoSearch => "no_search",
            SearchStatus::Success => "success",
            SearchStatus::PriceIncreased => "price_increased",
            SearchStatus::RentOption => "rent_option",
            SearchStatus::NotFound => "not_found",
        }
    }

    /// True for statuses that carry results.
    pub fn has_results(&self) -> bool {
        matches!(
            self,
            SearchStatus::Success | SearchStatus::PriceIncreased | SearchStatus::RentOption
        )
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    /// User-facing summary; for `no_search` the model's reply verbatim.
    pub message: String,
    pub results: GroupedResults,
    /// Criteria of the search that produced `results` (the relaxed ones after a fallback).
    /// `None` for `no_search`.
    pub criteria: Option<FilterCriteria>,
}

impl SearchOutcome {
    pub fn no_search(message: impl Into<String>) -> Self {
        Self {
            status: SearchStatus::NoSearch,
            message: message.into(),
            results: GroupedResults::default(),
            criteria: None,
        }
    }
}
