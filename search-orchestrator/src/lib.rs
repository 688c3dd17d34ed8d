//! # Search orchestrator
//!
//! Runs one housing request end to end: criteria extraction, then up to three searches
//! (exact, max price raised by 20%, rental instead of sale), then grouping by building.
//!
//! ## Modules
//!
//! - [`grouping`] – GroupedResults, group_by_building
//! - [`notifier`] – Notifier (progress messages between relaxation steps)
//! - [`orchestrator`] – SearchOrchestrator
//! - [`outcome`] – SearchStatus, SearchOutcome
//! - [`relaxation`] – price relaxation factor and price formatting

mod error;
pub mod grouping;
pub mod notifier;
pub mod orchestrator;
pub mod outcome;
pub mod relaxation;

pub use error::SearchError;
pub use grouping::{group_by_building, BuildingGroup, GroupedResults, UNKNOWN_BUILDING};
pub use notifier::Notifier;
pub use orchestrator::SearchOrchestrator;
pub use outcome::{SearchOutcome, SearchStatus};
pub use relaxation::{format_price, relaxed_max_price, PRICE_RELAXATION_FACTOR};
