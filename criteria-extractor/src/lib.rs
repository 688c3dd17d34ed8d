//! # Criteria extractor
//!
//! Sends the user's request to an OpenAI-compatible model together with one callable
//! function, `database_search`, and turns the call into [`FilterCriteria`]. When the model
//! answers in text instead (usually asking for a missing price, type or bedroom count),
//! the reply is passed back unchanged as [`Extraction::Clarification`].
//!
//! ## Modules
//!
//! - [`config`] – EnvLlmConfig (API key, base URL, model)
//! - [`prompt`] – instruction text sent with every request
//! - [`schema`] – `database_search` parameter schema and its argument payload
//! - [`openai_extractor`] – OpenAiCriteriaExtractor

pub mod config;
mod error;
mod openai_extractor;
pub mod prompt;
pub mod schema;

use async_trait::async_trait;
use property_store::FilterCriteria;

pub use config::EnvLlmConfig;
pub use error::ExtractorError;
pub use openai_extractor::OpenAiCriteriaExtractor;
pub use schema::{SearchArguments, SEARCH_FUNCTION_NAME};

/// What the model made of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// No function call; the model's text, usually a follow-up question.
    Clarification(String),
    /// The model called `database_search`.
    Criteria(FilterCriteria),
}

/// Extracts search criteria from free text. `areas` and `buildings` are the names the
/// store currently knows, offered to the model so it can match them.
#[async_trait]
pub trait CriteriaExtractor: Send + Sync {
    async fn extract(
        &self,
        text: &str,
        areas: &[String],
        buildings: &[String],
    ) -> Result<Extraction, ExtractorError>;
}
