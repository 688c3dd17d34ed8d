use criteria_extractor::ExtractorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("criteria extraction failed: {0}")]
    Extraction(#[from] ExtractorError),
}
