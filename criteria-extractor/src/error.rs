use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("LLM request failed: {0}")]
    Api(String),

    #[error("malformed search arguments: {0}")]
    MalformedArguments(String),

    #[error("model called unknown function: {0}")]
    UnexpectedFunction(String),
}
