//! OpenAI implementation of [`CriteriaExtractor`].

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs, OpenAIClient,
};
use tracing::{info, instrument, warn};

use crate::config::{EnvLlmConfig, DEFAULT_MODEL};
use crate::error::ExtractorError;
use crate::prompt::build_prompt;
use crate::schema::{search_function, SearchArguments, SEARCH_FUNCTION_NAME};
use crate::{CriteriaExtractor, Extraction};

/// Extractor backed by one chat completion with `database_search` attached. No retries.
#[derive(Clone)]
pub struct OpenAiCriteriaExtractor {
    client: OpenAIClient,
    model: String,
}

impl OpenAiCriteriaExtractor {
    pub fn new(api_key: String) -> Self {
        Self {
            client: OpenAIClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: OpenAIClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn from_config(config: &EnvLlmConfig) -> Self {
        Self::with_base_url(config.openai_api_key.clone(), config.openai_base_url.clone())
            .with_model(config.llm_model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CriteriaExtractor for OpenAiCriteriaExtractor {
    #[instrument(skip(self, text, areas, buildings), fields(model = %self.model))]
    async fn extract(
        &self,
        text: &str,
        areas: &[String],
        buildings: &[String],
    ) -> Result<Extraction, ExtractorError> {
        let prompt = build_prompt(text, areas, buildings);
        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| ExtractorError::Api(e.to_string()))?
            .into();

        let completion = self
            .client
            .chat_completion_with_functions(&self.model, vec![message], &[search_function()])
            .await
            .map_err(|e| ExtractorError::Api(format!("{:#}", e)))?;

        if let Some(ref content) = completion.content {
            info!(reply = %content, "Model replied with text");
        }

        let Some(call) = completion.function_calls.into_iter().next() else {
            return Ok(Extraction::Clarification(
                completion.content.unwrap_or_default(),
            ));
        };

        if call.name != SEARCH_FUNCTION_NAME {
            warn!(function = %call.name, "Model called an unknown function");
            return Err(ExtractorError::UnexpectedFunction(call.name));
        }

        let arguments = SearchArguments::from_json(&call.arguments).map_err(|e| {
            warn!(arguments = %call.arguments, error = %e, "Unparseable search arguments");
            ExtractorError::MalformedArguments(e.to_string())
        })?;

        info!(arguments = %call.arguments, "Model requested a search");
        Ok(Extraction::Criteria(arguments.into_criteria()))
    }
}
