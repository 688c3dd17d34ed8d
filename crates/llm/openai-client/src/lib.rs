//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for chat completion with callable functions.
//! Provides token masking for safe logging.

use async_openai::types::{
    ChatCompletionTool, ChatCompletionToolArgs, ChatCompletionToolType,
    CreateChatCompletionRequestArgs, FunctionObjectArgs,
};
use async_openai::Client;
use std::sync::Arc;

pub use async_openai::types::{ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If it has 11 chars or fewer, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = token.chars().take(7).collect();
        let tail: String = token.chars().skip(len - 4).collect();
        format!("{}***{}", head, tail)
    }
}

/// A callable function offered to the model: name, description and JSON-schema parameters.
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
    /// Ask the API to enforce the schema exactly.
    pub strict: bool,
}

impl FunctionSpec {
    fn to_tool(&self) -> anyhow::Result<ChatCompletionTool> {
        let function = FunctionObjectArgs::default()
            .name(self.name.clone())
            .description(self.description.clone())
            .parameters(self.parameters.clone())
            .strict(self.strict)
            .build()?;
        Ok(ChatCompletionToolArgs::default()
            .r#type(ChatCompletionToolType::Function)
            .function(function)
            .build()?)
    }
}

/// A function call requested by the model. `arguments` is the raw JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// First choice of a completion that offered functions: free text, function calls, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCompletion {
    pub content: Option<String>,
    pub function_calls: Vec<FunctionCall>,
}

/// OpenAI chat client. Wraps async-openai client; holds the API key for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    /// API key stored only for logging (masked).
    api_key_for_logging: String,
}

impl OpenAIClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging,
        }
    }

    /// Builds a client with a custom base URL (e.g. for proxies, compatible endpoints or test servers).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging,
        }
    }

    fn masked_key(&self) -> String {
        mask_token(&self.api_key_for_logging)
    }

    /// Sends a chat completion request offering `functions` to the model.
    ///
    /// Logs masked API key, request JSON and token usage. Errors if the response has no choices.
    pub async fn chat_completion_with_functions(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        functions: &[FunctionSpec],
    ) -> anyhow::Result<ToolCompletion> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            function_count = functions.len(),
            api_key = %self.masked_key(),
            "OpenAI chat_completion request"
        );

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder.model(model).messages(messages);
        if !functions.is_empty() {
            let tools = functions
                .iter()
                .map(FunctionSpec::to_tool)
                .collect::<anyhow::Result<Vec<_>>>()?;
            builder.tools(tools);
        }
        let request = builder.build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        let Some(choice) = response.choices.into_iter().next() else {
            anyhow::bail!("No response from OpenAI");
        };

        let function_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| FunctionCall {
                name: call.function.name,
                arguments: call.function.arguments,
            })
            .collect();

        Ok(ToolCompletion {
            content: choice.message.content,
            function_calls,
        })
    }
}
