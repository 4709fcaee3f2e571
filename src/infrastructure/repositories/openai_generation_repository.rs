use super::generation_repository::GenerationRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// OpenAI chat-completion implementation of the generation repository
pub struct OpenAiGenerationRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiGenerationRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    /// Build an OpenAI client that fails on the first error.
    ///
    /// async-openai retries 429/5xx responses with exponential backoff by default;
    /// a zero elapsed-time budget turns that off.
    pub fn build_client(api_key: &str, api_base: Option<&str>) -> Client<OpenAIConfig> {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(api_base) = api_base {
            config = config.with_api_base(api_base);
        }

        let no_retry = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Client::with_config(config).with_backoff(no_retry)
    }
}

#[async_trait]
impl GenerationRepository for OpenAiGenerationRepository {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            prompt_length = prompt.len(),
            prompt_preview = %prompt.chars().take(200).collect::<String>(),
            "Calling OpenAI chat completion API"
        );

        let message: ChatCompletionRequestMessage =
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| format!("Invalid chat message: {}", e))?
                .into();

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(vec![message])
            .build()
            .map_err(|e| format!("Invalid chat completion request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                "OpenAI chat completion call failed"
            );
            format!("OpenAI error: {}", e)
        })?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| "OpenAI returned no completion text".to_string())?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = duration.as_millis(),
            text_length = text.len(),
            "Text generation completed"
        );

        Ok(text)
    }
}
