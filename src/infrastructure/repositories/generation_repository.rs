use async_trait::async_trait;

/// Repository for text generation with a chat-completion model
#[async_trait]
pub trait GenerationRepository: Send + Sync {
    /// Send `prompt` as the only user message and return the first completion, trimmed
    async fn generate(&self, prompt: &str) -> Result<String, String>;
}
