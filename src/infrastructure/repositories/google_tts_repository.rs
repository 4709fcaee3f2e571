use super::tts_repository::TtsRepository;
use crate::domain::catalog::VoiceConfig;
use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Google Cloud Text-to-Speech implementation of TTS repository
pub struct GoogleTtsRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: &'a VoiceConfig,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f32,
    pitch: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            audio_encoding: "MP3",
            speaking_rate: 1.0,
            pitch: 0.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: Option<String>,
}

impl GoogleTtsRepository {
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/text:synthesize", self.base_url)
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, voice: &VoiceConfig) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice = voice.name,
            language_code = voice.language_code,
            text_length = text.len(),
            "Calling Google Text-to-Speech"
        );

        let payload = SynthesizeRequest {
            input: SynthesisInput { text },
            voice,
            audio_config: AudioConfig::default(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Google TTS request failed");
                format!("Google TTS request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %error_text,
                voice = voice.name,
                "Google TTS API returned an error"
            );
            return Err(format!("Google TTS error ({}): {}", status, error_text));
        }

        let body: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Google TTS response: {}", e))?;

        let audio_content = body
            .audio_content
            .ok_or_else(|| "Google TTS response has no audioContent".to_string())?;

        let audio_bytes = base64::engine::general_purpose::STANDARD
            .decode(audio_content.as_bytes())
            .map_err(|e| format!("Invalid base64 audio from Google TTS: {}", e))?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "google",
            voice = voice.name,
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }
}
