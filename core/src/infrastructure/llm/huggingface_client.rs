use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recommendation::{ports::TextGenerationClient, value_objects::GenerationParameters},
};

/// Client for the Hugging Face text-generation inference endpoint.
#[derive(Clone)]
pub struct HuggingFaceLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for HuggingFaceLLMClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceLLMClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct TextGenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// The endpoint answers with a list for single inputs, some deployments with
/// a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextGenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

impl TextGenerationResponse {
    fn into_text(self) -> Option<String> {
        match self {
            TextGenerationResponse::Batch(items) => {
                items.into_iter().next().map(|item| item.generated_text)
            }
            TextGenerationResponse::Single(item) => Some(item.generated_text),
        }
    }
}

impl HuggingFaceLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.api_key,
            model_name: config.model,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model_name)
    }
}

impl TextGenerationClient for HuggingFaceLLMClient {
    async fn generate(
        &self,
        prompt: String,
        parameters: GenerationParameters,
    ) -> Result<String, CoreError> {
        let request = TextGenerationRequest {
            inputs: &prompt,
            parameters,
        };

        let mut builder = self.client.post(self.endpoint()).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Hugging Face request failed: {}", e);
            CoreError::GenerationFailed(format!("request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Hugging Face API error: {} - {}", status, error_text);
            return Err(CoreError::GenerationFailed(format!(
                "upstream returned {}",
                status
            )));
        }

        let body: TextGenerationResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Hugging Face response: {}", e);
            CoreError::GenerationFailed(format!("unreadable response: {}", e))
        })?;

        body.into_text()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| CoreError::GenerationFailed("empty generation".to_string()))
    }
}
