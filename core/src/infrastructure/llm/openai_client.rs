use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    label_analysis::{ports::LLMClient, value_objects::CompletionRequest},
};

/// Chat-completions client for OpenAI-compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAIChatClient {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    max_tokens: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl OpenAIChatClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::ConfigurationError(format!("invalid HTTP client settings: {}", e))
            })?;

        Ok(Self {
            api_key: config
                .api_key
                .as_ref()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            max_tokens: config.max_tokens,
            client,
        })
    }

    pub fn api_key_missing(&self) -> bool {
        self.api_key.is_none()
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        self.api_key.as_deref().ok_or_else(|| {
            CoreError::ConfigurationError("OpenAI API key is not configured".to_string())
        })
    }

    fn build_request(&self, request: CompletionRequest) -> ChatRequest {
        let user_content = match request.image {
            Some(image) => MessageContent::Parts(vec![
                ContentPart::Text {
                    text: request.instruction,
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_uri(),
                    },
                },
            ]),
            None => MessageContent::Text(request.instruction),
        };

        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(request.system),
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            max_tokens: self.max_tokens,
        }
    }

    async fn call_chat_api(&self, body: ChatRequest) -> Result<String, CoreError> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat completion request failed: {}", e);
                CoreError::UpstreamError(format!("OpenAI request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or(status.as_str())
                        .to_string()
                });

            tracing::error!("Chat completion returned {}: {}", status, message);
            return Err(CoreError::UpstreamError(message));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode chat completion envelope: {}", e);
            CoreError::UpstreamError(format!("Failed to decode OpenAI response: {}", e))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default();

        tracing::debug!(length = content.len(), "Received completion");
        Ok(content)
    }
}

impl LLMClient for OpenAIChatClient {
    fn ensure_configured(&self) -> Result<(), CoreError> {
        self.api_key().map(|_| ())
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let body = self.build_request(request);
        self.call_chat_api(body).await
    }
}
