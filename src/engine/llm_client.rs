use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::UpstreamError;
use crate::model::message::ChatMessage;

const ERROR_BODY_LIMIT: usize = 500;

/// A single chat-completion call: one system persona, one user prompt.
#[derive(Clone, Debug)]
pub struct TextRequest {
    pub operation: &'static str,
    pub system: &'static str,
    pub prompt: String,
    pub max_tokens: u32,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the first completion, trimmed. Blank output is an error.
    async fn complete(&self, request: TextRequest) -> Result<String, UpstreamError>;
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible API. Serves both text and image generation.
#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.upstream_timeout).build()?;

        Ok(Self {
            http,
            base_url: config.openai_base_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.gpt_model.clone(),
        })
    }

    pub(crate) async fn post_json<B, R>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<R, UpstreamError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport { operation, source })?;

        let status = resp.status();
        if !status.is_success() {
            let mut body = resp.text().await.unwrap_or_default();
            truncate_on_char_boundary(&mut body, ERROR_BODY_LIMIT);
            warn!(operation, status = status.as_u16(), "upstream rejected request");
            return Err(UpstreamError::Status {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<R>()
            .await
            .map_err(|source| UpstreamError::Decode { operation, source })
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn complete(&self, request: TextRequest) -> Result<String, UpstreamError> {
        let operation = request.operation;
        debug!(operation, model = %self.model, max_tokens = request.max_tokens, "calling chat model");

        let req = ChatCompletionRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            messages: vec![
                ChatMessage::system(request.system),
                ChatMessage::user(request.prompt),
            ],
        };

        let resp: ChatCompletionResponse = self
            .post_json(operation, "chat/completions", &req)
            .await?;

        first_completion(operation, resp)
    }
}

fn first_completion(
    operation: &'static str,
    resp: ChatCompletionResponse,
) -> Result<String, UpstreamError> {
    let Some(choice) = resp.choices.into_iter().next() else {
        return Err(UpstreamError::Empty {
            operation,
            what: "choices",
        });
    };

    let content = choice.message.content.unwrap_or_default();
    let content = content.trim();
    if content.is_empty() {
        return Err(UpstreamError::Empty {
            operation,
            what: "content",
        });
    }

    Ok(content.to_string())
}

fn truncate_on_char_boundary(text: &mut String, limit: usize) {
    if text.len() <= limit {
        return;
    }
    let mut cut = limit;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}
