use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::llm_client::OpenAiClient;
use crate::error::UpstreamError;

pub const IMAGE_MODEL: &str = "dall-e-3";
pub const IMAGE_SIZE: &str = "1024x1024";

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates one illustration and returns its hosted URL.
    async fn generate(&self, prompt: String) -> Result<String, UpstreamError>;
}

#[derive(Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Deserialize)]
struct ImageGenerationResponse {
    data: Vec<GeneratedImage>,
}

#[derive(Deserialize)]
struct GeneratedImage {
    #[serde(default)]
    url: Option<String>,
}

#[async_trait]
impl ImageGenerator for OpenAiClient {
    async fn generate(&self, prompt: String) -> Result<String, UpstreamError> {
        debug!(model = IMAGE_MODEL, size = IMAGE_SIZE, "calling image model");

        let req = ImageGenerationRequest {
            model: IMAGE_MODEL,
            prompt: &prompt,
            n: 1,
            size: IMAGE_SIZE,
        };

        let resp: ImageGenerationResponse = self
            .post_json("illustration", "images/generations", &req)
            .await?;

        first_image_url(resp)
    }
}

fn first_image_url(resp: ImageGenerationResponse) -> Result<String, UpstreamError> {
    resp.data
        .into_iter()
        .next()
        .and_then(|image| image.url)
        .filter(|url| !url.trim().is_empty())
        .ok_or(UpstreamError::Empty {
            operation: "illustration",
            what: "image url",
        })
}
