#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;

use story_forge::engine::image_client::ImageGenerator;
use story_forge::engine::llm_client::{TextGenerator, TextRequest};
use story_forge::engine::prompt_builder::CHOICES_SYSTEM_PROMPT;
use story_forge::engine::storyteller::Storyteller;
use story_forge::error::UpstreamError;
use story_forge::server::{router, AppState};

pub const STORY: &str = "Le vent souffle sur la lande.";
pub const CHOICES: &str = "1. Suivre le sentier\n2. Frapper à la porte\n3. Boire l'eau du marais";
pub const IMAGE_URL: &str = "https://img.example/lande.png";

/// Text model stand-in that answers story and choices prompts from fixed text.
pub struct FakeText {
    pub story: Result<String, u16>,
    pub choices: String,
    pub story_calls: AtomicUsize,
    pub choice_calls: AtomicUsize,
}

impl Default for FakeText {
    fn default() -> Self {
        Self {
            story: Ok(STORY.into()),
            choices: CHOICES.into(),
            story_calls: AtomicUsize::new(0),
            choice_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TextGenerator for FakeText {
    async fn complete(&self, request: TextRequest) -> Result<String, UpstreamError> {
        if request.system == CHOICES_SYSTEM_PROMPT {
            self.choice_calls.fetch_add(1, Ordering::SeqCst);
            return Ok(self.choices.clone());
        }

        self.story_calls.fetch_add(1, Ordering::SeqCst);
        self.story.clone().map_err(|status| UpstreamError::Status {
            operation: request.operation,
            status,
            body: "upstream unavailable".into(),
        })
    }
}

/// Image model stand-in; with `fail` set every call reports an empty result.
#[derive(Default)]
pub struct FakeImages {
    pub fail: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl ImageGenerator for FakeImages {
    async fn generate(&self, _prompt: String) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(UpstreamError::Empty {
                operation: "illustration",
                what: "image url",
            });
        }
        Ok(IMAGE_URL.into())
    }
}

pub fn app(text: Arc<FakeText>, images: Arc<FakeImages>) -> Router {
    router(AppState::new(Storyteller::new(text, images)))
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
