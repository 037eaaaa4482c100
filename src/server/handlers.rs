use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, warn};

use super::error::ApiError;
use super::AppState;
use crate::engine::protocol::{GenerateRequest, MakeChoiceRequest, StoryResponse};

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<StoryResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| reject("/generate", rejection))?;

    match state.storyteller.begin(&req.theme).await {
        Ok(turn) => Ok(Json(turn.into())),
        Err(e) => {
            error!(endpoint = "/generate", error = %e, "request failed");
            Err(e.into())
        }
    }
}

pub async fn make_choice(
    State(state): State<AppState>,
    payload: Result<Json<MakeChoiceRequest>, JsonRejection>,
) -> Result<Json<StoryResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| reject("/make_choice", rejection))?;

    match state
        .storyteller
        .continue_story(&req.story_so_far, &req.choice, req.current_image_url)
        .await
    {
        Ok(turn) => Ok(Json(turn.into())),
        Err(e) => {
            error!(endpoint = "/make_choice", error = %e, "request failed");
            Err(e.into())
        }
    }
}

fn reject(endpoint: &'static str, rejection: JsonRejection) -> ApiError {
    warn!(endpoint, error = %rejection.body_text(), "rejected request body");
    rejection.into()
}
