use serde::{Deserialize, Serialize};

use crate::model::story::StoryTurn;

/// Body of `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub theme: String,
}

/// Body of `POST /make_choice`. The client holds the story state and resends
/// it every turn; the chosen option is sent verbatim, not as an index.
#[derive(Debug, Clone, Deserialize)]
pub struct MakeChoiceRequest {
    pub choice: String,
    pub story_so_far: String,
    pub current_image_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryResponse {
    pub story: String,
    pub image_url: String,
    pub choices: Vec<String>,
}

impl From<StoryTurn> for StoryResponse {
    fn from(turn: StoryTurn) -> Self {
        Self {
            story: turn.story,
            image_url: turn.image_url,
            choices: turn.choices.into_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
