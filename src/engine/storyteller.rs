use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::engine::choice_parser::parse_choices;
use crate::engine::image_client::ImageGenerator;
use crate::engine::llm_client::{TextGenerator, TextRequest};
use crate::engine::prompt_builder::{PromptBuilder, CHOICES_SYSTEM_PROMPT, STORY_SYSTEM_PROMPT};
use crate::error::StoryError;
use crate::model::story::{ChoiceSet, StoryTurn};

pub const OPENING_MAX_TOKENS: u32 = 2000;
pub const CONTINUATION_MAX_TOKENS: u32 = 1000;
pub const CHOICES_MAX_TOKENS: u32 = 200;

/// Runs one story turn: text, then (first turn only) the illustration, then
/// the next choices. Steps run in order and the first failure stops the turn.
#[derive(Clone)]
pub struct Storyteller {
    text: Arc<dyn TextGenerator>,
    images: Arc<dyn ImageGenerator>,
}

impl Storyteller {
    pub fn new(text: Arc<dyn TextGenerator>, images: Arc<dyn ImageGenerator>) -> Self {
        Self { text, images }
    }

    pub async fn begin(&self, theme: &str) -> Result<StoryTurn, StoryError> {
        let story = self
            .text
            .complete(TextRequest {
                operation: "story_opening",
                system: STORY_SYSTEM_PROMPT,
                prompt: PromptBuilder::story_opening(theme),
                max_tokens: OPENING_MAX_TOKENS,
            })
            .await
            .inspect_err(|e| warn!(step = "story_opening", error = %e, "generation step failed"))?;

        let image_url = self
            .images
            .generate(PromptBuilder::illustration(theme))
            .await
            .inspect_err(|e| warn!(step = "illustration", error = %e, "generation step failed"))?;

        let choices = self.propose_choices(&story).await?;

        info!(story_chars = story.len(), "story opened");
        Ok(StoryTurn {
            story,
            image_url,
            choices,
        })
    }

    /// The illustration is never regenerated; `current_image_url` is passed
    /// through untouched.
    pub async fn continue_story(
        &self,
        story_so_far: &str,
        choice: &str,
        current_image_url: String,
    ) -> Result<StoryTurn, StoryError> {
        let story = self
            .text
            .complete(TextRequest {
                operation: "continuation",
                system: STORY_SYSTEM_PROMPT,
                prompt: PromptBuilder::continuation(story_so_far, choice),
                max_tokens: CONTINUATION_MAX_TOKENS,
            })
            .await
            .inspect_err(|e| warn!(step = "continuation", error = %e, "generation step failed"))?;

        let choices = self.propose_choices(&story).await?;

        info!(story_chars = story.len(), "story continued");
        Ok(StoryTurn {
            story,
            image_url: current_image_url,
            choices,
        })
    }

    async fn propose_choices(&self, story: &str) -> Result<ChoiceSet, StoryError> {
        let raw = self
            .text
            .complete(TextRequest {
                operation: "choices",
                system: CHOICES_SYSTEM_PROMPT,
                prompt: PromptBuilder::choices(story),
                max_tokens: CHOICES_MAX_TOKENS,
            })
            .await
            .inspect_err(|e| warn!(step = "choices", error = %e, "generation step failed"))?;

        let choices = parse_choices(&raw)
            .inspect_err(|e| warn!(step = "choices", error = %e, "unparseable choices"))?;

        debug!(unfavorable = choices.unfavorable(), "choices proposed");
        Ok(choices)
    }
}
