use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use story_forge::config::Config;
use story_forge::engine::llm_client::OpenAiClient;
use story_forge::engine::storyteller::Storyteller;
use story_forge::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        model = %config.gpt_model,
        base_url = %config.openai_base_url,
        "starting story server"
    );

    let client = Arc::new(OpenAiClient::new(&config).context("failed to build HTTP client")?);
    let storyteller = Storyteller::new(client.clone(), client);

    server::serve(&config, AppState::new(storyteller)).await
}
