//! CLI entrypoint for Artisan Story
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use artisan_application::{GenerateStoryError, GenerateStoryUseCase, PrimaryProvider};
use artisan_domain::GenerationRequest;
use artisan_infrastructure::{
    ConfigLoader, FileConfig, GeminiAdapter, HuggingFaceAdapter, InMemoryDocumentStore,
    OpenAiAdapter, TracingGenerationProgress,
};
use artisan_presentation::{AppState, Cli, Command, StoryReply, create_router, serve};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    info!("Starting Artisan Story");

    // === Dependency Injection ===
    let use_case = build_use_case(&config)?;
    let progress = Arc::new(TracingGenerationProgress::new());

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let listener = TcpListener::bind(&bind)
                .await
                .with_context(|| format!("Failed to bind {}", bind))?;

            let state = AppState::new(use_case, Arc::new(InMemoryDocumentStore::new()), progress);
            serve(listener, create_router(state), shutdown_signal()).await?;
            info!("Server stopped");
        }
        Command::Generate { prompt, model } => {
            let token = CancellationToken::new();
            let cancel = token.clone();
            tokio::spawn(async move {
                shutdown_signal().await;
                cancel.cancel();
            });

            let result = match GenerationRequest::parse(prompt.as_str(), &model) {
                Ok(request) => {
                    use_case
                        .execute_cancellable(request, progress.as_ref(), &token)
                        .await
                }
                Err(e) => Err(GenerateStoryError::from(e)),
            };

            let reply = StoryReply::from_result(&prompt, result);
            println!("{}", serde_json::to_string_pretty(&reply.body)?);
            if !reply.status.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Wire the primary and secondary adapters from configuration
fn build_use_case(config: &FileConfig) -> Result<GenerateStoryUseCase> {
    let providers = &config.providers;

    let gemini =
        GeminiAdapter::from_config(&providers.gemini).context("Failed to build Gemini client")?;
    let openai =
        OpenAiAdapter::from_config(&providers.openai).context("Failed to build OpenAI client")?;
    let huggingface = HuggingFaceAdapter::from_config(&providers.huggingface)
        .context("Failed to build Hugging Face client")?;

    if !gemini.is_configured() {
        warn!(
            env = %providers.gemini.api_key_env,
            "Gemini API key not configured; story generation will fail"
        );
    }

    Ok(GenerateStoryUseCase::new(Arc::new(gemini))
        .with_secondary(Arc::new(openai))
        .with_secondary(Arc::new(huggingface))
        .with_params(config.generation.to_params()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
