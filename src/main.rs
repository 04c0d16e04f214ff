// src/main.rs

use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use triviador::config::Config;
use triviador::generator;
use triviador::routes;
use triviador::seed::sample_questions;
use triviador::state::AppState;
use triviador::store::QuestionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Build the question store
    let store = if config.seed_sample_questions {
        QuestionStore::with_questions(sample_questions())?
    } else {
        QuestionStore::new()
    };
    tracing::info!("Question store ready with {} questions", store.len());
    let store = store.into_shared();

    if config.generator_enabled {
        tracing::info!(
            "Random question generator running every {}s",
            config.generator_interval_secs
        );
        generator::spawn_generator(store.clone(), config.generator_interval());
    }

    let addr = config.bind_addr()?;

    // Create AppState
    let state = AppState {
        store,
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
