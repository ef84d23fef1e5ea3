mod api;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use stocklens_gemini::GeminiClient;
use stocklens_news::NewsClient;
use stocklens_reddit::{FetchConfig, RedditClient};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = stocklens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // One authenticated client per upstream, constructed once and shared
    // across requests.
    let reddit = RedditClient::new(
        &config.reddit_client_id,
        &config.reddit_client_secret,
        &config.user_agent,
        config.request_timeout_secs,
    )
    .await?;
    let news = NewsClient::new(
        &config.news_api_key,
        &config.user_agent,
        config.request_timeout_secs,
    )?;
    let gemini = GeminiClient::new(
        &config.gemini_api_key,
        &config.user_agent,
        config.request_timeout_secs,
    )?;

    let state = AppState {
        reddit: Arc::new(reddit),
        news: Arc::new(news),
        gemini: Arc::new(gemini),
        fetch_config: Arc::new(FetchConfig::default()),
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "stocklens listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
