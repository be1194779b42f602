mod error;
mod payload;
mod router;
mod state;

use axum::Router;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use std::env;
use std::net::SocketAddr;

use twitter_tool::{MissCache, TwitterTool, TwitterToolConfig};

use crate::state::AppState;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Initialize logger
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env()?
        .add_directive("hyper::proto=info".parse()?)
        .add_directive("hyper::client=info".parse()?)
        .add_directive("reqwest=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    // 2. Read configuration and initialize the miss cache
    let config = TwitterToolConfig::from_env();
    let miss_cache = match &config {
        Ok(config) => MissCache::in_memory(config.miss_cache_capacity, config.miss_cache_ttl),
        Err(_) => MissCache::default(),
    };

    // 3. Initialize the tool; template routes degrade to 503 when this fails
    let twitter_tool = config.and_then(|config| {
        TwitterTool::builder()
            .config(config.client)
            .miss_cache(miss_cache.clone())
            .build()
    });
    let twitter_tool = match twitter_tool {
        Ok(tool) => Some(tool),
        Err(e) => {
            tracing::error!("Unable to start the Twitter tool: {}", e);
            None
        }
    };

    // 4. Setup state and router
    let app_state = AppState {
        twitter_tool,
        miss_cache,
    };
    let app = Router::new()
        .merge(router::tool::tool_router())
        .merge(router::cache::cache_router())
        .layer(TraceLayer::new_for_http().on_request(()))
        .with_state(app_state);

    // 5. Start server
    let addr: SocketAddr = env::var("SERVER_ADDRESS")
        .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
        .parse()?;
    tracing::info!("Server starting at {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
