use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};

use crate::{error::Result, state::AppState};

pub fn cache_router() -> Router<AppState> {
    Router::new()
        .route("/miss-cache", delete(remove_all_misses))
        .route("/miss-cache/:key", get(get_miss).put(put_miss).delete(remove_miss))
}

async fn get_miss(State(app_state): State<AppState>, Path(key): Path<String>) -> Json<bool> {
    Json(app_state.miss_cache.get(&key))
}

async fn put_miss(State(app_state): State<AppState>, Path(key): Path<String>) -> Result<StatusCode> {
    app_state.miss_cache.put(&key, true)?;
    tracing::info!("Added {} to the miss cache", key);
    Ok(StatusCode::NO_CONTENT)
}

async fn remove_miss(State(app_state): State<AppState>, Path(key): Path<String>) -> Result<StatusCode> {
    app_state.miss_cache.remove(&key)?;
    tracing::info!("Removed {} from the miss cache", key);
    Ok(StatusCode::NO_CONTENT)
}

async fn remove_all_misses(State(app_state): State<AppState>) -> Result<StatusCode> {
    app_state.miss_cache.remove_all()?;
    Ok(StatusCode::NO_CONTENT)
}
