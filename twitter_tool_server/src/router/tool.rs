use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use twitter_tool::{Status, User, UserPage, UserTarget};

use crate::{
    error::{Result, RouteError},
    payload::PagingQuery,
    state::AppState,
};

pub fn tool_router() -> Router<AppState> {
    Router::new()
        .route("/timeline/:target", get(get_user_timeline))
        .route("/user/:target", get(show_user))
        .route("/followers/:target", get(get_followers_list))
        .route("/list/:owner/:slug/members", get(get_user_list_members))
        .route("/list/:owner/:slug/statuses", get(get_user_list_statuses))
}

async fn get_user_timeline(
    State(app_state): State<AppState>,
    Path(target): Path<String>,
    Query(paging): Query<PagingQuery>,
) -> Result<Json<Vec<Status>>> {
    let tool = app_state.tool()?;
    let target = UserTarget::parse(&target);
    let statuses = tool
        .user_timeline(&target, paging.page, paging.count)
        .await
        .ok_or(RouteError::NotFound(format!("Timeline of {}", target)))?;
    Ok(Json(statuses))
}

async fn show_user(State(app_state): State<AppState>, Path(target): Path<String>) -> Result<Json<User>> {
    let tool = app_state.tool()?;
    let target = UserTarget::parse(&target);
    let user = tool
        .show_user(&target)
        .await
        .ok_or(RouteError::NotFound(format!("User {}", target)))?;
    Ok(Json(user))
}

async fn get_followers_list(State(app_state): State<AppState>, Path(target): Path<String>) -> Result<Json<UserPage>> {
    let tool = app_state.tool()?;
    let target = UserTarget::parse(&target);
    let followers = tool
        .followers_list(&target)
        .await
        .ok_or(RouteError::NotFound(format!("Followers of {}", target)))?;
    Ok(Json(followers))
}

async fn get_user_list_members(
    State(app_state): State<AppState>,
    Path((owner, slug)): Path<(String, String)>,
) -> Result<Json<UserPage>> {
    let tool = app_state.tool()?;
    let owner = UserTarget::parse(&owner);
    let members = tool
        .user_list_members(&owner, &slug)
        .await
        .ok_or(RouteError::NotFound(format!("Members of list {}/{}", owner, slug)))?;
    Ok(Json(members))
}

async fn get_user_list_statuses(
    State(app_state): State<AppState>,
    Path((owner, slug)): Path<(String, String)>,
    Query(paging): Query<PagingQuery>,
) -> Result<Json<Vec<Status>>> {
    let tool = app_state.tool()?;
    let owner = UserTarget::parse(&owner);
    let statuses = tool
        .user_list_statuses(&owner, &slug, paging.page, paging.count)
        .await
        .ok_or(RouteError::NotFound(format!("Statuses of list {}/{}", owner, slug)))?;
    Ok(Json(statuses))
}
