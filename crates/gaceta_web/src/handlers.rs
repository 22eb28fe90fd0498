use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gaceta_core::{ArticleDraft, Error};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

fn error_response(err: Error) -> Response {
    let status = match &err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::RemoteArticle(_) => StatusCode::FORBIDDEN,
        Error::Http(_) | Error::Fetch(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Response {
    let store = state.store.read().await;
    match store.articles().await {
        Ok(articles) => Json(articles).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    let store = state.store.read().await;
    match store.find_by_slug(&slug).await {
        Ok(article) => Json(article).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_article(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ArticleDraft>,
) -> Response {
    let mut store = state.store.write().await;
    match store.add(draft).await {
        Ok(article) => (StatusCode::CREATED, Json(article)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let mut store = state.store.write().await;
    match store.remove(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
pub struct RefreshParams {
    #[serde(default)]
    pub force: bool,
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RefreshParams>,
) -> Response {
    let mut store = state.store.write().await;
    match store.refresh(params.force).await {
        Ok(articles) => Json(articles).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn status(State(state): State<Arc<AppState>>) -> Response {
    let store = state.store.read().await;
    Json(store.state().clone()).into_response()
}
