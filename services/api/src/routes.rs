use crate::infra::AppState;
use application_docs::documents::ApplicationId;
use application_docs::error::AppError;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::path::{Component, Path as FsPath};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DocumentQuery {
    /// Directory under the configured template root to read templates from.
    #[serde(default)]
    pub(crate) base: Option<String>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(
            "/api/v1/applications/:application_id/document",
            get(document_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn document_endpoint(
    Extension(state): Extension<AppState>,
    Path(application_id): Path<String>,
    Query(query): Query<DocumentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = ApplicationId(application_id);
    let base = match query.base.as_deref() {
        Some(requested) => scoped_base(&state.default_base, requested)?,
        None => state.default_base.clone(),
    };
    let generator = state.generator.clone();
    let filename = format!("attachment; filename=\"application-{id}.pdf\"");

    let bytes = tokio::task::spawn_blocking(move || generator.generate(&id, &base))
        .await
        .map_err(std::io::Error::other)??;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime::APPLICATION_PDF.to_string()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        bytes,
    ))
}

/// Joins a caller-supplied relative directory onto the template root.
fn scoped_base(root: &str, requested: &str) -> Result<String, AppError> {
    let relative = !requested.contains("://")
        && FsPath::new(requested)
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    if !relative {
        return Err(AppError::InvalidRequest(format!(
            "base '{requested}' must be a relative directory under the template root"
        )));
    }

    Ok(format!(
        "{}/{}",
        root.trim_end_matches('/'),
        requested.trim_matches('/')
    ))
}
