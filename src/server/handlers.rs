//! HTTP request handlers for the web server.

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

use super::templates;
use super::upload::read_image;
use super::AppState;

/// Upload page.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    Html(templates::upload_page(&state.model_name(), None))
}

/// Form submission: run the extraction and render results or an error.
pub async fn extract_page(State(state): State<AppState>, multipart: Multipart) -> Response {
    let model = state.model_name();
    let upload = match read_image(multipart).await {
        Ok(upload) => upload,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Html(templates::upload_page(&model, Some(&e.to_string()))),
            )
                .into_response();
        }
    };

    debug!("Received {} ({} bytes)", upload.filename, upload.bytes.len());
    match state.extractor.extract(&upload.bytes).await {
        Ok(result) => Html(templates::results_page(&model, &upload, &result)).into_response(),
        Err(e) => Html(templates::failure_page(&model, &upload, &e)).into_response(),
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn json_error(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// JSON extraction endpoint.
pub async fn api_extract(State(state): State<AppState>, multipart: Multipart) -> Response {
    let upload = match read_image(multipart).await {
        Ok(upload) => upload,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.extractor.extract(&upload.bytes).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => json_error(StatusCode::BAD_GATEWAY, e.to_string()),
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    model: String,
    model_available: bool,
}

/// Liveness plus reachability of the model server.
pub async fn api_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        model: state.model_name(),
        model_available: state.extractor.recognizer().is_available().await,
    })
}

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], templates::CSS)
}
