//! Web server for the upload-and-extract interface.
//!
//! One page: pick an image, submit, read the extracted text, counts and
//! detected entities. A JSON API exposes the same extraction.

mod handlers;
mod routes;
mod templates;
mod upload;

pub use routes::create_router;
pub use upload::{ImageUpload, UploadError};

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Settings;
use crate::llm::LlmClient;
use crate::ocr::TextExtractor;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub extractor: TextExtractor,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = LlmClient::new(settings.llm.clone())?;
        Ok(Self {
            extractor: TextExtractor::new(Arc::new(client)),
            max_upload_bytes: settings.server.max_upload_bytes,
        })
    }

    fn model_name(&self) -> String {
        self.extractor.recognizer().model_name()
    }
}

/// Bind a listener, resolving host names such as `localhost`.
pub async fn bind_listener(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let listener = bind_listener(host, port).await?;
    tracing::info!(
        "Starting server at http://{} (model: {} at {})",
        listener.local_addr()?,
        settings.llm.model,
        settings.llm.endpoint
    );

    axum::serve(listener, app).await?;

    Ok(())
}
