//! Recognizer abstraction: image bytes in, text out.

use async_trait::async_trait;
use thiserror::Error;

use crate::llm::LlmError;

/// Errors from a text recognizer.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("Recognition failed: {0}")]
    RecognitionFailed(String),
}

/// A service that turns image bytes into a text transcription.
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Name of the model or engine doing the work, for display.
    fn model_name(&self) -> String;

    /// Check whether the backing service is reachable.
    async fn is_available(&self) -> bool;

    /// Transcribe the text in `image`.
    async fn recognize(&self, image: &[u8]) -> Result<String, OcrError>;
}
