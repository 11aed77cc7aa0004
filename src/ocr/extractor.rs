//! Image-to-text extraction with post-processing.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::backend::TextRecognizer;
use crate::analysis::{line_count, word_count, EntityBundle};

/// The single failure kind of an extraction.
///
/// Network failures, server errors and malformed replies all collapse into
/// this; the message is meant for the user.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Error processing image: {0}")]
    Failed(String),
}

/// Text recognized in one image, with derived counts and entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub raw_text: String,
    pub line_count: usize,
    pub word_count: usize,
    pub entities: EntityBundle,
}

impl ExtractionResult {
    /// Derive counts and entities from recognized text.
    pub fn from_text(raw_text: String) -> Self {
        Self {
            line_count: line_count(&raw_text),
            word_count: word_count(&raw_text),
            entities: EntityBundle::from_text(&raw_text),
            raw_text,
        }
    }
}

/// Runs a recognizer over an image and post-processes its reply.
#[derive(Clone)]
pub struct TextExtractor {
    recognizer: Arc<dyn TextRecognizer>,
}

impl TextExtractor {
    pub fn new(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { recognizer }
    }

    /// The recognizer behind this extractor.
    pub fn recognizer(&self) -> &dyn TextRecognizer {
        self.recognizer.as_ref()
    }

    /// Extract text from `image`.
    ///
    /// Empty input is rejected without contacting the recognizer. On any
    /// recognizer failure nothing is post-processed.
    pub async fn extract(&self, image: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        if image.is_empty() {
            return Err(ExtractionError::Failed("uploaded image is empty".to_string()));
        }

        let start = Instant::now();
        let raw_text = match self.recognizer.recognize(image).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Extraction with {} failed after {}ms: {}",
                    self.recognizer.model_name(),
                    start.elapsed().as_millis(),
                    e
                );
                return Err(ExtractionError::Failed(e.to_string()));
            }
        };

        let result = ExtractionResult::from_text(raw_text);
        info!(
            "Extracted {} words from {} byte image in {}ms ({} entities)",
            result.word_count,
            image.len(),
            start.elapsed().as_millis(),
            result.entities.total()
        );
        Ok(result)
    }
}
