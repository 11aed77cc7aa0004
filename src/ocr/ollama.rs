//! Ollama-backed recognizer.

use async_trait::async_trait;

use super::backend::{OcrError, TextRecognizer};
use crate::llm::LlmClient;

#[async_trait]
impl TextRecognizer for LlmClient {
    fn model_name(&self) -> String {
        self.config().model.clone()
    }

    async fn is_available(&self) -> bool {
        LlmClient::is_available(self).await
    }

    async fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        Ok(self.transcribe_image(image).await?)
    }
}
