//! Text extraction from images.
//!
//! A `TextRecognizer` turns image bytes into text (the Ollama client is the
//! production recognizer); `TextExtractor` wraps one and post-processes its
//! reply into an `ExtractionResult`.

mod backend;
mod extractor;
mod ollama;

pub use backend::{OcrError, TextRecognizer};
pub use extractor::{ExtractionError, ExtractionResult, TextExtractor};

#[cfg(test)]
pub(crate) use extractor::tests::FakeRecognizer;
