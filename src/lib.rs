//! lensocr - image text extraction with a local vision model.
//!
//! Sends an uploaded image to a vision-language model served by Ollama,
//! then derives line and word counts plus emails, phone numbers and URLs
//! from the transcription. Exposed through a small web UI and a CLI.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;
pub mod ocr;
pub mod server;
pub mod utils;
