//! LLM integration.
//!
//! Talks to a local Ollama server hosting a vision-language model.

mod client;

pub use client::{LlmClient, LlmConfig, LlmError, DEFAULT_OCR_PROMPT, REQUEST_TIMEOUT};
