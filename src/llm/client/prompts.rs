//! Default prompts sent alongside images.

/// Default instruction for vision-model text extraction.
pub const DEFAULT_OCR_PROMPT: &str = r#"Analyze the text in the provided image. Your task is to:
1. Extract ALL readable text content
2. Provide a detailed, structured analysis including:
   - Raw extracted text
   - Line count
   - Word count
   - Key entities (if any)
3. Format the output as a clear, readable response"#;
