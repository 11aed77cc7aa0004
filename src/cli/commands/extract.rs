//! Single-image extraction command.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Settings;
use crate::llm::LlmClient;
use crate::ocr::{ExtractionResult, TextExtractor};
use crate::utils::{accept_attribute, format_size, is_accepted_image};

/// Extract text from an image file and print it.
pub async fn cmd_extract(settings: &Settings, image: &Path, json: bool) -> anyhow::Result<()> {
    let display = image.display().to_string();
    if !is_accepted_image(&display) {
        anyhow::bail!(
            "Unsupported file type: {} (accepted: {})",
            display,
            accept_attribute()
        );
    }

    let bytes = tokio::fs::read(image)
        .await
        .with_context(|| format!("Failed to read {}", display))?;

    let client = LlmClient::new(settings.llm.clone())?;
    let extractor = TextExtractor::new(Arc::new(client));

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message(format!(
        "Processing {} ({}) with {}...",
        display,
        format_size(bytes.len() as u64),
        settings.llm.model
    ));

    let result = extractor.extract(&bytes).await;
    pb.finish_and_clear();

    match result {
        Ok(result) if json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Ok(result) => {
            print!("{}", render_result(&result));
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            eprintln!("  Failed to extract text from the image.");
            std::process::exit(1);
        }
    }
}

/// Human-readable report: text, metrics and any detected entities.
fn render_result(result: &ExtractionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", style("Extracted Text").bold()));
    out.push_str(&result.raw_text);
    if !result.raw_text.ends_with('\n') {
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} {}    {} {}\n",
        style("Lines:").cyan(),
        result.line_count,
        style("Words:").cyan(),
        result.word_count
    ));

    let entities = &result.entities;
    if !entities.is_empty() {
        out.push_str(&format!("\n{}\n", style("Detected Entities").bold()));
        for (label, values) in [
            ("Emails", &entities.emails),
            ("Phone numbers", &entities.phone_numbers),
            ("URLs", &entities.urls),
        ] {
            if values.is_empty() {
                continue;
            }
            out.push_str(&format!("  {}\n", style(label).cyan()));
            for value in values {
                out.push_str(&format!("    - {}\n", value));
            }
        }
    }

    out
}
