//! Model listing command.

use console::style;

use crate::config::Settings;
use crate::llm::LlmClient;

/// List models installed on the Ollama server.
pub async fn cmd_models(settings: &Settings) -> anyhow::Result<()> {
    let client = LlmClient::new(settings.llm.clone())?;
    let models = match client.list_models().await {
        Ok(models) => models,
        Err(e) => {
            eprintln!(
                "{} Could not reach Ollama at {}: {}",
                style("✗").red(),
                settings.llm.endpoint,
                e
            );
            std::process::exit(1);
        }
    };

    if models.is_empty() {
        println!("No models installed. Pull one with: ollama pull {}", settings.llm.model);
        return Ok(());
    }

    println!("\n{}", style(format!("Models at {}", settings.llm.endpoint)).bold());
    for name in &models {
        if *name == settings.llm.model {
            println!("  {} {} (configured)", style("✓").green(), name);
        } else {
            println!("    {}", name);
        }
    }

    if !models.contains(&settings.llm.model) {
        println!(
            "\n{} Configured model {} is not installed. Run: ollama pull {}",
            style("!").yellow(),
            settings.llm.model,
            settings.llm.model
        );
    }

    Ok(())
}
