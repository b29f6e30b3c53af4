use std::process::ExitCode;

use tokio::io::AsyncReadExt;

use crate::config::Config;
use crate::generator::ResponseGenerator;

pub(super) async fn generate(prompt: Option<String>, config: &Config) -> anyhow::Result<ExitCode> {
    let generator = match ResponseGenerator::from_config(&config.gemini) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("[plangen] {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let prompt = match prompt {
        Some(prompt) => prompt,
        None => read_prompt_from_stdin().await?,
    };

    match generator.generate_response(&prompt).await {
        Some(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

async fn read_prompt_from_stdin() -> anyhow::Result<String> {
    let mut prompt = String::new();
    tokio::io::stdin().read_to_string(&mut prompt).await?;
    // Drop the newline a shell pipe appends; interior whitespace is kept.
    Ok(strip_trailing_newline(prompt))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
