use std::process::ExitCode;

use crate::config::Config;
use crate::llm::GeminiClient;

/// Startup validation: everything `generate` needs, minus the request.
pub(super) fn check(config: &Config) -> ExitCode {
    match GeminiClient::from_config(&config.gemini) {
        Ok(client) => {
            println!("model\t{}", client.model());
            println!("endpoint\t{}", client.endpoint());
            println!("api_key\tset ({})", config.gemini.api_key_env);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[plangen] {e}");
            ExitCode::FAILURE
        }
    }
}
