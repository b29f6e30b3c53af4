use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};

use crate::config::Config;

mod check;
mod generate;

#[derive(Parser)]
#[command(name = "plangen", about = "Send a prompt to Gemini and print the reply")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/plangen/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log to file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a response for a prompt
    Generate {
        /// Prompt text; read from stdin when omitted
        prompt: Option<String>,
    },
    /// Validate config and API key without calling the API
    Check,
}

pub async fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    crate::logging::init(cli.verbose, cli.log_file, &config.logging)?;

    match cli.command {
        Some(Commands::Generate { prompt }) => generate::generate(prompt, &config).await,
        Some(Commands::Check) => Ok(check::check(&config)),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::SUCCESS)
        }
    }
}
