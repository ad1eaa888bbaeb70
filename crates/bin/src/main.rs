use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so command output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("persona=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Inspect(args) => {
            commands::inspect::run(args, OutputFormat::from_json_flag(args.json))
        }
        Commands::LoginParams(args) => {
            commands::login_params::run(args, OutputFormat::from_json_flag(args.json))
        }
    }
}
