mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_chat, handle_recommend, Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { data } => {
            handle_chat(&data, cli.config.as_deref())?;
        }
        Commands::Recommend {
            query,
            top,
            data,
            save,
        } => {
            handle_recommend(&query, top, &data, save.as_deref(), cli.config.as_deref())?;
        }
    }

    Ok(())
}
