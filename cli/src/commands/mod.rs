pub mod chat;
pub mod recommend;
pub mod ui;

pub use chat::handle_chat;
pub use recommend::handle_recommend;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "savor")]
#[command(about = "restaurant recommendations from free-text preferences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .savor.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive recommendation session
    Chat {
        /// Restaurant catalog CSV
        #[arg(long, value_name = "FILE")]
        data: PathBuf,
    },
    /// One-shot recommendation for a single query
    Recommend {
        /// Free-text preference query
        query: String,

        /// Number of recommendations
        #[arg(long, default_value_t = 3)]
        top: usize,

        /// Restaurant catalog CSV
        #[arg(long, value_name = "FILE")]
        data: PathBuf,

        /// Write the results to this CSV file
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },
}
