pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hltb")]
#[command(about = "Query howlongtobeat.com completion times", long_about = None)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search games by title
    Search {
        /// Query words, e.g. `hltb search dark souls`
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Show one game by its site-internal id
    Detail {
        /// Game id, e.g. 3978
        id: String,
    },
}
