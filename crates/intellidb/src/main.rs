#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod artifact;
mod error;
mod input;
mod migration;
mod openai;
mod prelude;
mod rule;
mod schema;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "AI-assisted generator for Laravel migrations and validation rules"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "INTELLIDB_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Create a new migration using AI
    Migration(crate::migration::Options),

    /// Create a new validation rule using AI
    Rule(crate::rule::Options),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Migration(options) => crate::migration::run(options, app.global).await,
        SubCommands::Rule(options) => crate::rule::run(options, app.global).await,
    }
}
