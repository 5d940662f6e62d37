//! The `migration` subcommand.

use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;
use intellidb_core::generate::{
    build_prompt, migration_file_name, Artifact, ArtifactKind, GenerationRequest,
};

use crate::input::{self, TerminalPrompter};
use crate::openai::{GenerationClient, OpenAiClient};
use crate::prelude::{eprintln, println, *};
use crate::schema::{SchemaProbe, SqliteProbe};

const DEFAULT_MIGRATIONS_DIR: &str = "database/migrations";

#[derive(Debug, clap::Args)]
pub struct Options {
    /// The name of the migration
    pub name: Option<String>,

    /// The description of the migration
    #[arg(short, long)]
    pub description: Option<String>,

    /// The table name for the migration
    #[arg(short, long)]
    pub table: Option<String>,

    /// The location where the migration file should be created
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// SQLite database file used to inspect the current schema
    #[arg(
        long,
        env = "INTELLIDB_DATABASE",
        default_value = "database/database.sqlite"
    )]
    pub database: PathBuf,

    /// Model used for generation
    #[arg(long, env = "INTELLIDB_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let (name, description) = input::resolve_migration_input(
        options.name.clone(),
        options.description.clone(),
        &TerminalPrompter,
    )?;

    if global.verbose {
        eprintln!("Name: {name}");
        eprintln!("Database: {}", options.database.display());
        eprintln!("Model: {}", options.model);
    }

    let probe = SqliteProbe::new(options.database.clone());
    let client = OpenAiClient::from_env(options.model.clone())?;

    println!("Generating AI migration, this might take a few moments...");

    let path = generate_migration_data(
        &name,
        &description,
        options.table.as_deref(),
        options.path.as_deref(),
        &probe,
        &client,
    )
    .await?;

    println!(
        "{}",
        format!("Migration [{name}] created successfully.").green()
    );
    if global.verbose {
        eprintln!("Written to {}", path.display());
    }

    Ok(())
}

/// Probe the schema, build the prompt, call the generation service, and
/// persist the migration file. Returns the written path.
///
/// When a table is referenced but absent, this fails before the generation
/// service is ever contacted.
pub async fn generate_migration_data(
    name: &str,
    description: &str,
    table: Option<&str>,
    output_path: Option<&Path>,
    probe: &impl SchemaProbe,
    client: &impl GenerationClient,
) -> Result<PathBuf, Error> {
    let table_schema = match table {
        Some(table) => {
            if !probe.table_exists(table)? {
                return Err(Error::SchemaNotFound(table.to_string()));
            }
            Some(probe.list_columns(table)?)
        }
        None => None,
    };

    let request = GenerationRequest {
        kind: ArtifactKind::Migration,
        name: name.to_string(),
        description: description.to_string(),
        table_schema,
        output_path: output_path.map(Path::to_path_buf),
    };

    let prompt = build_prompt(&request);
    let content = client.generate(&prompt).await?;

    let directory = request
        .output_path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MIGRATIONS_DIR));

    let artifact = Artifact {
        file_name: migration_file_name(&request.name, Utc::now()),
        directory,
        content,
    };

    crate::artifact::write(&artifact)
}
