//! The `rule` subcommand.
//!
//! Unlike migrations, rule generation is advisory: when the upstream call
//! fails, the command degrades to the embedded stub template and still
//! succeeds.

use std::path::{Path, PathBuf};

use colored::Colorize;
use intellidb_core::generate::{
    build_prompt, render_rule_stub, rule_file_name, Artifact, ArtifactKind, GenerationRequest,
};

use crate::input::{self, TerminalPrompter};
use crate::openai::{GenerationClient, OpenAiClient};
use crate::prelude::{eprintln, println, *};

const DEFAULT_RULES_DIR: &str = "app/Rules";

#[derive(Debug, clap::Args)]
pub struct Options {
    /// The name of the rule
    pub name: Option<String>,

    /// The description of the validation rule
    #[arg(short, long)]
    pub description: Option<String>,

    /// Model used for generation
    #[arg(long, env = "INTELLIDB_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,
}

/// Provider of the default class body used when generation fails.
pub trait FallbackTemplate {
    fn render(&self, class_name: &str) -> String;
}

/// Fallback backed by the embedded rule stub.
pub struct StubTemplate;

impl FallbackTemplate for StubTemplate {
    fn render(&self, class_name: &str) -> String {
        render_rule_stub(class_name)
    }
}

/// Result of a rule generation run.
#[derive(Debug)]
pub struct RuleOutcome {
    pub path: PathBuf,
    /// The transport error message, when the fallback stub was written
    /// instead of generated content.
    pub fallback: Option<String>,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let (name, description) = input::resolve_rule_input(
        options.name.clone(),
        options.description.clone(),
        &TerminalPrompter,
    )?;

    if global.verbose {
        eprintln!("Name: {name}");
        eprintln!("Model: {}", options.model);
    }

    let client = OpenAiClient::from_env(options.model.clone())?;

    println!("Generating AI rule, this might take a few moments...");

    let outcome = generate_rule_data(
        &name,
        &description,
        Path::new(DEFAULT_RULES_DIR),
        &client,
        &StubTemplate,
    )
    .await?;

    if let Some(reason) = &outcome.fallback {
        eprintln!("{}", reason.red());
        eprintln!("Falling back to the default rule template.");
    }

    println!("{}", format!("Rule [{name}] created successfully.").green());
    if global.verbose {
        eprintln!("Written to {}", outcome.path.display());
    }

    Ok(())
}

/// Build the prompt, call the generation service, and persist the rule
/// class. A transport failure downgrades to the fallback template; every
/// other failure is surfaced.
pub async fn generate_rule_data(
    name: &str,
    description: &str,
    directory: &Path,
    client: &impl GenerationClient,
    fallback: &impl FallbackTemplate,
) -> Result<RuleOutcome, Error> {
    let request = GenerationRequest {
        kind: ArtifactKind::ValidationRule,
        name: name.to_string(),
        description: description.to_string(),
        table_schema: None,
        output_path: None,
    };

    let prompt = build_prompt(&request);

    let (content, fallback_reason) = match client.generate(&prompt).await {
        Ok(content) => (content, None),
        Err(err @ Error::Transport { .. }) => (fallback.render(name), Some(err.to_string())),
        Err(err) => return Err(err),
    };

    let artifact = Artifact {
        file_name: rule_file_name(name),
        directory: directory.to_path_buf(),
        content,
    };
    let path = crate::artifact::write(&artifact)?;

    Ok(RuleOutcome {
        path,
        fallback: fallback_reason,
    })
}
