use super::types::{ArtifactKind, GenerationRequest, Prompt};

/// Output budget for migration generation.
pub const MIGRATION_MAX_TOKENS: u32 = 2000;

/// Output budget for validation rule generation.
pub const RULE_MAX_TOKENS: u32 = 1000;

/// Render a generation request into the prompt sent to the model.
///
/// Deterministic: identical requests yield byte-identical prompt text and
/// the same token budget.
pub fn build_prompt(request: &GenerationRequest) -> Prompt {
    match request.kind {
        ArtifactKind::Migration => migration_prompt(request),
        ArtifactKind::ValidationRule => rule_prompt(request),
    }
}

fn migration_prompt(request: &GenerationRequest) -> Prompt {
    let mut text = format!(
        "Generate a Laravel migration file that does the following:\n{}",
        request.description
    );

    if let Some(schema) = request.table_schema.as_deref().filter(|s| !s.is_empty()) {
        text.push_str("\nThe current schema of the table is as follows:\n");
        text.push_str(&schema.join(", "));
    }

    text.push_str(
        "\nProvide only the final Laravel migration file code using the anonymous class format like this:",
    );
    text.push_str("\n<?php\n\nreturn new class extends Migration {\n// migration methods\n};\n");
    text.push_str(
        "\nInclude everything like php tag and namespace, without any explanations or additional context.",
    );
    text.push_str("\nInclude type hints for methods and their arguments.");

    Prompt {
        text,
        max_tokens: MIGRATION_MAX_TOKENS,
    }
}

fn rule_prompt(request: &GenerationRequest) -> Prompt {
    let mut text = format!(
        "Generate the PHP code for a Laravel validation rule class named '{}' that implements the Rule interface and does the following:",
        request.name
    );
    text.push('\n');
    text.push_str(&request.description);
    text.push_str(
        "\nProvide only the final Laravel validation rule class code (include everything like <?php tag and namespace) without any explanations or additional context.",
    );
    text.push_str("\nInclude type hints for methods and their arguments.");

    Prompt {
        text,
        max_tokens: RULE_MAX_TOKENS,
    }
}
