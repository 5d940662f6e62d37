use std::path::PathBuf;

/// Kind of artifact the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A schema migration file.
    Migration,
    /// A validation rule class.
    ValidationRule,
}

/// A validated request for artifact generation.
///
/// Constructed once per invocation from resolved user input, consumed by
/// [`crate::generate::build_prompt`], and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub kind: ArtifactKind,
    /// snake_case for migrations, verbatim class identifier for rules.
    pub name: String,
    /// Free-text description of the desired change. Never empty.
    pub description: String,
    /// Column names of the referenced table, in schema order. Present only
    /// when the caller supplied a table name and the table exists.
    pub table_schema: Option<Vec<String>>,
    /// Target directory override. Absent means the caller's default.
    pub output_path: Option<PathBuf>,
}

/// A rendered prompt together with its output budget.
///
/// Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    /// Upper bound on tokens the generation service may produce.
    pub max_tokens: u32,
}

/// A generated file ready to be persisted.
///
/// Created only at the final write step; no partial artifact exists before
/// that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub directory: PathBuf,
    pub content: String,
}
