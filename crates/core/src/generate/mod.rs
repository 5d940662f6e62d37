pub mod naming;
pub mod prompt;
pub mod template;
pub mod types;

pub use naming::{is_valid_class_name, migration_file_name, rule_file_name, snake_case};
pub use prompt::{build_prompt, MIGRATION_MAX_TOKENS, RULE_MAX_TOKENS};
pub use template::render_rule_stub;
pub use types::{Artifact, ArtifactKind, GenerationRequest, Prompt};
