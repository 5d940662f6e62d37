//! Interactive input resolution.
//!
//! Turns optional command-line values into the required name/description
//! pair, asking the user on the terminal for anything that is missing.

use intellidb_core::generate::{is_valid_class_name, snake_case};

use crate::prelude::{println, *};

const MIGRATION_NAME_QUESTION: &str = "What should the migration be named?";
const MIGRATION_DESCRIPTION_QUESTION: &str =
    "Please describe the migration you want to generate (e.g., \"Add email column to users table\")";
const RULE_NAME_QUESTION: &str = "What should the rule be named?";
const RULE_DESCRIPTION_QUESTION: &str =
    "Please describe the validation rule you want to generate (e.g., \"validate unique email\")";

/// Capability for asking the user a question and blocking on the answer.
pub trait Prompter {
    fn ask(&self, question: &str) -> Result<String, Error>;
}

/// Prompter backed by stdin/stdout.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, question: &str) -> Result<String, Error> {
        println!("{question}");

        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;

        Ok(answer.trim().to_string())
    }
}

/// Resolve the migration name and description, prompting for missing
/// values. The name is normalized to snake_case.
pub fn resolve_migration_input(
    name: Option<String>,
    description: Option<String>,
    prompter: &impl Prompter,
) -> Result<(String, String), Error> {
    let name = required(name, MIGRATION_NAME_QUESTION, "migration name", prompter)?;
    let name = snake_case(&name);
    if name.is_empty() {
        return Err(Error::Validation("A migration name is required.".to_string()));
    }

    let description = required(
        description,
        MIGRATION_DESCRIPTION_QUESTION,
        "migration description",
        prompter,
    )?;

    Ok((name, description))
}

/// Resolve the rule class name and description, prompting for missing
/// values. The name is kept verbatim but must be a valid class identifier.
pub fn resolve_rule_input(
    name: Option<String>,
    description: Option<String>,
    prompter: &impl Prompter,
) -> Result<(String, String), Error> {
    let name = required(name, RULE_NAME_QUESTION, "rule name", prompter)?;
    if !is_valid_class_name(&name) {
        return Err(Error::Validation(format!(
            "The rule name '{name}' is not a valid class name."
        )));
    }

    let description = required(
        description,
        RULE_DESCRIPTION_QUESTION,
        "rule description",
        prompter,
    )?;

    Ok((name, description))
}

fn required(
    value: Option<String>,
    question: &str,
    what: &str,
    prompter: &impl Prompter,
) -> Result<String, Error> {
    let value = match value {
        Some(value) => value,
        None => prompter.ask(question)?,
    };

    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(Error::Validation(format!("A {what} is required.")));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Prompter that pops queued answers, recording every question asked.
    struct QueuedPrompter {
        answers: RefCell<Vec<String>>,
        questions: RefCell<Vec<String>>,
    }

    impl QueuedPrompter {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().rev().map(|s| s.to_string()).collect()),
                questions: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompter for QueuedPrompter {
        fn ask(&self, question: &str) -> Result<String, Error> {
            self.questions.borrow_mut().push(question.to_string());
            Ok(self.answers.borrow_mut().pop().unwrap_or_default())
        }
    }

    #[test]
    fn test_supplied_values_skip_prompting() {
        let prompter = QueuedPrompter::new(&[]);
        let (name, description) = resolve_migration_input(
            Some("Add email to users".to_string()),
            Some("Add email column".to_string()),
            &prompter,
        )
        .unwrap();

        assert_eq!(name, "add_email_to_users");
        assert_eq!(description, "Add email column");
        assert!(prompter.questions.borrow().is_empty());
    }

    #[test]
    fn test_missing_values_are_prompted_for() {
        let prompter = QueuedPrompter::new(&["create posts table", "Create the posts table"]);
        let (name, description) = resolve_migration_input(None, None, &prompter).unwrap();

        assert_eq!(name, "create_posts_table");
        assert_eq!(description, "Create the posts table");
        assert_eq!(
            *prompter.questions.borrow(),
            vec![
                MIGRATION_NAME_QUESTION.to_string(),
                MIGRATION_DESCRIPTION_QUESTION.to_string()
            ]
        );
    }

    #[test]
    fn test_empty_answer_after_prompting_fails() {
        let prompter = QueuedPrompter::new(&["", ""]);
        let err = resolve_migration_input(None, None, &prompter).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_rule_name_kept_verbatim() {
        let prompter = QueuedPrompter::new(&[]);
        let (name, _) = resolve_rule_input(
            Some("UniqueEmail".to_string()),
            Some("validate unique email".to_string()),
            &prompter,
        )
        .unwrap();

        assert_eq!(name, "UniqueEmail");
    }

    #[test]
    fn test_rule_name_must_be_a_class_identifier() {
        let prompter = QueuedPrompter::new(&[]);
        let err = resolve_rule_input(
            Some("Unique Email".to_string()),
            Some("validate unique email".to_string()),
            &prompter,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
    }
}
